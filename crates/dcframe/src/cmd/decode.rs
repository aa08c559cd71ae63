use std::fs;
use std::io::Read;

use dcframe_frame::decode;

use crate::cmd::DecodeArgs;
use crate::exit::{io_error, outcome_code, CliError, CliResult, USAGE};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = resolve_input(&args)?;
    tracing::debug!(input_size = input.len(), "decoding buffer");

    let frame = decode(&input);
    if frame.outcome.is_frame() {
        tracing::info!(
            outcome = %frame.outcome,
            identifier = frame.identifier,
            data_length = frame.data_length,
            "frame decoded"
        );
        if frame.is_truncated() {
            tracing::warn!(
                declared = frame.declared_length(),
                capacity = frame.capacity(),
                "payload truncated to capacity"
            );
        }
    } else {
        tracing::warn!(outcome = %frame.outcome, input_size = input.len(), "no frame decoded");
    }

    print_frame(&frame, input.len(), format);
    Ok(outcome_code(frame.outcome))
}

fn resolve_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return parse_hex(data);
    }

    let raw = match &args.file {
        Some(path) => fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?,
        None => {
            if !args.stdin {
                tracing::debug!("no input source given, reading stdin");
            }
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|err| io_error("failed reading stdin", err))?;
            buf
        }
    };

    if args.hex {
        let text = std::str::from_utf8(&raw)
            .map_err(|_| CliError::new(USAGE, "--hex input is not valid UTF-8"))?;
        return parse_hex(text);
    }
    Ok(raw)
}

/// Parse hex text. Bytes may be run together ("44433a") or separated by
/// whitespace, `,` or `:`, each group optionally prefixed with `0x`.
fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let mut bytes = Vec::new();
    for group in input
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .filter(|group| !group.is_empty())
    {
        let digits = group
            .strip_prefix("0x")
            .or_else(|| group.strip_prefix("0X"))
            .unwrap_or(group);

        if digits.is_empty() || digits.len() % 2 != 0 {
            return Err(CliError::new(
                USAGE,
                format!("invalid hex group: {group:?} (need an even number of digits)"),
            ));
        }

        for pair in digits.as_bytes().chunks(2) {
            let pair = std::str::from_utf8(pair)
                .map_err(|_| CliError::new(USAGE, format!("invalid hex group: {group:?}")))?;
            let byte = u8::from_str_radix(pair, 16)
                .map_err(|_| CliError::new(USAGE, format!("invalid hex digits: {pair:?}")))?;
            bytes.push(byte);
        }
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_common_layouts() {
        let expected = vec![0x44, 0x43, 0x3A];
        assert_eq!(parse_hex("44 43 3A").unwrap(), expected);
        assert_eq!(parse_hex("44433a").unwrap(), expected);
        assert_eq!(parse_hex("0x44,0x43,0x3A").unwrap(), expected);
        assert_eq!(parse_hex("44:43:3a\n").unwrap(), expected);
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert_eq!(parse_hex("444").unwrap_err().code, USAGE);
        assert_eq!(parse_hex("zz").unwrap_err().code, USAGE);
        assert_eq!(parse_hex("0x").unwrap_err().code, USAGE);
    }

    #[test]
    fn resolve_input_prefers_positional_hex() {
        let args = DecodeArgs {
            data: Some("44 43 00 87".to_string()),
            file: None,
            stdin: false,
            hex: false,
        };
        assert_eq!(resolve_input(&args).unwrap(), vec![0x44, 0x43, 0x00, 0x87]);
    }
}
