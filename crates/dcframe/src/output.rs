use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use dcframe_frame::{Frame, Outcome};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameOutput {
    outcome: Outcome,
    input_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    declared_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<String>,
}

impl FrameOutput {
    fn new(frame: &Frame, input_size: usize) -> Self {
        // Header fields are only trustworthy once a whole frame validated.
        let valid = frame.outcome.is_frame();
        Self {
            outcome: frame.outcome,
            input_size,
            identifier: valid.then_some(frame.identifier),
            data_length: valid.then_some(frame.data_length),
            declared_length: (valid && frame.is_truncated()).then(|| frame.declared_length()),
            payload: valid.then(|| to_hex(frame.payload())),
        }
    }
}

pub fn print_frame(frame: &Frame, input_size: usize, format: OutputFormat) {
    let out = FrameOutput::new(frame, input_size);
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["OUTCOME", "ID", "LENGTH", "PAYLOAD"])
                .add_row(vec![
                    out.outcome.to_string(),
                    display_opt(out.identifier),
                    display_opt(out.data_length),
                    out.payload.clone().unwrap_or_else(|| "-".to_string()),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match out.payload {
            Some(payload) => println!(
                "outcome={} id={} length={} payload={} ({})",
                out.outcome,
                frame.identifier,
                frame.data_length,
                payload,
                payload_preview(frame.payload())
            ),
            None => println!("outcome={} input={} bytes", out.outcome, input_size),
        },
        OutputFormat::Raw => {
            if frame.outcome.is_frame() {
                print_raw(frame.payload());
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_opt(value: Option<u8>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) if text.chars().all(|c| !c.is_control()) => format!("{text:?}"),
        _ => format!("<binary {} bytes>", payload.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcframe_frame::decode;

    #[test]
    fn json_includes_fields_for_valid_frame() {
        let frame = decode(&[0x44, 0x43, 0x3A, 0x11, 0x22, 0x33, 0x27]);
        let value = serde_json::to_value(FrameOutput::new(&frame, 7)).unwrap();

        assert_eq!(value["outcome"], "ok");
        assert_eq!(value["identifier"], 10);
        assert_eq!(value["data_length"], 3);
        assert_eq!(value["payload"], "11 22 33");
        assert!(value.get("declared_length").is_none());
    }

    #[test]
    fn json_omits_fields_for_failed_decode() {
        let frame = decode(&[0x44, 0x43, 0x3A, 0x11, 0x22, 0x33, 0x28]);
        let value = serde_json::to_value(FrameOutput::new(&frame, 7)).unwrap();

        assert_eq!(value["outcome"], "wrong_checksum");
        assert_eq!(value["input_size"], 7);
        assert!(value.get("identifier").is_none());
        assert!(value.get("payload").is_none());
    }

    #[test]
    fn preview_flags_binary_payloads() {
        assert_eq!(payload_preview(b"hi"), "\"hi\"");
        assert_eq!(payload_preview(&[0x00, 0xFF]), "<binary 2 bytes>");
    }
}
