use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode the first frame found in a buffer.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frame bytes as hex (e.g. "44 43 3A 11 22 33 27" or "0x44,0x43,...").
    #[arg(conflicts_with_all = ["file", "stdin"])]
    pub data: Option<String>,
    /// Read the buffer from a file.
    #[arg(long, conflicts_with_all = ["data", "stdin"])]
    pub file: Option<PathBuf>,
    /// Read the buffer from stdin (the default when no other source is given).
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub stdin: bool,
    /// Treat file/stdin contents as hex text instead of raw bytes.
    #[arg(long)]
    pub hex: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
