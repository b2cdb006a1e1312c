//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use ean13_core::Prefix;

use crate::output::{LineEnding, OutputFormat};

#[derive(Parser)]
#[command(
    name = "ean13",
    version,
    about = "Generate, encode, decode and validate EAN-13 identifiers",
    long_about = "Generate, encode, decode and validate EAN-13 identifiers.\n\n\
                  Check digits follow the GS1 General Specifications. Codes can be\n\
                  minted inside reserved ranges (private, books, ISBN, ISSN)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a batch of consecutive codes.
    Generate(GenerateArgs),

    /// Encode a single payload into a prefix range.
    Encode(EncodeArgs),

    /// Extract the payload from a code.
    Decode(DecodeArgs),

    /// Check one or more codes.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// First payload (without check digit).
    #[arg(short = 's', long, env = "EAN13_START", default_value_t = 20_000_000_000)]
    pub start: i64,

    /// Number of codes to generate.
    #[arg(short = 'c', long, env = "EAN13_COUNT", default_value_t = 1)]
    pub count: u64,

    /// Distance between consecutive payloads.
    #[arg(long, env = "EAN13_STEP", default_value_t = ean13_core::sequence::DEFAULT_STEP)]
    pub step: i64,

    /// Reserved range to generate into.
    #[arg(short = 'p', long, env = "EAN13_PREFIX", default_value = "null")]
    pub prefix: Prefix,

    /// Output file (default is stdout).
    #[arg(short = 'o', long, env = "EAN13_OUTPUT", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Terminate lines with CRLF instead of LF.
    #[arg(long)]
    pub crlf: bool,
}

impl GenerateArgs {
    pub fn line_ending(&self) -> LineEnding {
        if self.crlf { LineEnding::CrLf } else { LineEnding::Lf }
    }
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Payload to encode.
    #[arg(allow_negative_numbers = true)]
    pub payload: i64,

    /// Reserved range to encode into.
    #[arg(short = 'p', long, env = "EAN13_PREFIX", default_value = "private")]
    pub prefix: Prefix,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Code to decode.
    pub code: String,

    /// Expected range (inferred from the leading digits when omitted).
    #[arg(short = 'p', long)]
    pub prefix: Option<Prefix>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Codes to check.
    #[arg(required = true, allow_negative_numbers = true)]
    pub codes: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// One code per line.
    Text,
    /// One JSON object per line.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
