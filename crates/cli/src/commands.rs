//! Subcommand implementations.
//!
//! Each command takes the sink for its primary output so tests can capture it.

use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use ean13_core::{Ean13, EanError, Prefix, Sequence};
use tracing::{debug, info, info_span, warn};

use crate::cli::{DecodeArgs, EncodeArgs, GenerateArgs, ValidateArgs};
use crate::output::write_codes;

/// Result of a `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub written: u64,
    /// File path, or `"stdout"`.
    pub destination: String,
}

pub fn run_generate<W: Write>(args: &GenerateArgs, stdout: W) -> Result<GenerateSummary> {
    let _span = info_span!(
        "generate",
        start = args.start,
        count = args.count,
        step = args.step,
        prefix = %args.prefix
    )
    .entered();

    let sequence = Sequence::new(args.start, args.count, args.prefix.value()).with_step(args.step);
    let format = args.format.into();
    let line_ending = args.line_ending();

    let (written, destination) = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            debug!(path = %path.display(), "writing to file");
            let written = write_codes(sequence, format, line_ending, file)?;
            (written, path.display().to_string())
        }
        None => (write_codes(sequence, format, line_ending, stdout)?, "stdout".to_string()),
    };

    info!(written, destination = %destination, "generated codes");
    Ok(GenerateSummary {
        written,
        destination,
    })
}

pub fn run_encode<W: Write>(args: &EncodeArgs, mut stdout: W) -> Result<Ean13> {
    let _span = info_span!("encode", payload = args.payload, prefix = %args.prefix).entered();

    let code = args
        .prefix
        .encode(args.payload)
        .with_context(|| format!("cannot encode {} into the {} range", args.payload, args.prefix))?;

    writeln!(stdout, "{code}")?;
    debug!(%code, "encoded");
    Ok(code)
}

pub fn run_decode<W: Write>(args: &DecodeArgs, mut stdout: W) -> Result<i64> {
    let _span = info_span!("decode", code = %args.code).entered();

    let code: Ean13 = args
        .code
        .parse()
        .with_context(|| format!("'{}' is not a valid EAN-13", args.code))?;

    let prefix = match args.prefix {
        Some(prefix) => prefix,
        None => {
            let inferred = Prefix::try_from(code).unwrap_or(Prefix::Null);
            debug!(prefix = %inferred, "inferred prefix");
            inferred
        }
    };

    let payload = prefix
        .decode(code)
        .with_context(|| format!("{code} is not in the {prefix} range"))?;

    writeln!(stdout, "{payload}")?;
    info!(payload, prefix = %prefix, "decoded");
    Ok(payload)
}

/// Maps a command outcome to the process exit code.
///
/// A failure is reported once on `stderr` with its full context chain.
pub fn exit_code<W: Write>(outcome: Result<bool>, mut stderr: W) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            let _ = writeln!(stderr, "error: {error:#}");
            1
        }
    }
}

/// Prints a verdict per code. Returns whether every code was valid.
pub fn run_validate<W: Write>(args: &ValidateArgs, mut stdout: W) -> Result<bool> {
    let _span = info_span!("validate", codes = args.codes.len()).entered();
    let mut all_valid = true;

    for text in &args.codes {
        match Ean13::parse(text) {
            Ok(_) => writeln!(stdout, "{text} VALID")?,
            Err(err @ EanError::Parse(_)) => {
                all_valid = false;
                warn!(input = %text, error = %err, "not a number");
                writeln!(stdout, "{text} INVALID ({err})")?;
            }
            Err(err) => {
                all_valid = false;
                debug!(input = %text, error = %err, "rejected");
                writeln!(stdout, "{text} INVALID")?;
            }
        }
    }

    Ok(all_valid)
}
