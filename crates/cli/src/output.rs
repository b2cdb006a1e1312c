//! Writing generated codes to a sink.

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use ean13_core::{Ean13, Sequence};
use serde::Serialize;

/// Line layout for generated codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The code's decimal string.
    #[default]
    Text,
    /// `{"payload":..,"ean13":..}` per line.
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// One generated code with the payload it encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeRecord {
    pub payload: i64,
    pub ean13: Ean13,
}

/// Runs `sequence` and writes every code to `sink`, one per line.
///
/// The sink is buffered and flushed before returning, also when encoding
/// fails part-way. Returns the number of codes written.
pub fn write_codes<W: Write>(
    sequence: Sequence,
    format: OutputFormat,
    line_ending: LineEnding,
    sink: W,
) -> Result<u64> {
    let mut out = BufWriter::new(sink);
    let outcome = write_lines(&sequence, format, line_ending, &mut out);
    let flushed = out.flush().context("failed to flush output");

    let written = outcome?;
    flushed?;
    Ok(written)
}

fn write_lines<W: Write>(
    sequence: &Sequence,
    format: OutputFormat,
    line_ending: LineEnding,
    out: &mut W,
) -> Result<u64> {
    let mut written = 0u64;

    for (index, result) in (0u64..).zip(sequence.clone()) {
        let payload = sequence.payload_at(index);
        let ean13 = result.with_context(|| match payload {
            Some(payload) => format!("failed to encode payload {payload}"),
            None => format!("payload #{index} overflows"),
        })?;

        match format {
            OutputFormat::Text => write!(out, "{ean13}")?,
            OutputFormat::Json => {
                let record = CodeRecord {
                    // payload_at succeeded, otherwise encode would have failed
                    payload: payload.unwrap_or_default(),
                    ean13,
                };
                serde_json::to_writer(&mut *out, &record)?;
            }
        }
        out.write_all(line_ending.as_str().as_bytes())
            .context("failed to write output")?;

        written += 1;
        tracing::trace!(%ean13, "wrote code");
    }

    Ok(written)
}
