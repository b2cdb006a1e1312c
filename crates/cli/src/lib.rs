//! Command-line front-end for the EAN-13 codec.
//!
//! Everything here is glue: argument parsing, output sinks and reporting.
//! The numeric work lives in `ean13-core`.

pub mod cli;
pub mod commands;
pub mod output;
