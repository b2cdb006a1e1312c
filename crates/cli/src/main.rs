//! `ean13` command-line tool.

use std::io::{self, IsTerminal};

use clap::Parser;
use ean13_cli::cli::{Cli, Command, LogFormatArg};
use ean13_cli::commands::{exit_code, run_decode, run_encode, run_generate, run_validate};
use ean13_observability::{LogConfig, LogFormat};

fn main() {
    let cli = Cli::parse();
    ean13_observability::init(&log_config_from_cli(&cli));

    let stdout = io::stdout().lock();
    let outcome = match &cli.command {
        Command::Generate(args) => run_generate(args, stdout).map(|_| true),
        Command::Encode(args) => run_encode(args, stdout).map(|_| true),
        Command::Decode(args) => run_decode(args, stdout).map(|_| true),
        Command::Validate(args) => run_validate(args, stdout),
    };

    std::process::exit(exit_code(outcome, io::stderr().lock()));
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };

    LogConfig::default()
        .with_level(cli.verbosity.tracing_level_filter())
        .with_format(format)
        .with_ansi(io::stderr().is_terminal())
}
