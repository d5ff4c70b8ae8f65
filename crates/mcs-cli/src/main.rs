//! Music Concierge support dashboard CLI.

use clap::{ColorChoice, Parser};
use mcs_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::Level;

mod cli;
mod commands;
mod render;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_channels, run_logs, run_overrides, run_raw, run_schedules, run_status,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Status => run_status(&cli),
        Command::Raw => run_raw(&cli),
        Command::Channels(args) => run_channels(&cli, args),
        Command::Schedules(args) => run_schedules(&cli, args),
        Command::Overrides(args) => run_overrides(&cli, args),
        Command::Logs(args) => run_logs(&cli, args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = match cli.log_level {
        Some(LogLevelArg::Error) => Level::ERROR,
        Some(LogLevelArg::Warn) => Level::WARN,
        Some(LogLevelArg::Info) => Level::INFO,
        Some(LogLevelArg::Debug) => Level::DEBUG,
        Some(LogLevelArg::Trace) => Level::TRACE,
        None => cli
            .verbosity
            .tracing_level_filter()
            .into_level()
            .unwrap_or(Level::ERROR),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level,
        format,
        log_file: cli.log_file.clone(),
        with_ansi,
        ..LogConfig::default()
    }
}
