//! CLI argument definitions for the support dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mcs",
    version,
    about = "Music Concierge support dashboard",
    long_about = "Inspect the playout platform's configuration snapshots:\n\
                  channel topology, per-channel music schedules, override\n\
                  schedules, and engine/playback logs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration snapshot directory (also via MCS_CONFIG_DIR).
    #[arg(long = "config-root", value_name = "DIR", global = true)]
    pub config_root: Option<PathBuf>,

    /// Per-channel music directory (also via MCS_MUSIC_DIR).
    #[arg(long = "music-root", value_name = "DIR", global = true)]
    pub music_root: Option<PathBuf>,

    /// Flat log directory (also via MCS_LOG_DIR).
    #[arg(long = "log-dir", value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the current snapshot, service URL, and channel outline.
    Status,

    /// Dump the raw configuration document text.
    Raw,

    /// List the channels defined by the scheduling engine.
    Channels(ChannelsArgs),

    /// List a channel's music schedules (overlay and normal profiles).
    Schedules(ChannelArgs),

    /// Show a channel's override schedule file.
    Overrides(ChannelArgs),

    /// List a channel's engine and playback-debug logs by date.
    Logs(LogsArgs),
}

#[derive(Parser)]
pub struct ChannelsArgs {
    /// Emit the channel list as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ChannelArgs {
    /// Sequential display index of the channel (1-based, document order).
    #[arg(short = 'c', long = "channel", value_name = "INDEX")]
    pub channel: u32,

    /// Emit the view as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct LogsArgs {
    /// Sequential display index of the channel (1-based, document order).
    #[arg(short = 'c', long = "channel", value_name = "INDEX")]
    pub channel: u32,

    /// Oldest dates first (default is most recent first).
    #[arg(long = "ascending")]
    pub ascending: bool,

    /// Emit the view as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
