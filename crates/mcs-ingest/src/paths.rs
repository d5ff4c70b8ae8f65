//! Platform directory conventions and path construction.
//!
//! Every path the dashboard touches is built here, so the snapshot naming
//! and channel-number keying conventions live in one place.

use std::path::PathBuf;

/// Environment variable overriding the configuration-export directory.
pub const CONFIG_DIR_ENV: &str = "MCS_CONFIG_DIR";

/// Environment variable overriding the per-channel music directory.
pub const MUSIC_DIR_ENV: &str = "MCS_MUSIC_DIR";

/// Environment variable overriding the flat log directory.
pub const LOG_DIR_ENV: &str = "MCS_LOG_DIR";

pub const DEFAULT_CONFIG_DIR: &str = r"C:\MusicConcierge\ConfigExport";
pub const DEFAULT_MUSIC_DIR: &str = r"C:\MusicConcierge\Music";
pub const DEFAULT_LOG_DIR: &str = r"C:\MusicConcierge\Logs";

/// Configuration document name inside a dated snapshot folder.
pub const CONFIG_DOCUMENT: &str = "MCServerConfig.xml";

/// Fixed profiles subfolder inside a channel's dated snapshot folder.
pub const PROFILES_DIR: &str = "Profiles";

/// Group label for profile files sitting directly in the profiles folder.
pub const NORMAL_PROFILES_GROUP: &str = "Normal Profiles";

/// Extension of overlay-kind profile files.
pub const OVERLAY_EXTENSION: &str = "ovl";

/// Extension of plain profile files.
pub const PROFILE_EXTENSION: &str = "prf";

/// Extension shared by both log kinds.
pub const LOG_SUFFIX: &str = ".log";

const OVERRIDES_DIR: &str = "Overrides";

/// Resolved platform directory roots.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    pub config_root: PathBuf,
    pub music_root: PathBuf,
    pub log_dir: PathBuf,
}

impl PlatformPaths {
    pub fn new(
        config_root: impl Into<PathBuf>,
        music_root: impl Into<PathBuf>,
        log_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config_root: config_root.into(),
            music_root: music_root.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Builds roots from the fixed defaults, each overridable by its
    /// environment variable.
    pub fn from_env() -> Self {
        Self {
            config_root: env_or(CONFIG_DIR_ENV, DEFAULT_CONFIG_DIR),
            music_root: env_or(MUSIC_DIR_ENV, DEFAULT_MUSIC_DIR),
            log_dir: env_or(LOG_DIR_ENV, DEFAULT_LOG_DIR),
        }
    }

    /// Per-channel music folder.
    ///
    /// Keyed by the 1-based display index assigned at parse time, not the
    /// platform entity id.
    pub fn channel_dir(&self, channel_index: u32) -> PathBuf {
        self.music_root.join(channel_folder_name(channel_index))
    }

    /// Fixed per-channel override-schedule file.
    pub fn override_path(&self, channel_index: u32) -> PathBuf {
        self.music_root
            .join(OVERRIDES_DIR)
            .join(format!("Channel{channel_index}_Override.xml"))
    }
}

fn env_or(var: &str, default: &str) -> PathBuf {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}

pub fn channel_folder_name(channel_index: u32) -> String {
    format!("Channel{channel_index}")
}

/// Filename prefix of a channel's engine logs (`Channel{N}_Engine_YYYYMMDD.log`).
pub fn engine_log_prefix(channel_index: u32) -> String {
    format!("Channel{channel_index}_Engine_")
}

/// Filename prefix of a channel's playback-debug logs
/// (`Channel{N}_PlaybackDebug_YYYYMMDD.log`).
pub fn playback_log_prefix(channel_index: u32) -> String {
    format!("Channel{channel_index}_PlaybackDebug_")
}
