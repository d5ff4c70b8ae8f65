//! Per-channel profile tree indexing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use mcs_model::{ProfileEntry, ProfileIndex, ProfileKind};

use crate::paths::{
    NORMAL_PROFILES_GROUP, OVERLAY_EXTENSION, PROFILE_EXTENSION, PROFILES_DIR,
    channel_folder_name,
};
use crate::snapshot::latest_snapshot;

/// Why a channel's profile index could not be produced.
///
/// Each case is an ordinary renderable state carrying the attempted path;
/// the presentation layer shows them distinctly rather than as failures.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ProfilesUnavailable {
    #[error("music root not found: {path}")]
    MissingRoot { path: PathBuf },

    #[error("no folder for this channel: {path}")]
    MissingChannelDir { path: PathBuf },

    #[error("no dated snapshot folder under {path}")]
    NoDatedFolder { path: PathBuf },

    #[error("no profiles folder: {path}")]
    MissingProfilesDir { path: PathBuf },
}

/// Indexes the profile files of one channel.
///
/// Resolves `music_root/Channel{index}`, picks the most recent dated
/// subfolder (independently of the configuration snapshot), and walks its
/// `Profiles` tree. Files directly under `Profiles` are grouped under
/// [`NORMAL_PROFILES_GROUP`]; nested files under their owning subfolder
/// name. Entries are sorted per group by filename, case-insensitive.
pub fn index_profiles(
    music_root: &Path,
    channel_index: u32,
) -> Result<ProfileIndex, ProfilesUnavailable> {
    if !music_root.is_dir() {
        return Err(ProfilesUnavailable::MissingRoot {
            path: music_root.to_path_buf(),
        });
    }
    let channel_dir = music_root.join(channel_folder_name(channel_index));
    if !channel_dir.is_dir() {
        return Err(ProfilesUnavailable::MissingChannelDir { path: channel_dir });
    }
    let Some(stamp) = latest_snapshot(&channel_dir) else {
        return Err(ProfilesUnavailable::NoDatedFolder { path: channel_dir });
    };
    let profiles_dir = channel_dir.join(&stamp.name).join(PROFILES_DIR);
    if !profiles_dir.is_dir() {
        return Err(ProfilesUnavailable::MissingProfilesDir { path: profiles_dir });
    }

    let mut groups: BTreeMap<String, Vec<ProfileEntry>> = BTreeMap::new();
    collect_profiles(&profiles_dir, NORMAL_PROFILES_GROUP, &mut groups);
    for entries in groups.values_mut() {
        entries.sort_by_key(|entry| entry.name.to_lowercase());
    }
    Ok(ProfileIndex {
        snapshot: stamp.name,
        groups,
    })
}

fn collect_profiles(
    dir: &Path,
    group: &str,
    groups: &mut BTreeMap<String, Vec<ProfileEntry>>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            // Unexpected OS error: the group stays empty, the view renders.
            warn!(path = %dir.display(), %error, "profile folder walk failed");
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let subfolder = path
                .file_name()
                .and_then(|value| value.to_str())
                .unwrap_or(group)
                .to_string();
            collect_profiles(&path, &subfolder, groups);
            continue;
        }
        let Some(kind) = profile_kind(&path) else {
            continue;
        };
        let name = path
            .file_name()
            .and_then(|value| value.to_str())
            .unwrap_or("")
            .to_string();
        let (size, modified) = file_facts(&path);
        groups.entry(group.to_string()).or_default().push(ProfileEntry {
            name,
            path,
            group: group.to_string(),
            kind,
            size,
            modified,
        });
    }
}

fn profile_kind(path: &Path) -> Option<ProfileKind> {
    let extension = path.extension().and_then(|value| value.to_str())?;
    if extension.eq_ignore_ascii_case(OVERLAY_EXTENSION) {
        Some(ProfileKind::Overlay)
    } else if extension.eq_ignore_ascii_case(PROFILE_EXTENSION) {
        Some(ProfileKind::Profile)
    } else {
        None
    }
}

fn file_facts(path: &Path) -> (String, String) {
    match fs::metadata(path) {
        Ok(metadata) => {
            let modified = metadata
                .modified()
                .map(format_modified)
                .unwrap_or_else(|_| "-".to_string());
            (human_size(metadata.len()), modified)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "file metadata unavailable");
            ("-".to_string(), "-".to_string())
        }
    }
}

fn format_modified(time: std::time::SystemTime) -> String {
    DateTime::<Local>::from(time).format("%Y-%m-%d %H:%M").to_string()
}

/// KB below the 1024 KB threshold, MB with one decimal above it.
pub fn human_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{kb:.0} KB")
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_size_switches_to_mb_at_the_threshold() {
        assert_eq!(human_size(0), "0 KB");
        assert_eq!(human_size(1024), "1 KB");
        assert_eq!(human_size(500 * 1024), "500 KB");
        assert_eq!(human_size(1024 * 1024), "1.0 MB");
        assert_eq!(human_size(1536 * 1024), "1.5 MB");
    }

    #[test]
    fn profile_kind_matches_extensions_case_insensitively() {
        assert_eq!(
            profile_kind(Path::new("a/Morning.ovl")),
            Some(ProfileKind::Overlay)
        );
        assert_eq!(
            profile_kind(Path::new("a/Morning.PRF")),
            Some(ProfileKind::Profile)
        );
        assert_eq!(profile_kind(Path::new("a/Morning.txt")), None);
        assert_eq!(profile_kind(Path::new("a/Morning")), None);
    }
}
