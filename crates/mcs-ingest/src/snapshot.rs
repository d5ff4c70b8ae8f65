//! Dated snapshot folder discovery.
//!
//! The platform exports configuration into folders named `YYYY-MM-DD-HHMM`.
//! Discovery is re-run from scratch on every load; nothing is cached.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

/// A snapshot folder name decoded into a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStamp {
    /// The folder name exactly as found on disk.
    pub name: String,
    pub timestamp: NaiveDateTime,
}

impl SnapshotStamp {
    /// Decodes a `YYYY-MM-DD-HHMM` folder name.
    ///
    /// Names with the right shape but an invalid calendar value (month 13,
    /// day 32, hour 25) are rejected the same as malformed ones.
    pub fn parse(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 15 {
            return None;
        }
        for (position, byte) in bytes.iter().enumerate() {
            let valid = match position {
                4 | 7 | 10 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            };
            if !valid {
                return None;
            }
        }
        let year: i32 = name[0..4].parse().ok()?;
        let month: u32 = name[5..7].parse().ok()?;
        let day: u32 = name[8..10].parse().ok()?;
        let hour: u32 = name[11..13].parse().ok()?;
        let minute: u32 = name[13..15].parse().ok()?;
        let timestamp = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
        Some(Self {
            name: name.to_string(),
            timestamp,
        })
    }

    /// Header rendering, e.g. `07 Aug 2026 at 09:30 AM`.
    pub fn display(&self) -> String {
        self.timestamp.format("%d %b %Y at %I:%M %p").to_string()
    }
}

/// A target file resolved inside the most recent snapshot folder.
#[derive(Debug, Clone)]
pub struct LocatedSnapshot {
    pub stamp: SnapshotStamp,
    pub path: PathBuf,
}

/// Finds the most recent validly named snapshot folder under `base_dir`.
///
/// Returns `None` when the directory is missing, unreadable, or holds no
/// candidate — the ordinary "not configured yet" state, not an error.
/// Two folders can decode to the same minute when an export is re-run;
/// the greater folder name wins the tie.
pub fn latest_snapshot(base_dir: &Path) -> Option<SnapshotStamp> {
    let entries = std::fs::read_dir(base_dir).ok()?;
    let mut best: Option<SnapshotStamp> = None;
    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(stamp) = SnapshotStamp::parse(name) else {
            continue;
        };
        let replace = match &best {
            None => true,
            Some(current) => {
                (stamp.timestamp, stamp.name.as_str())
                    > (current.timestamp, current.name.as_str())
            }
        };
        if replace {
            best = Some(stamp);
        }
    }
    best
}

/// Resolves `target` inside the most recent snapshot folder.
///
/// The returned path is not checked for existence; callers distinguish
/// "no snapshot folder" from "snapshot found, target file missing".
pub fn locate(base_dir: &Path, target: &str) -> Option<LocatedSnapshot> {
    let stamp = latest_snapshot(base_dir)?;
    let path = base_dir.join(&stamp.name).join(target);
    Some(LocatedSnapshot { stamp, path })
}
