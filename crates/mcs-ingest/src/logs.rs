//! Flat log-directory indexing.
//!
//! Engine and playback-debug logs share one directory and one date space;
//! the index pairs them per 8-digit date so the listing can show both
//! kinds side by side.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use mcs_model::LogDay;

use crate::paths::{LOG_SUFFIX, engine_log_prefix, playback_log_prefix};

/// Scans `log_dir` (no recursion) for a channel's log files.
///
/// Returns the union of dates seen under either filename pattern; a date
/// present under only one pattern leaves the other slot empty. A missing
/// or unreadable directory indexes as empty.
pub fn index_logs(log_dir: &Path, channel_index: u32) -> BTreeMap<String, LogDay> {
    let mut days: BTreeMap<String, LogDay> = BTreeMap::new();
    let entries = match fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(path = %log_dir.display(), %error, "log folder scan failed");
            return days;
        }
    };
    let engine_prefix = engine_log_prefix(channel_index);
    let playback_prefix = playback_log_prefix(channel_index);
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|value| value.to_str()) else {
            continue;
        };
        if let Some(date) = log_date(name, &engine_prefix) {
            days.entry(date).or_default().engine = Some(path.clone());
        } else if let Some(date) = log_date(name, &playback_prefix) {
            days.entry(date).or_default().playback = Some(path);
        }
    }
    days
}

fn log_date(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    let date = rest.strip_suffix(LOG_SUFFIX)?;
    if date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()) {
        Some(date.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_date_requires_an_eight_digit_date() {
        assert_eq!(
            log_date("Channel3_Engine_20260201.log", "Channel3_Engine_"),
            Some("20260201".to_string())
        );
        assert_eq!(log_date("Channel3_Engine_2026020.log", "Channel3_Engine_"), None);
        assert_eq!(
            log_date("Channel3_Engine_20260201.txt", "Channel3_Engine_"),
            None
        );
        assert_eq!(
            log_date("Channel13_Engine_20260201.log", "Channel3_Engine_"),
            None
        );
    }
}
