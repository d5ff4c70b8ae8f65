//! Filesystem index entries: profile trees and per-day log pairs.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::schedule::ProfileKind;

/// One profile file found under a channel's `Profiles` tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    /// File name, without directory components.
    pub name: String,
    pub path: PathBuf,
    /// Owning subfolder label; root-level files use the fixed
    /// "Normal Profiles" group.
    pub group: String,
    pub kind: ProfileKind,
    /// Human-readable size (KB under 1024 KB, MB with one decimal above).
    pub size: String,
    /// Formatted modification timestamp.
    pub modified: String,
}

/// Index of a channel's profile files, grouped by owning subfolder.
///
/// Entries within each group are sorted by filename, case-insensitive
/// ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileIndex {
    /// Name of the dated snapshot folder the index was taken from.
    pub snapshot: String,
    pub groups: BTreeMap<String, Vec<ProfileEntry>>,
}

impl ProfileIndex {
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Engine/playback log availability for one 8-digit date.
///
/// The two log kinds share a date space; either slot may be absent
/// independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogDay {
    pub engine: Option<PathBuf>,
    pub playback: Option<PathBuf>,
}
