//! View-selection enums shared between the core and the presentation layer.

use serde::{Deserialize, Serialize};

/// Which per-channel view the operator selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewKind {
    MusicSchedules,
    OverridingSchedules,
    Logs,
}

/// Sort direction over the combined log date set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    /// Most recent first.
    #[default]
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}
