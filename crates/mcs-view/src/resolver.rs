//! Per-channel view resolution.
//!
//! The resolver owns the current `(channel, view)` selection and assembles
//! the presentation model for it on demand. Selecting the same pair twice
//! in a row is a no-op: no filesystem scan runs and the previous rendering
//! stands. The filesystem sits behind [`ChannelStore`] so tests can count
//! scans.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use mcs_ingest::{PlatformPaths, ProfilesUnavailable};
use mcs_model::{
    LogDay, ParsedProfile, ProfileEntry, ProfileIndex, ProfileKind, RecordOutcome,
    ScheduleRecord, SortOrder, ViewKind,
};

/// Filesystem operations the resolver needs, one method per scan kind.
pub trait ChannelStore {
    fn profiles(&self, channel_index: u32) -> Result<ProfileIndex, ProfilesUnavailable>;
    fn parse_profile(&self, path: &Path, kind: ProfileKind) -> ParsedProfile;
    fn override_path(&self, channel_index: u32) -> PathBuf;
    fn read_override(&self, path: &Path) -> Option<String>;
    fn logs(&self, channel_index: u32) -> BTreeMap<String, LogDay>;
}

impl<S: ChannelStore> ChannelStore for &S {
    fn profiles(&self, channel_index: u32) -> Result<ProfileIndex, ProfilesUnavailable> {
        (**self).profiles(channel_index)
    }

    fn parse_profile(&self, path: &Path, kind: ProfileKind) -> ParsedProfile {
        (**self).parse_profile(path, kind)
    }

    fn override_path(&self, channel_index: u32) -> PathBuf {
        (**self).override_path(channel_index)
    }

    fn read_override(&self, path: &Path) -> Option<String> {
        (**self).read_override(path)
    }

    fn logs(&self, channel_index: u32) -> BTreeMap<String, LogDay> {
        (**self).logs(channel_index)
    }
}

/// Production store backed by the ingest layer.
pub struct DiskStore {
    paths: PlatformPaths,
}

impl DiskStore {
    pub fn new(paths: PlatformPaths) -> Self {
        Self { paths }
    }
}

impl ChannelStore for DiskStore {
    fn profiles(&self, channel_index: u32) -> Result<ProfileIndex, ProfilesUnavailable> {
        mcs_ingest::index_profiles(&self.paths.music_root, channel_index)
    }

    fn parse_profile(&self, path: &Path, kind: ProfileKind) -> ParsedProfile {
        mcs_ingest::parse_profile(path, kind)
    }

    fn override_path(&self, channel_index: u32) -> PathBuf {
        self.paths.override_path(channel_index)
    }

    fn read_override(&self, path: &Path) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(error) => {
                debug!(path = %path.display(), %error, "override schedule not readable");
                None
            }
        }
    }

    fn logs(&self, channel_index: u32) -> BTreeMap<String, LogDay> {
        mcs_ingest::index_logs(&self.paths.log_dir, channel_index)
    }
}

/// One profile file with its parsed schedule record.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleListing {
    pub entry: ProfileEntry,
    pub record: ScheduleRecord,
    pub outcome: RecordOutcome,
}

/// Music-schedules view: either one of the distinct unavailable states or
/// the partitioned listings.
#[derive(Debug, Clone, Serialize)]
pub enum MusicView {
    Unavailable(ProfilesUnavailable),
    Loaded(MusicSchedules),
}

#[derive(Debug, Clone, Serialize)]
pub struct MusicSchedules {
    /// Dated folder the profiles were indexed from.
    pub snapshot: String,
    /// Overlay-kind listings, filename order.
    pub overlays: Vec<ScheduleListing>,
    /// Plain-profile listings, filename order.
    pub profiles: Vec<ScheduleListing>,
}

impl MusicSchedules {
    pub fn total(&self) -> usize {
        self.overlays.len() + self.profiles.len()
    }
}

/// Override-schedule view over a single fixed per-channel file.
#[derive(Debug, Clone, Serialize)]
pub enum OverrideView {
    Found { path: PathBuf, text: String },
    Missing { path: PathBuf },
}

#[derive(Debug, Clone, Serialize)]
pub struct LogDayRow {
    pub date: String,
    pub engine: Option<PathBuf>,
    pub playback: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogsView {
    pub order: SortOrder,
    pub days: Vec<LogDayRow>,
}

#[derive(Debug, Clone, Serialize)]
pub enum ChannelView {
    Music(MusicView),
    Overrides(OverrideView),
    Logs(LogsView),
}

/// Result of a selection: either a fresh view or "nothing to do".
#[derive(Debug, Clone, Serialize)]
pub enum Selection {
    Unchanged,
    View(ChannelView),
}

pub struct ViewResolver<S> {
    store: S,
    last: Option<(u32, ViewKind)>,
    log_order: SortOrder,
    override_path: Option<PathBuf>,
}

impl<S: ChannelStore> ViewResolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            last: None,
            log_order: SortOrder::default(),
            override_path: None,
        }
    }

    /// Resolves the view for a `(channel, view)` selection.
    ///
    /// Re-selecting the current pair returns [`Selection::Unchanged`]
    /// without touching the filesystem.
    pub fn select(&mut self, channel_index: u32, kind: ViewKind) -> Selection {
        if self.last == Some((channel_index, kind)) {
            return Selection::Unchanged;
        }
        let view = match kind {
            ViewKind::MusicSchedules => ChannelView::Music(self.music(channel_index)),
            ViewKind::OverridingSchedules => {
                ChannelView::Overrides(self.overrides(channel_index))
            }
            ViewKind::Logs => ChannelView::Logs(self.logs(channel_index)),
        };
        self.last = Some((channel_index, kind));
        Selection::View(view)
    }

    fn music(&self, channel_index: u32) -> MusicView {
        let index = match self.store.profiles(channel_index) {
            Ok(index) => index,
            Err(state) => return MusicView::Unavailable(state),
        };
        let mut overlays = Vec::new();
        let mut profiles = Vec::new();
        for entry in index.groups.values().flatten() {
            let parsed = self.store.parse_profile(&entry.path, entry.kind);
            let listing = ScheduleListing {
                entry: entry.clone(),
                record: parsed.record,
                outcome: parsed.outcome,
            };
            match entry.kind {
                ProfileKind::Overlay => overlays.push(listing),
                ProfileKind::Profile => profiles.push(listing),
            }
        }
        overlays.sort_by_key(|listing| listing.entry.name.to_lowercase());
        profiles.sort_by_key(|listing| listing.entry.name.to_lowercase());
        MusicView::Loaded(MusicSchedules {
            snapshot: index.snapshot,
            overlays,
            profiles,
        })
    }

    fn overrides(&mut self, channel_index: u32) -> OverrideView {
        let path = self.store.override_path(channel_index);
        self.override_path = Some(path.clone());
        read_override_view(&self.store, path)
    }

    /// Re-reads the last resolved override path. Does not re-run path
    /// discovery; returns `None` when no override view was resolved yet.
    pub fn reread_override(&self) -> Option<OverrideView> {
        let path = self.override_path.clone()?;
        Some(read_override_view(&self.store, path))
    }

    fn logs(&self, channel_index: u32) -> LogsView {
        build_logs_view(self.store.logs(channel_index), self.log_order)
    }

    pub fn log_order(&self) -> SortOrder {
        self.log_order
    }

    /// Sets the direction used by subsequent log views.
    pub fn set_log_order(&mut self, order: SortOrder) {
        self.log_order = order;
    }

    /// Flips the sort direction and re-resolves the current logs view.
    /// Returns `None` when the current selection is not a logs view.
    pub fn toggle_log_order(&mut self) -> Option<LogsView> {
        let (channel_index, kind) = self.last?;
        if kind != ViewKind::Logs {
            return None;
        }
        self.log_order = self.log_order.flipped();
        Some(self.logs(channel_index))
    }
}

fn read_override_view<S: ChannelStore>(store: &S, path: PathBuf) -> OverrideView {
    match store.read_override(&path) {
        Some(text) => OverrideView::Found { path, text },
        None => OverrideView::Missing { path },
    }
}

fn build_logs_view(days: BTreeMap<String, LogDay>, order: SortOrder) -> LogsView {
    let rows = days.into_iter().map(|(date, day)| LogDayRow {
        date,
        engine: day.engine,
        playback: day.playback,
    });
    let days = match order {
        SortOrder::Ascending => rows.collect(),
        SortOrder::Descending => {
            let mut rows: Vec<LogDayRow> = rows.collect();
            rows.reverse();
            rows
        }
    };
    LogsView { order, days }
}
