//! Tests for view resolution against a counting in-memory store.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mcs_ingest::ProfilesUnavailable;
use mcs_view::{
    ChannelStore, ChannelView, MusicView, OverrideView, Selection, ViewResolver,
};
use mcs_model::{
    LogDay, ParsedProfile, ProfileEntry, ProfileIndex, ProfileKind, RecordOutcome,
    ScheduleRecord, SortOrder, ViewKind,
};

/// Canned store that counts every scan so idempotency is observable.
#[derive(Default)]
struct CountingStore {
    profile_scans: Cell<usize>,
    parse_calls: Cell<usize>,
    override_resolves: Cell<usize>,
    override_reads: Cell<usize>,
    log_scans: Cell<usize>,
    profiles_unavailable: Option<ProfilesUnavailable>,
    override_text: Option<String>,
}

fn entry(name: &str, kind: ProfileKind, group: &str) -> ProfileEntry {
    ProfileEntry {
        name: name.to_string(),
        path: PathBuf::from("/profiles").join(name),
        group: group.to_string(),
        kind,
        size: "1 KB".to_string(),
        modified: "2026-01-05 09:00".to_string(),
    }
}

impl ChannelStore for CountingStore {
    fn profiles(&self, _channel_index: u32) -> Result<ProfileIndex, ProfilesUnavailable> {
        self.profile_scans.set(self.profile_scans.get() + 1);
        if let Some(state) = &self.profiles_unavailable {
            return Err(state.clone());
        }
        let mut groups = BTreeMap::new();
        groups.insert(
            "Normal Profiles".to_string(),
            vec![
                entry("Zulu.prf", ProfileKind::Profile, "Normal Profiles"),
                entry("alpha.ovl", ProfileKind::Overlay, "Normal Profiles"),
            ],
        );
        groups.insert(
            "Jingles".to_string(),
            vec![entry("Brand.ovl", ProfileKind::Overlay, "Jingles")],
        );
        Ok(ProfileIndex {
            snapshot: "2026-01-05-0900".to_string(),
            groups,
        })
    }

    fn parse_profile(&self, path: &Path, _kind: ProfileKind) -> ParsedProfile {
        self.parse_calls.set(self.parse_calls.get() + 1);
        ParsedProfile {
            record: ScheduleRecord {
                name: path.file_name().unwrap().to_str().unwrap().to_string(),
                ..ScheduleRecord::default()
            },
            outcome: RecordOutcome::Parsed,
        }
    }

    fn override_path(&self, channel_index: u32) -> PathBuf {
        self.override_resolves.set(self.override_resolves.get() + 1);
        PathBuf::from(format!("/overrides/Channel{channel_index}_Override.xml"))
    }

    fn read_override(&self, _path: &Path) -> Option<String> {
        self.override_reads.set(self.override_reads.get() + 1);
        self.override_text.clone()
    }

    fn logs(&self, _channel_index: u32) -> BTreeMap<String, LogDay> {
        self.log_scans.set(self.log_scans.get() + 1);
        let mut days = BTreeMap::new();
        days.insert(
            "20260201".to_string(),
            LogDay {
                engine: Some(PathBuf::from("/logs/Channel3_Engine_20260201.log")),
                playback: None,
            },
        );
        days.insert(
            "20260202".to_string(),
            LogDay {
                engine: None,
                playback: Some(PathBuf::from("/logs/Channel3_PlaybackDebug_20260202.log")),
            },
        );
        days
    }
}

#[test]
fn selecting_the_same_pair_twice_scans_once() {
    let store = CountingStore::default();
    let mut resolver = ViewResolver::new(&store);

    assert!(matches!(
        resolver.select(1, ViewKind::MusicSchedules),
        Selection::View(_)
    ));
    assert!(matches!(
        resolver.select(1, ViewKind::MusicSchedules),
        Selection::Unchanged
    ));
    assert_eq!(store.profile_scans.get(), 1);
    assert_eq!(store.parse_calls.get(), 3);
}

#[test]
fn changing_channel_or_view_rescans() {
    let store = CountingStore::default();
    let mut resolver = ViewResolver::new(&store);

    resolver.select(1, ViewKind::MusicSchedules);
    resolver.select(2, ViewKind::MusicSchedules);
    resolver.select(2, ViewKind::Logs);
    resolver.select(2, ViewKind::MusicSchedules);
    assert_eq!(store.profile_scans.get(), 3);
    assert_eq!(store.log_scans.get(), 1);
}

#[test]
fn music_view_partitions_and_sorts_by_filename() {
    let store = CountingStore::default();
    let mut resolver = ViewResolver::new(&store);

    let Selection::View(ChannelView::Music(MusicView::Loaded(music))) =
        resolver.select(1, ViewKind::MusicSchedules)
    else {
        panic!("expected a loaded music view");
    };

    assert_eq!(music.snapshot, "2026-01-05-0900");
    assert_eq!(music.total(), 3);
    let overlay_names: Vec<&str> = music
        .overlays
        .iter()
        .map(|listing| listing.entry.name.as_str())
        .collect();
    assert_eq!(overlay_names, ["alpha.ovl", "Brand.ovl"]);
    let profile_names: Vec<&str> = music
        .profiles
        .iter()
        .map(|listing| listing.entry.name.as_str())
        .collect();
    assert_eq!(profile_names, ["Zulu.prf"]);
    // Every indexed file went through the record parser.
    assert_eq!(store.parse_calls.get(), 3);
    assert_eq!(music.overlays[0].record.name, "alpha.ovl");
}

#[test]
fn music_view_preserves_the_unavailable_state() {
    let store = CountingStore {
        profiles_unavailable: Some(ProfilesUnavailable::NoDatedFolder {
            path: PathBuf::from("/music/Channel1"),
        }),
        ..CountingStore::default()
    };
    let mut resolver = ViewResolver::new(&store);

    let Selection::View(ChannelView::Music(MusicView::Unavailable(state))) =
        resolver.select(1, ViewKind::MusicSchedules)
    else {
        panic!("expected an unavailable music view");
    };
    assert_eq!(
        state,
        ProfilesUnavailable::NoDatedFolder {
            path: PathBuf::from("/music/Channel1"),
        }
    );
    assert_eq!(store.parse_calls.get(), 0);
}

#[test]
fn override_reread_skips_path_discovery() {
    let store = CountingStore {
        override_text: Some("<Override />".to_string()),
        ..CountingStore::default()
    };
    let mut resolver = ViewResolver::new(&store);

    // No override resolved yet.
    assert!(resolver.reread_override().is_none());

    let Selection::View(ChannelView::Overrides(OverrideView::Found { path, text })) =
        resolver.select(4, ViewKind::OverridingSchedules)
    else {
        panic!("expected a found override view");
    };
    assert_eq!(path, PathBuf::from("/overrides/Channel4_Override.xml"));
    assert_eq!(text, "<Override />");

    let reread = resolver.reread_override().expect("re-read");
    assert!(matches!(reread, OverrideView::Found { .. }));
    assert_eq!(store.override_resolves.get(), 1);
    assert_eq!(store.override_reads.get(), 2);
}

#[test]
fn missing_override_is_a_distinct_state() {
    let store = CountingStore::default();
    let mut resolver = ViewResolver::new(&store);

    let Selection::View(ChannelView::Overrides(OverrideView::Missing { path })) =
        resolver.select(4, ViewKind::OverridingSchedules)
    else {
        panic!("expected a missing override view");
    };
    assert_eq!(path, PathBuf::from("/overrides/Channel4_Override.xml"));
}

#[test]
fn logs_default_to_descending_and_toggle() {
    let store = CountingStore::default();
    let mut resolver = ViewResolver::new(&store);

    let Selection::View(ChannelView::Logs(logs)) = resolver.select(3, ViewKind::Logs) else {
        panic!("expected a logs view");
    };
    assert_eq!(logs.order, SortOrder::Descending);
    let dates: Vec<&str> = logs.days.iter().map(|day| day.date.as_str()).collect();
    assert_eq!(dates, ["20260202", "20260201"]);
    // Union over both kinds, one populated slot each.
    assert!(logs.days[0].engine.is_none() && logs.days[0].playback.is_some());
    assert!(logs.days[1].engine.is_some() && logs.days[1].playback.is_none());

    let toggled = resolver.toggle_log_order().expect("toggle");
    assert_eq!(toggled.order, SortOrder::Ascending);
    let dates: Vec<&str> = toggled.days.iter().map(|day| day.date.as_str()).collect();
    assert_eq!(dates, ["20260201", "20260202"]);
}

#[test]
fn toggle_outside_a_logs_view_is_refused() {
    let store = CountingStore::default();
    let mut resolver = ViewResolver::new(&store);
    resolver.select(1, ViewKind::MusicSchedules);
    assert!(resolver.toggle_log_order().is_none());
}
