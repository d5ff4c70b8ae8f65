//! Tests for profile record parsing.

use std::fs;

use tempfile::TempDir;

use mcs_ingest::{parse_profile, parse_profile_text};
use mcs_model::{ProfileKind, RecordOutcome, ScheduleRecord};

const OVERLAY_XML: &str = r#"<?xml version="1.0"?>
<Profile>
  <Info Name="Morning Drive" StartTime="0600" EndTime="1000" DOW="1"
        INDATE="202509110000" OUTDATE="212112310000" Hidden="NO" />
  <FrequencyRanges>
    <Range Frequency="2" INDATE="202509110000" OUTDATE="212112310000"
           StartTime="0700" EndTime="0900" />
    <Range Frequency="0" INDATE="" OUTDATE="" StartTime="late" EndTime="" />
  </FrequencyRanges>
</Profile>
"#;

#[test]
fn parses_an_overlay_profile() {
    let parsed = parse_profile_text(OVERLAY_XML, ProfileKind::Overlay);
    assert_eq!(parsed.outcome, RecordOutcome::Parsed);

    let record = parsed.record;
    assert_eq!(record.name, "Morning Drive");
    assert_eq!(record.start_time, "06:00");
    assert_eq!(record.end_time, "10:00");
    assert_eq!(record.day_of_week, "Sunday");
    assert_eq!(record.active_from, "202509110000");
    assert_eq!(record.active_until, "212112310000");
    assert!(!record.hidden);

    assert_eq!(record.frequency_ranges.len(), 2);
    let range = &record.frequency_ranges[0];
    assert_eq!(range.frequency, 2);
    assert_eq!(range.frequency_display(), "1 in every 3 tracks");
    assert_eq!(range.start_time, "07:00");
    assert_eq!(range.end_time, "09:00");
    // Unparseable frequency and non-4-digit times fall back gracefully.
    let odd = &record.frequency_ranges[1];
    assert_eq!(odd.frequency, 0);
    assert_eq!(odd.start_time, "late");
}

#[test]
fn plain_profiles_never_carry_frequency_ranges() {
    let parsed = parse_profile_text(OVERLAY_XML, ProfileKind::Profile);
    assert_eq!(parsed.outcome, RecordOutcome::Parsed);
    assert!(parsed.record.frequency_ranges.is_empty());
}

#[test]
fn hidden_flag_defaults_to_visible() {
    let xml = r#"<Profile><Info Name="x" /></Profile>"#;
    let parsed = parse_profile_text(xml, ProfileKind::Profile);
    assert!(!parsed.record.hidden);

    let xml = r#"<Profile><Info Name="x" Hidden="yes" /></Profile>"#;
    let parsed = parse_profile_text(xml, ProfileKind::Profile);
    assert!(parsed.record.hidden);
}

#[test]
fn malformed_xml_yields_a_default_record() {
    let parsed = parse_profile_text("<Profile><Inf", ProfileKind::Overlay);
    assert_eq!(parsed.outcome, RecordOutcome::Malformed);
    assert_eq!(parsed.record, ScheduleRecord::default());
}

#[test]
fn missing_info_section_yields_a_default_record() {
    let parsed = parse_profile_text("<Profile><Other /></Profile>", ProfileKind::Profile);
    assert_eq!(parsed.outcome, RecordOutcome::MissingInfo);
    assert_eq!(parsed.record, ScheduleRecord::default());
}

#[test]
fn unreadable_file_yields_a_default_record() {
    let dir = TempDir::new().unwrap();
    let parsed = parse_profile(&dir.path().join("absent.prf"), ProfileKind::Profile);
    assert_eq!(parsed.outcome, RecordOutcome::Unreadable);
    assert_eq!(parsed.record, ScheduleRecord::default());
}

#[test]
fn reads_records_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Morning.ovl");
    fs::write(&path, OVERLAY_XML).unwrap();

    let parsed = parse_profile(&path, ProfileKind::Overlay);
    assert_eq!(parsed.outcome, RecordOutcome::Parsed);
    assert_eq!(parsed.record.name, "Morning Drive");
}
