//! Schedule record parsing and date/time display helpers.
//!
//! A profile file that cannot be read or parsed yields a default record
//! with a non-`Parsed` outcome; one bad file must never block the rest of
//! a listing.

use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::debug;

use mcs_model::{
    DateSignal, FrequencyRange, ParsedProfile, ProfileKind, RecordOutcome, ScheduleRecord,
};

use crate::xml::{attr, is_element_named};

/// Parses one profile file into a schedule record. Never fails visibly.
pub fn parse_profile(path: &Path, kind: ProfileKind) -> ParsedProfile {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            debug!(path = %path.display(), %error, "profile unreadable");
            return ParsedProfile {
                record: ScheduleRecord::default(),
                outcome: RecordOutcome::Unreadable,
            };
        }
    };
    parse_profile_text(&text, kind)
}

/// Parses profile XML text. Split out from [`parse_profile`] so the parse
/// rules are testable without touching the filesystem.
pub fn parse_profile_text(text: &str, kind: ProfileKind) -> ParsedProfile {
    let document = match roxmltree::Document::parse(text) {
        Ok(document) => document,
        Err(error) => {
            debug!(%error, "profile not well-formed");
            return ParsedProfile {
                record: ScheduleRecord::default(),
                outcome: RecordOutcome::Malformed,
            };
        }
    };
    let Some(info) = document
        .descendants()
        .find(|node| is_element_named(*node, "Info"))
    else {
        return ParsedProfile {
            record: ScheduleRecord::default(),
            outcome: RecordOutcome::MissingInfo,
        };
    };
    let mut record = ScheduleRecord {
        name: attr(info, "Name"),
        start_time: format_clock_time(&attr(info, "StartTime")),
        end_time: format_clock_time(&attr(info, "EndTime")),
        day_of_week: day_of_week_label(&attr(info, "DOW")),
        active_from: attr(info, "INDATE"),
        active_until: attr(info, "OUTDATE"),
        hidden: attr(info, "Hidden").to_uppercase() == "YES",
        frequency_ranges: Vec::new(),
    };
    if kind == ProfileKind::Overlay {
        record.frequency_ranges = frequency_ranges(&document);
    }
    ParsedProfile {
        record,
        outcome: RecordOutcome::Parsed,
    }
}

fn frequency_ranges(document: &roxmltree::Document<'_>) -> Vec<FrequencyRange> {
    let Some(ranges) = document
        .descendants()
        .find(|node| is_element_named(*node, "FrequencyRanges"))
    else {
        return Vec::new();
    };
    ranges
        .children()
        .filter(|node| is_element_named(*node, "Range"))
        .map(|node| FrequencyRange {
            frequency: node
                .attribute("Frequency")
                .and_then(|value| value.parse().ok())
                .unwrap_or(0),
            active_from: attr(node, "INDATE"),
            active_until: attr(node, "OUTDATE"),
            start_time: format_clock_time(&attr(node, "StartTime")),
            end_time: format_clock_time(&attr(node, "EndTime")),
        })
        .collect()
}

/// Reformats a 4-digit `HHMM` time to `HH:MM`; anything else passes
/// through unchanged.
pub fn format_clock_time(raw: &str) -> String {
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:{}", &raw[..2], &raw[2..])
    } else {
        raw.to_string()
    }
}

/// Maps the platform's 0–7 day codes to display labels. Unmapped codes
/// pass through raw.
pub fn day_of_week_label(code: &str) -> String {
    let label = match code {
        "0" => "Every day",
        "1" => "Sunday",
        "2" => "Monday",
        "3" => "Tuesday",
        "4" => "Wednesday",
        "5" => "Thursday",
        "6" => "Friday",
        "7" => "Saturday",
        other => return other.to_string(),
    };
    label.to_string()
}

/// Formats a 12-digit `YYYYMMDDHHmm` active date as `DD/MM/YYYY (HH:MM)`
/// with a past/future signal against the local clock.
///
/// Strings shorter than 8 characters, or with non-digit or non-calendar
/// components, are returned unmodified with the neutral signal.
pub fn format_in_out_date(raw: &str) -> (String, DateSignal) {
    format_in_out_date_at(raw, Local::now().naive_local())
}

/// [`format_in_out_date`] against an explicit "now". There is no timezone
/// normalization; the comparison is naive local time.
pub fn format_in_out_date_at(raw: &str, now: NaiveDateTime) -> (String, DateSignal) {
    if raw.len() < 8 {
        return (raw.to_string(), DateSignal::Neutral);
    }
    let Some(stamp) = parse_active_date(raw) else {
        return (raw.to_string(), DateSignal::Neutral);
    };
    let formatted = stamp.format("%d/%m/%Y (%H:%M)").to_string();
    let signal = if stamp < now {
        DateSignal::Past
    } else {
        DateSignal::Future
    };
    (formatted, signal)
}

fn parse_active_date(raw: &str) -> Option<NaiveDateTime> {
    let year = digits(raw, 0, 4)? as i32;
    let month = digits(raw, 4, 6)?;
    let day = digits(raw, 6, 8)?;
    let hour = if raw.len() >= 10 { digits(raw, 8, 10)? } else { 0 };
    let minute = if raw.len() >= 12 { digits(raw, 10, 12)? } else { 0 };
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

fn digits(raw: &str, start: usize, end: usize) -> Option<u32> {
    let slice = raw.get(start..end)?;
    if slice.bytes().all(|b| b.is_ascii_digit()) {
        slice.parse().ok()
    } else {
        None
    }
}
