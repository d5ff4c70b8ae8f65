//! Schedule records parsed from per-channel profile files.

use serde::{Deserialize, Serialize};

/// The two recognized profile file kinds, detected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKind {
    /// Overlay profiles additionally carry frequency-range insertion rules.
    Overlay,
    /// Plain scheduling profiles.
    Profile,
}

/// One parsed schedule record.
///
/// Every field defaults to empty/visible: a profile file that cannot be read
/// or parsed still yields a record (see [`RecordOutcome`]), so one bad file
/// never blocks the rest of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub name: String,
    /// Start time, reformatted to `HH:MM` when the source was 4 digits.
    pub start_time: String,
    /// End time, reformatted to `HH:MM` when the source was 4 digits.
    pub end_time: String,
    /// Day-of-week display label; unmapped codes pass through raw.
    pub day_of_week: String,
    /// Raw 12-digit `YYYYMMDDHHmm` active-from date.
    pub active_from: String,
    /// Raw 12-digit `YYYYMMDDHHmm` active-until date.
    pub active_until: String,
    pub hidden: bool,
    /// Populated for overlay-kind profiles only.
    pub frequency_ranges: Vec<FrequencyRange>,
}

/// Frequency-range sub-record of an overlay profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRange {
    /// Repeat frequency N, meaning one play in every N+1 tracks.
    pub frequency: u32,
    pub active_from: String,
    pub active_until: String,
    pub start_time: String,
    pub end_time: String,
}

impl FrequencyRange {
    /// Human rendering of the repeat frequency.
    pub fn frequency_display(&self) -> String {
        format!("1 in every {} tracks", self.frequency + 1)
    }
}

/// What happened when a single profile file was parsed.
///
/// Parse failures are never surfaced as errors (a default record is returned
/// instead), but the outcome is kept so diagnostics can count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordOutcome {
    Parsed,
    /// The file read failed.
    Unreadable,
    /// The file was read but is not well-formed XML.
    Malformed,
    /// Well-formed XML with no info section.
    MissingInfo,
}

impl RecordOutcome {
    pub fn is_parsed(self) -> bool {
        matches!(self, RecordOutcome::Parsed)
    }
}

/// A schedule record together with its parse outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedProfile {
    pub record: ScheduleRecord,
    pub outcome: RecordOutcome,
}

/// Past/future color signal for a rendered active date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSignal {
    Past,
    Future,
    Neutral,
}

impl DateSignal {
    /// Hex color used by the presentation layer for this signal.
    pub fn color(self) -> &'static str {
        match self {
            DateSignal::Past => "#E57373",
            DateSignal::Future => "#81C784",
            DateSignal::Neutral => "#808080",
        }
    }
}
