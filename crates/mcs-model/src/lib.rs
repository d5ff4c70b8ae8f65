pub mod config;
pub mod files;
pub mod schedule;
pub mod view;

pub use config::{Channel, ConfigurationDocument, MusicSchedule, SERVICE_URL_UNSET};
pub use files::{LogDay, ProfileEntry, ProfileIndex};
pub use schedule::{
    DateSignal, FrequencyRange, ParsedProfile, ProfileKind, RecordOutcome, ScheduleRecord,
};
pub use view::{SortOrder, ViewKind};
