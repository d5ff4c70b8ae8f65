//! Filesystem and XML ingestion for the support dashboard.
//!
//! Everything here is synchronous and re-scans on every call; each load
//! replaces the previous in-memory model wholesale.

pub mod config_xml;
pub mod error;
pub mod logs;
pub mod paths;
pub mod profiles;
pub mod schedule;
pub mod snapshot;
mod xml;

pub use config_xml::{
    SCHEDULER_APP, SERVICE_APP, parse_config, read_document, readable_outline, short_name,
};
pub use error::{IngestError, Result};
pub use logs::index_logs;
pub use paths::PlatformPaths;
pub use profiles::{ProfilesUnavailable, human_size, index_profiles};
pub use schedule::{
    day_of_week_label, format_clock_time, format_in_out_date, format_in_out_date_at,
    parse_profile, parse_profile_text,
};
pub use snapshot::{LocatedSnapshot, SnapshotStamp, latest_snapshot, locate};
