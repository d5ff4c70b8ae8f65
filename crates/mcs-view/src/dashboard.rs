//! Top-level dashboard load: snapshot location plus configuration parse,
//! collapsed into one renderable state machine.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::{debug, info};

use mcs_ingest::paths::CONFIG_DOCUMENT;
use mcs_ingest::{PlatformPaths, SnapshotStamp, locate, parse_config, read_document,
    readable_outline};
use mcs_model::ConfigurationDocument;

/// Everything a refresh can produce. Replaced wholesale on each load.
#[derive(Debug)]
pub enum DashboardLoad {
    /// No snapshot folder yet. Rendered as guidance, not as a failure.
    NotConfigured { base: PathBuf },
    /// A snapshot folder exists but the configuration document is absent
    /// (or unreadable). The attempted path is shown.
    MissingFile {
        snapshot: SnapshotStamp,
        path: PathBuf,
    },
    /// The document exists but is not well-formed; the raw text is still
    /// available for the fallback raw view.
    Malformed {
        snapshot: SnapshotStamp,
        path: PathBuf,
        error: String,
        raw: String,
    },
    Loaded {
        snapshot: SnapshotStamp,
        path: PathBuf,
        model: ConfigurationDocument,
        outline: String,
        raw: String,
    },
}

impl DashboardLoad {
    /// The parsed model, when the load got that far.
    pub fn model(&self) -> Option<&ConfigurationDocument> {
        match self {
            DashboardLoad::Loaded { model, .. } => Some(model),
            _ => None,
        }
    }

    /// Raw document text, available for both parsed and malformed loads.
    pub fn raw(&self) -> Option<&str> {
        match self {
            DashboardLoad::Malformed { raw, .. } | DashboardLoad::Loaded { raw, .. } => {
                Some(raw)
            }
            _ => None,
        }
    }
}

/// Locates the current snapshot and parses its configuration document.
pub fn load_dashboard(paths: &PlatformPaths) -> DashboardLoad {
    let Some(located) = locate(&paths.config_root, CONFIG_DOCUMENT) else {
        return DashboardLoad::NotConfigured {
            base: paths.config_root.clone(),
        };
    };
    let raw = match read_document(&located.path) {
        Ok(raw) => raw,
        Err(error) => {
            debug!(%error, "configuration document not readable");
            return DashboardLoad::MissingFile {
                snapshot: located.stamp,
                path: located.path,
            };
        }
    };
    match parse_config(&raw) {
        Ok(model) => {
            info!(
                snapshot = %located.stamp.name,
                channels = model.channels.len(),
                "configuration loaded"
            );
            let outline = readable_outline(&model);
            DashboardLoad::Loaded {
                snapshot: located.stamp,
                path: located.path,
                model,
                outline,
                raw,
            }
        }
        Err(error) => DashboardLoad::Malformed {
            snapshot: located.stamp,
            path: located.path,
            error: error.to_string(),
            raw,
        },
    }
}

/// Header clock line, e.g. `Friday, 07 August 2026  09:30:05`.
pub fn clock_line(now: DateTime<Local>) -> String {
    now.format("%A, %d %B %Y  %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clock_line_spells_out_the_date() {
        let now = Local.with_ymd_and_hms(2026, 8, 7, 9, 30, 5).unwrap();
        assert_eq!(clock_line(now), "Friday, 07 August 2026  09:30:05");
    }
}
