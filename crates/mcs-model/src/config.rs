//! Parsed configuration document: channels and service settings.

use serde::{Deserialize, Serialize};

/// Sentinel used when the service URL cannot be resolved from the document.
pub const SERVICE_URL_UNSET: &str = "not configured";

/// The typed result of parsing one configuration snapshot document.
///
/// Owned by whichever page triggered the load and replaced wholesale on
/// refresh; nothing in here is cached across loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationDocument {
    /// Streaming-service URL, or [`SERVICE_URL_UNSET`].
    pub service_url: String,
    /// Channels in document order.
    pub channels: Vec<Channel>,
}

impl ConfigurationDocument {
    /// Looks up a channel by its sequential display index (1-based).
    pub fn channel(&self, index: u32) -> Option<&Channel> {
        self.channels.iter().find(|c| c.index == index)
    }
}

/// A playout channel as defined by the scheduling-engine core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Raw `Name` attribute from the document.
    pub name: String,
    /// Display name derived from the raw name (everything after the
    /// channel-number token).
    pub short_name: String,
    /// Platform-assigned entity identifier. Never used for filesystem
    /// lookups; see `index`.
    pub entity_id: Option<u32>,
    /// 1-based position in document order. This, not `entity_id`, is the
    /// key that joins a channel to its on-disk folders.
    pub index: u32,
    /// Raw tracking-period setting, when present.
    pub tracking_period: Option<String>,
    /// Whether the management application is enabled for this channel.
    pub management_enabled: bool,
    /// Music-engine schedule sub-record, when present. Other engine types
    /// in the document are not consumed.
    pub music: Option<MusicSchedule>,
}

/// Day/zone/property triplet from the Music engine sub-tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicSchedule {
    pub day: String,
    pub zone: String,
    pub property: String,
}
