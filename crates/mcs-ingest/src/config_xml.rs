//! Configuration document parsing.
//!
//! The export document groups sub-applications ("cores") by an `AppName`
//! attribute. Only two cores are consumed: the service-URL provider and the
//! scheduling engine that owns the channel list. When the same `AppName`
//! appears more than once, the first occurrence in document order wins.

use std::fmt::Write as _;
use std::path::Path;

use mcs_model::{Channel, ConfigurationDocument, MusicSchedule, SERVICE_URL_UNSET};

use crate::error::{IngestError, Result};
use crate::xml::{attr, child_named, is_element_named};

/// `AppName` of the core carrying the streaming-service URL.
pub const SERVICE_APP: &str = "ContentService";

/// `AppName` of the scheduling-engine core.
pub const SCHEDULER_APP: &str = "Sequencer";

/// Reads the configuration document text.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| IngestError::io(path, source))
}

/// Parses the configuration document, all-or-nothing.
///
/// # Errors
///
/// Returns [`IngestError::MalformedDocument`] when the text is not
/// well-formed XML; a partial document is never returned.
pub fn parse_config(xml_text: &str) -> Result<ConfigurationDocument> {
    let document = roxmltree::Document::parse(xml_text)
        .map_err(|source| IngestError::MalformedDocument { source })?;
    let service_url =
        service_url(&document).unwrap_or_else(|| SERVICE_URL_UNSET.to_string());
    let channels = parse_channels(&document);
    Ok(ConfigurationDocument {
        service_url,
        channels,
    })
}

fn core_by_app<'a, 'input>(
    document: &'a roxmltree::Document<'input>,
    app_name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    document
        .descendants()
        .filter(|node| is_element_named(*node, "Core"))
        .find(|node| node.attribute("AppName") == Some(app_name))
}

/// Fixed-depth optional chain: core → program → settings → misc → `Url`.
/// Any absent step short-circuits to `None`.
fn service_url(document: &roxmltree::Document<'_>) -> Option<String> {
    let core = core_by_app(document, SERVICE_APP)?;
    let program = child_named(core, "Program")?;
    let settings = child_named(program, "Settings")?;
    let misc = child_named(settings, "Misc")?;
    misc.attribute("Url").map(str::to_string)
}

fn parse_channels(document: &roxmltree::Document<'_>) -> Vec<Channel> {
    let Some(core) = core_by_app(document, SCHEDULER_APP) else {
        return Vec::new();
    };
    let Some(channels) =
        child_named(core, "Program").and_then(|program| child_named(program, "Channels"))
    else {
        return Vec::new();
    };
    channels
        .children()
        .filter(|node| is_element_named(*node, "Channel"))
        .enumerate()
        .map(|(position, node)| channel_from_node(node, position as u32 + 1))
        .collect()
}

fn channel_from_node(node: roxmltree::Node<'_, '_>, index: u32) -> Channel {
    let name = attr(node, "Name");
    let entity_id = node.attribute("Id").and_then(|value| value.parse().ok());
    let settings = child_named(node, "Settings");
    // The export writes the misc tag with either spelling depending on the
    // platform version; both are tried literally.
    let tracking_period = settings
        .and_then(|s| child_named(s, "Misc").or_else(|| child_named(s, "misc")))
        .and_then(|misc| misc.attribute("TrackingPeriod"))
        .map(str::to_string);
    let management_enabled = settings
        .and_then(|s| child_named(s, "ManagementApp"))
        .and_then(|app| app.attribute("Enabled"))
        .is_some_and(|value| value.to_uppercase() == "YES");
    let music = child_named(node, "Schedules")
        .and_then(|schedules| child_named(schedules, "Music"))
        .map(|music| MusicSchedule {
            day: attr(music, "Day"),
            zone: attr(music, "Zone"),
            property: attr(music, "Property"),
        });
    Channel {
        short_name: short_name(&name),
        name,
        entity_id,
        index,
        tracking_period,
        management_enabled,
        music,
    }
}

/// Derives the display name from a raw channel name.
///
/// Raw names embed the channel number mid-string
/// (`"Site Label SYS1 1 Main"`); the first purely numeric token is that
/// marker, and the short name is everything strictly after it. Names
/// without a numeric token are returned whole.
pub fn short_name(raw: &str) -> String {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let marker = tokens
        .iter()
        .position(|token| token.bytes().all(|b| b.is_ascii_digit()));
    match marker {
        Some(position) => tokens[position + 1..].join(" "),
        None => raw.to_string(),
    }
}

/// The "readable" rendering of a parsed document, shown next to the raw
/// text view.
pub fn readable_outline(document: &ConfigurationDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Service URL: {}", document.service_url);
    let _ = writeln!(out, "Channels: {}", document.channels.len());
    for channel in &document.channels {
        let id = channel
            .entity_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let tracking = channel.tracking_period.as_deref().unwrap_or("-");
        let management = if channel.management_enabled { "on" } else { "off" };
        let _ = writeln!(
            out,
            "  {}. {}  (id {id}, tracking {tracking}, management {management})",
            channel.index, channel.short_name
        );
        if let Some(music) = &channel.music {
            let _ = writeln!(
                out,
                "     music: {} / {} / {}",
                music.day, music.zone, music.property
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_splits_after_the_first_numeric_token() {
        assert_eq!(short_name("BKK Office BMax B4 Mini SYS1 1 Main"), "Main");
        assert_eq!(short_name("Site 1 2 3 Safe Entity"), "2 3 Safe Entity");
    }

    #[test]
    fn short_name_without_numeric_token_is_the_full_name() {
        assert_eq!(short_name("Lobby Overflow"), "Lobby Overflow");
    }

    #[test]
    fn short_name_with_trailing_numeric_token_is_empty() {
        assert_eq!(short_name("Site Label 4"), "");
    }
}
