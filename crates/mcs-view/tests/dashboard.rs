//! Tests for the top-level dashboard load against real directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use mcs_ingest::PlatformPaths;
use mcs_view::{DashboardLoad, load_dashboard};

const DOCUMENT: &str = r#"<MCServer>
  <Core AppName="ContentService">
    <Program><Settings><Misc Url="http://10.0.0.5:8080/api" /></Settings></Program>
  </Core>
  <Core AppName="Sequencer">
    <Program>
      <Channels>
        <Channel Name="Site SYS1 1 Main" Id="1047" />
      </Channels>
    </Program>
  </Core>
</MCServer>"#;

fn paths_for(config_root: &Path) -> PlatformPaths {
    PlatformPaths::new(config_root, config_root.join("music"), config_root.join("logs"))
}

#[test]
fn empty_base_dir_is_not_configured() {
    let dir = TempDir::new().unwrap();
    let load = load_dashboard(&paths_for(dir.path()));
    let DashboardLoad::NotConfigured { base } = load else {
        panic!("expected NotConfigured");
    };
    assert_eq!(base, dir.path());
    assert!(load_dashboard(&paths_for(&dir.path().join("gone")))
        .model()
        .is_none());
}

#[test]
fn snapshot_without_document_is_missing_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("2026-01-05-0900")).unwrap();

    let load = load_dashboard(&paths_for(dir.path()));
    let DashboardLoad::MissingFile { snapshot, path } = load else {
        panic!("expected MissingFile");
    };
    assert_eq!(snapshot.name, "2026-01-05-0900");
    assert!(path.ends_with("2026-01-05-0900/MCServerConfig.xml"));
}

#[test]
fn malformed_document_keeps_the_raw_text() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("2026-01-05-0900");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("MCServerConfig.xml"), "<MCServer><Core").unwrap();

    let load = load_dashboard(&paths_for(dir.path()));
    let DashboardLoad::Malformed { error, raw, .. } = load else {
        panic!("expected Malformed");
    };
    assert!(error.contains("malformed configuration document"));
    assert_eq!(raw, "<MCServer><Core");
}

#[test]
fn loads_the_most_recent_snapshot() {
    let dir = TempDir::new().unwrap();
    let stale = dir.path().join("2025-12-01-0800");
    fs::create_dir(&stale).unwrap();
    fs::write(stale.join("MCServerConfig.xml"), "<Old />").unwrap();
    let current = dir.path().join("2026-01-05-0900");
    fs::create_dir(&current).unwrap();
    fs::write(current.join("MCServerConfig.xml"), DOCUMENT).unwrap();

    let load = load_dashboard(&paths_for(dir.path()));
    let DashboardLoad::Loaded {
        snapshot,
        model,
        outline,
        raw,
        ..
    } = load
    else {
        panic!("expected Loaded");
    };
    assert_eq!(snapshot.name, "2026-01-05-0900");
    assert_eq!(snapshot.display(), "05 Jan 2026 at 09:00 AM");
    assert_eq!(model.service_url, "http://10.0.0.5:8080/api");
    assert_eq!(model.channels.len(), 1);
    assert_eq!(model.channels[0].short_name, "Main");
    assert!(outline.contains("1. Main"));
    assert_eq!(raw, DOCUMENT);
}
