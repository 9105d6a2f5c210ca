//! Configuration loading tests.
//!
//! These load `pdfsnap.json` from a temporary project directory.

use pdfsnap_snapshot::{SnapshotConfig, SnapshotError, UpdateMode};
use pdfsnap_test_utils::{assert_ok, TestProject};
use std::path::PathBuf;

/// Values from the project file are applied over the defaults.
#[tokio::test]
async fn test_load_project_config() {
    let project = TestProject::new()
        .with_config(r#"{"update": "all", "diff_pdf": {"dpi": 150, "mark_differences": true}}"#)
        .build();

    let config = assert_ok!(SnapshotConfig::load(Some(project.path())).await);

    assert_eq!(config.update, UpdateMode::All);
    assert_eq!(config.diff_pdf.dpi, Some(150));
    assert!(config.diff_pdf.mark_differences);
    assert_eq!(config.snapshot_dir, None);
}

/// A relative snapshot directory is taken relative to the project, not the working directory.
#[tokio::test]
async fn test_relative_snapshot_dir_resolves_against_project() {
    let project = TestProject::new()
        .with_config(r#"{"snapshot_dir": "snaps", "update": "new"}"#)
        .build();

    let config = assert_ok!(SnapshotConfig::load(Some(project.path())).await);

    assert_eq!(config.snapshot_dir, Some(project.join("snaps")));
}

/// An absolute snapshot directory is used as written.
#[tokio::test]
async fn test_absolute_snapshot_dir_is_kept() {
    let snapshots = TestProject::new().with_dir("snaps").build();
    let absolute = snapshots.join("snaps");
    let project = TestProject::new()
        .with_config(&format!(
            r#"{{"snapshot_dir": {}}}"#,
            serde_json::to_string(&absolute).unwrap()
        ))
        .build();

    let config = assert_ok!(SnapshotConfig::load(Some(project.path())).await);

    assert_eq!(config.snapshot_dir, Some(absolute));
}

/// Without a project file, defaults apply and no snapshot directory is set.
#[tokio::test]
async fn test_missing_project_config_uses_defaults() {
    let project = TestProject::new().build();

    let config = assert_ok!(SnapshotConfig::load(Some(project.path())).await);

    assert_eq!(config.snapshot_dir, None);
    assert_eq!(config.diff_pdf.binary, PathBuf::from("diff-pdf"));
}

/// A malformed project file is reported, not silently ignored.
#[tokio::test]
async fn test_invalid_project_config() {
    let project = TestProject::new().with_config("{ \"update\": ").build();

    let result = SnapshotConfig::load(Some(project.path())).await;

    assert!(matches!(result, Err(SnapshotError::Serialization(_))));
}
