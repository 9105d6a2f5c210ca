//! Comparison request and the paths derived from it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default document extension.
pub const DEFAULT_EXTENSION: &str = "pdf";

/// Name of the directory holding visual diffs, relative to the snapshot directory.
pub const DIFF_OUTPUT_DIR: &str = "__diff_output__";

/// A single snapshot comparison to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// Candidate document produced by the code under test.
    pub document_path: PathBuf,

    /// Directory where reference snapshots live.
    pub snapshot_dir: PathBuf,

    /// Logical name of the reference snapshot.
    pub snapshot_identifier: String,

    /// Overwrite an existing snapshot with the candidate.
    #[serde(default)]
    pub update_snapshot: bool,

    /// Store the candidate as the snapshot when none exists yet.
    #[serde(default)]
    pub add_snapshot: bool,

    /// Document file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl ComparisonRequest {
    /// Create a request that neither adds nor updates snapshots.
    pub fn new(
        document_path: impl Into<PathBuf>,
        snapshot_dir: impl Into<PathBuf>,
        snapshot_identifier: impl Into<String>,
    ) -> Self {
        Self {
            document_path: document_path.into(),
            snapshot_dir: snapshot_dir.into(),
            snapshot_identifier: snapshot_identifier.into(),
            update_snapshot: false,
            add_snapshot: false,
            extension: default_extension(),
        }
    }

    pub fn with_update_snapshot(mut self, update: bool) -> Self {
        self.update_snapshot = update;
        self
    }

    pub fn with_add_snapshot(mut self, add: bool) -> Self {
        self.add_snapshot = add;
        self
    }

    /// Use a different document extension (`pdf` by default).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Location of the reference snapshot: `<snapshot_dir>/<identifier>.<ext>`.
    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot_dir
            .join(format!("{}.{}", self.snapshot_identifier, self.extension))
    }

    /// Directory receiving visual diffs: `<snapshot_dir>/__diff_output__`.
    pub fn diff_output_dir(&self) -> PathBuf {
        self.snapshot_dir.join(DIFF_OUTPUT_DIR)
    }

    /// Location of the visual diff: `<diff_output_dir>/<identifier>-diff.<ext>`.
    pub fn diff_output_path(&self) -> PathBuf {
        self.diff_output_dir()
            .join(format!("{}-diff.{}", self.snapshot_identifier, self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ComparisonRequest {
        ComparisonRequest::new("path/to/pdf", "snapshotDir", "snapshotIdentifier")
    }

    #[test]
    fn test_snapshot_path() {
        assert_eq!(
            request().snapshot_path(),
            PathBuf::from("snapshotDir/snapshotIdentifier.pdf")
        );
    }

    #[test]
    fn test_diff_output_paths() {
        let req = request();
        assert_eq!(
            req.diff_output_dir(),
            PathBuf::from("snapshotDir/__diff_output__")
        );
        assert_eq!(
            req.diff_output_path(),
            PathBuf::from("snapshotDir/__diff_output__/snapshotIdentifier-diff.pdf")
        );
    }

    #[test]
    fn test_custom_extension() {
        let req = ComparisonRequest::new("a.doc", "s", "x").with_extension("doc");
        assert_eq!(req.snapshot_path(), PathBuf::from("s/x.doc"));
        assert_eq!(
            req.diff_output_path(),
            PathBuf::from("s/__diff_output__/x-diff.doc")
        );
    }

    #[test]
    fn test_flags_default_to_false() {
        let req = request();
        assert!(!req.update_snapshot);
        assert!(!req.add_snapshot);
        assert_eq!(req.extension, "pdf");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let req: ComparisonRequest = serde_json::from_str(
            r#"{"document_path": "a.pdf", "snapshot_dir": "s", "snapshot_identifier": "x"}"#,
        )
        .unwrap();
        assert_eq!(req, ComparisonRequest::new("a.pdf", "s", "x"));
    }
}
