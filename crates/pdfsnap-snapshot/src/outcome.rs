//! Comparison outcome.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Why a comparison did not pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureType {
    /// The external diff tool is not installed or not on `PATH`.
    DiffToolNotFound,
    /// The candidate document does not exist.
    SourceDocumentNotPresent,
    /// No reference snapshot exists and adding one was not requested.
    SnapshotNotPresent,
    /// The candidate differs from the reference snapshot.
    MismatchSnapshot,
}

impl FailureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureType::DiffToolNotFound => "DiffToolNotFound",
            FailureType::SourceDocumentNotPresent => "SourceDocumentNotPresent",
            FailureType::SnapshotNotPresent => "SnapshotNotPresent",
            FailureType::MismatchSnapshot => "MismatchSnapshot",
        }
    }

    /// Human-readable explanation suitable for an assertion message.
    pub fn description(&self) -> &'static str {
        match self {
            FailureType::DiffToolNotFound => {
                "diff-pdf could not be found; install it and make sure it is on PATH"
            }
            FailureType::SourceDocumentNotPresent => "the document to compare does not exist",
            FailureType::SnapshotNotPresent => {
                "no snapshot exists for this document; run with snapshot updates enabled to write one"
            }
            FailureType::MismatchSnapshot => "the document does not match the stored snapshot",
        }
    }
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Result of one snapshot comparison.
///
/// Built only through the constructors below, which keep `pass` and
/// `failure_type` exclusive and never set both `added` and `updated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pass: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_type: Option<FailureType>,
    added: bool,
    updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    diff_output_path: Option<PathBuf>,
}

impl ComparisonResult {
    /// Candidate matched the existing snapshot.
    pub fn matched() -> Self {
        Self {
            pass: true,
            failure_type: None,
            added: false,
            updated: false,
            diff_output_path: None,
        }
    }

    /// Candidate was stored as a new snapshot.
    pub fn snapshot_added() -> Self {
        Self {
            added: true,
            ..Self::matched()
        }
    }

    /// Candidate replaced the existing snapshot.
    pub fn snapshot_updated() -> Self {
        Self {
            updated: true,
            ..Self::matched()
        }
    }

    /// Comparison failed for a reason with no diff artifact.
    pub fn failed(failure_type: FailureType) -> Self {
        Self {
            pass: false,
            failure_type: Some(failure_type),
            added: false,
            updated: false,
            diff_output_path: None,
        }
    }

    /// Candidate differs from the snapshot; a visual diff was written.
    pub fn mismatch(diff_output_path: impl Into<PathBuf>) -> Self {
        Self {
            diff_output_path: Some(diff_output_path.into()),
            ..Self::failed(FailureType::MismatchSnapshot)
        }
    }

    pub fn pass(&self) -> bool {
        self.pass
    }

    pub fn failure_type(&self) -> Option<FailureType> {
        self.failure_type
    }

    pub fn added(&self) -> bool {
        self.added
    }

    pub fn updated(&self) -> bool {
        self.updated
    }

    pub fn diff_output_path(&self) -> Option<&PathBuf> {
        self.diff_output_path.as_ref()
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.failure_type, &self.diff_output_path) {
            (None, _) if self.added => write!(f, "snapshot written"),
            (None, _) if self.updated => write!(f, "snapshot updated"),
            (None, _) => write!(f, "snapshot matched"),
            (Some(failure), Some(diff)) => {
                write!(f, "{}; see diff at {}", failure, diff.display())
            }
            (Some(failure), None) => write!(f, "{}", failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_and_failure_are_exclusive() {
        for result in [
            ComparisonResult::matched(),
            ComparisonResult::snapshot_added(),
            ComparisonResult::snapshot_updated(),
            ComparisonResult::failed(FailureType::SnapshotNotPresent),
            ComparisonResult::mismatch("s/__diff_output__/x-diff.pdf"),
        ] {
            assert_ne!(result.pass(), result.failure_type().is_some());
            assert!(!(result.added() && result.updated()));
        }
    }

    #[test]
    fn test_mismatch_carries_diff_path() {
        let result = ComparisonResult::mismatch("s/__diff_output__/x-diff.pdf");
        assert!(!result.pass());
        assert_eq!(result.failure_type(), Some(FailureType::MismatchSnapshot));
        assert_eq!(
            result.diff_output_path(),
            Some(&PathBuf::from("s/__diff_output__/x-diff.pdf"))
        );
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let json = serde_json::to_value(ComparisonResult::snapshot_added()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"pass": true, "added": true, "updated": false})
        );

        let json = serde_json::to_value(ComparisonResult::mismatch("d.pdf")).unwrap();
        assert_eq!(json["failure_type"], "MismatchSnapshot");
        assert_eq!(json["diff_output_path"], "d.pdf");
    }

    #[test]
    fn test_display() {
        assert_eq!(ComparisonResult::snapshot_updated().to_string(), "snapshot updated");
        let msg = ComparisonResult::mismatch("d.pdf").to_string();
        assert!(msg.contains("does not match"));
        assert!(msg.ends_with("d.pdf"));
    }

    #[test]
    fn test_failure_type_as_str() {
        assert_eq!(FailureType::DiffToolNotFound.as_str(), "DiffToolNotFound");
        assert_eq!(
            FailureType::SourceDocumentNotPresent.as_str(),
            "SourceDocumentNotPresent"
        );
    }
}
