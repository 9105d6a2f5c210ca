//! Mock implementations for testing.
//!
//! Provides a [`DiffCapability`] test double so comparisons can be exercised
//! without `diff-pdf` installed.

use async_trait::async_trait;
use pdfsnap_snapshot::{DiffCapability, SnapshotError, SnapshotResult};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Bytes written to the diff output by [`MockDiffTool`].
pub const MOCK_DIFF_CONTENT: &[u8] = b"%PDF-1.7\n% mock diff\n%%EOF\n";

/// A recorded capability invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffCall {
    /// Availability probe.
    Probe,
    /// Equivalence check.
    IsEquivalent { candidate: PathBuf, snapshot: PathBuf },
    /// Diff generation.
    GenerateDiff {
        candidate: PathBuf,
        snapshot: PathBuf,
        output: PathBuf,
    },
}

/// A mock diff tool with configurable answers.
///
/// Records every call and, unless told otherwise, writes a small file at the
/// diff output path so tests can check the artifact exists.
///
/// # Example
///
/// ```rust
/// use pdfsnap_test_utils::mocks::MockDiffTool;
///
/// let tool = MockDiffTool::new().with_equivalent(false);
/// assert!(tool.calls().is_empty());
/// ```
#[derive(Clone)]
pub struct MockDiffTool {
    available: bool,
    equivalent: bool,
    diff_error: Option<String>,
    calls: Arc<Mutex<Vec<DiffCall>>>,
}

impl MockDiffTool {
    /// Create an available tool that reports documents as equivalent.
    pub fn new() -> Self {
        Self {
            available: true,
            equivalent: true,
            diff_error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Simulate a tool that is not installed.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Set the answer to equivalence checks.
    pub fn with_equivalent(mut self, equivalent: bool) -> Self {
        self.equivalent = equivalent;
        self
    }

    /// Make diff generation fail with the given message.
    pub fn with_diff_error(mut self, message: impl Into<String>) -> Self {
        self.diff_error = Some(message.into());
        self
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<DiffCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of equivalence checks performed.
    pub fn equivalence_checks(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, DiffCall::IsEquivalent { .. }))
            .count()
    }

    /// Number of diffs generated.
    pub fn diffs_generated(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, DiffCall::GenerateDiff { .. }))
            .count()
    }

    fn record(&self, call: DiffCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockDiffTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiffCapability for MockDiffTool {
    async fn is_available(&self) -> SnapshotResult<bool> {
        self.record(DiffCall::Probe);
        Ok(self.available)
    }

    async fn is_equivalent(&self, candidate: &Path, snapshot: &Path) -> SnapshotResult<bool> {
        self.record(DiffCall::IsEquivalent {
            candidate: candidate.to_path_buf(),
            snapshot: snapshot.to_path_buf(),
        });
        Ok(self.equivalent)
    }

    async fn generate_diff(
        &self,
        candidate: &Path,
        snapshot: &Path,
        output: &Path,
    ) -> SnapshotResult<()> {
        self.record(DiffCall::GenerateDiff {
            candidate: candidate.to_path_buf(),
            snapshot: snapshot.to_path_buf(),
            output: output.to_path_buf(),
        });

        if let Some(message) = &self.diff_error {
            return Err(SnapshotError::tool_failed("mock-diff", message.clone()));
        }

        tokio::fs::write(output, MOCK_DIFF_CONTENT).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls() {
        let tool = MockDiffTool::new().with_equivalent(false);

        assert!(tool.is_available().await.unwrap());
        assert!(!tool
            .is_equivalent(Path::new("a.pdf"), Path::new("b.pdf"))
            .await
            .unwrap());

        assert_eq!(
            tool.calls(),
            vec![
                DiffCall::Probe,
                DiffCall::IsEquivalent {
                    candidate: PathBuf::from("a.pdf"),
                    snapshot: PathBuf::from("b.pdf"),
                },
            ]
        );
        assert_eq!(tool.equivalence_checks(), 1);
        assert_eq!(tool.diffs_generated(), 0);
    }

    #[tokio::test]
    async fn test_diff_error() {
        let tool = MockDiffTool::new().with_diff_error("boom");
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("d.pdf");

        let result = tool
            .generate_diff(Path::new("a.pdf"), Path::new("b.pdf"), &output)
            .await;
        assert!(result.is_err());
        assert!(!output.exists());
        assert_eq!(tool.diffs_generated(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_calls() {
        let tool = MockDiffTool::unavailable();
        let clone = tool.clone();

        assert!(!clone.is_available().await.unwrap());
        assert_eq!(tool.calls(), vec![DiffCall::Probe]);
    }
}
