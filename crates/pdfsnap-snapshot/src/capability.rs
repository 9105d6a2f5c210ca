//! External capabilities the comparator depends on.

use crate::SnapshotResult;
use async_trait::async_trait;
use std::path::Path;

/// Document comparison backend.
///
/// Implemented by [`crate::DiffPdf`] for real runs and by mocks in tests.
/// Errors returned from these methods are infrastructure failures and are
/// propagated by the comparator unchanged.
#[async_trait]
pub trait DiffCapability: Send + Sync {
    /// Whether the backing tool is installed and runnable.
    async fn is_available(&self) -> SnapshotResult<bool>;

    /// Whether the two documents render identically.
    async fn is_equivalent(&self, candidate: &Path, snapshot: &Path) -> SnapshotResult<bool>;

    /// Write a visual diff of the two documents to `output`.
    async fn generate_diff(
        &self,
        candidate: &Path,
        snapshot: &Path,
        output: &Path,
    ) -> SnapshotResult<()>;
}
