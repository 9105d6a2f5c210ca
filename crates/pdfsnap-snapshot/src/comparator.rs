//! Snapshot comparison decision tree.

use crate::{ComparisonRequest, ComparisonResult, DiffCapability, FailureType, SnapshotResult};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// Compare a candidate document against its reference snapshot.
///
/// Checks run in a fixed order and the first one that applies decides the
/// outcome:
///
/// 1. the diff tool must be available
/// 2. the candidate document must exist
/// 3. a missing snapshot is written when `add_snapshot` is set, otherwise fails
/// 4. `update_snapshot` overwrites the snapshot without comparing
/// 5. the documents are compared; on mismatch a visual diff is written to
///    [`ComparisonRequest::diff_output_path`]
///
/// Expected outcomes are returned as a [`ComparisonResult`]. Errors are only
/// returned for filesystem failures or failures raised by `capability`.
pub async fn compare(
    request: &ComparisonRequest,
    capability: &dyn DiffCapability,
) -> SnapshotResult<ComparisonResult> {
    let identifier = request.snapshot_identifier.as_str();

    if !capability.is_available().await? {
        warn!(identifier, "Diff tool not found");
        return Ok(ComparisonResult::failed(FailureType::DiffToolNotFound));
    }

    let document_path = request.document_path.as_path();
    if !document_path.exists() {
        debug!(identifier, document = ?document_path, "Source document missing");
        return Ok(ComparisonResult::failed(
            FailureType::SourceDocumentNotPresent,
        ));
    }

    let snapshot_path = request.snapshot_path();
    if !snapshot_path.exists() {
        if !request.add_snapshot {
            debug!(identifier, snapshot = ?snapshot_path, "Snapshot missing");
            return Ok(ComparisonResult::failed(FailureType::SnapshotNotPresent));
        }

        if !request.snapshot_dir.exists() {
            fs::create_dir_all(&request.snapshot_dir).await?;
        }
        copy_document(document_path, &snapshot_path).await?;
        info!(identifier, snapshot = ?snapshot_path, "Added snapshot");
        return Ok(ComparisonResult::snapshot_added());
    }

    if request.update_snapshot {
        copy_document(document_path, &snapshot_path).await?;
        info!(identifier, snapshot = ?snapshot_path, "Updated snapshot");
        return Ok(ComparisonResult::snapshot_updated());
    }

    if capability
        .is_equivalent(document_path, &snapshot_path)
        .await?
    {
        debug!(identifier, "Snapshot matched");
        return Ok(ComparisonResult::matched());
    }

    let diff_output_dir = request.diff_output_dir();
    if !diff_output_dir.exists() {
        fs::create_dir_all(&diff_output_dir).await?;
    }

    let diff_output_path = request.diff_output_path();
    capability
        .generate_diff(document_path, &snapshot_path, &diff_output_path)
        .await?;

    warn!(identifier, diff = ?diff_output_path, "Snapshot mismatch");
    Ok(ComparisonResult::mismatch(diff_output_path))
}

async fn copy_document(src: &Path, dst: &Path) -> SnapshotResult<()> {
    fs::copy(src, dst).await?;
    Ok(())
}
