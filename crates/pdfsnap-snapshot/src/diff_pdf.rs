//! `diff-pdf` backed comparison.
//!
//! Equivalence is decided by the exit status of `diff-pdf <a> <b>`; visual
//! diffs are produced with `--output-diff`.

use crate::{DiffCapability, DiffPdfConfig, SnapshotError, SnapshotResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::SystemTime;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, warn};

/// Shell status for "command not found".
pub const COMMAND_NOT_FOUND_STATUS: i32 = 127;

const TOOL_NAME: &str = "diff-pdf";

/// [`DiffCapability`] implemented by invoking the `diff-pdf` executable.
#[derive(Debug, Clone, Default)]
pub struct DiffPdf {
    config: DiffPdfConfig,
}

impl DiffPdf {
    pub fn new(config: DiffPdfConfig) -> Self {
        Self { config }
    }

    /// Run the probe command and report its exit status.
    ///
    /// A binary that cannot be found reports [`COMMAND_NOT_FOUND_STATUS`], the
    /// same status a shell would.
    pub async fn probe_status(&self) -> SnapshotResult<i32> {
        let status = Command::new(&self.config.binary)
            .arg("--help")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) => status.code().ok_or_else(|| {
                SnapshotError::tool_failed(TOOL_NAME, "probe terminated by signal")
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(COMMAND_NOT_FOUND_STATUS),
            Err(e) => Err(SnapshotError::tool_failed(
                TOOL_NAME,
                format!("failed to run {}: {}", self.config.binary.display(), e),
            )),
        }
    }

    /// Comparison options shared by equivalence checks and diff generation.
    pub fn comparison_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(tolerance) = self.config.channel_tolerance {
            args.push(format!("--channel-tolerance={tolerance}"));
        }
        if let Some(tolerance) = self.config.per_page_pixel_tolerance {
            args.push(format!("--per-page-pixel-tolerance={tolerance}"));
        }
        if let Some(dpi) = self.config.dpi {
            args.push(format!("--dpi={dpi}"));
        }
        if self.config.grayscale {
            args.push("--grayscale".to_string());
        }
        args.extend(self.config.extra_args.iter().cloned());
        args
    }

    fn diff_args(&self, output: &Path) -> Vec<String> {
        let mut args = self.comparison_args();
        if self.config.mark_differences {
            args.push("--mark-differences".to_string());
        }
        if self.config.skip_identical {
            args.push("--skip-identical".to_string());
        }
        args.push(format!("--output-diff={}", output.display()));
        args
    }

    async fn run(&self, args: Vec<String>, a: &Path, b: &Path) -> SnapshotResult<Output> {
        debug!(binary = %self.config.binary.display(), ?args, "Running diff-pdf");
        Command::new(&self.config.binary)
            .args(&args)
            .arg(a)
            .arg(b)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                SnapshotError::tool_failed(
                    TOOL_NAME,
                    format!("failed to run {}: {}", self.config.binary.display(), e),
                )
            })
    }
}

#[async_trait]
impl DiffCapability for DiffPdf {
    async fn is_available(&self) -> SnapshotResult<bool> {
        Ok(self.probe_status().await? != COMMAND_NOT_FOUND_STATUS)
    }

    async fn is_equivalent(&self, candidate: &Path, snapshot: &Path) -> SnapshotResult<bool> {
        let output = self.run(self.comparison_args(), candidate, snapshot).await?;
        match output.status.code() {
            Some(0) => Ok(true),
            Some(code) => {
                debug!(
                    code,
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "Documents differ"
                );
                Ok(false)
            }
            None => Err(SnapshotError::tool_failed(
                TOOL_NAME,
                "comparison terminated by signal",
            )),
        }
    }

    async fn generate_diff(
        &self,
        candidate: &Path,
        snapshot: &Path,
        output: &Path,
    ) -> SnapshotResult<()> {
        // A diff left over from an earlier run must not count as output.
        let previous = modified_time(output).await;

        let result = self.run(self.diff_args(output), candidate, snapshot).await?;
        if result.status.code().is_none() {
            return Err(SnapshotError::tool_failed(
                TOOL_NAME,
                "diff generation terminated by signal",
            ));
        }

        let written = match (previous, modified_time(output).await) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(before), Some(after)) => after > before,
        };

        if !written {
            let stderr = String::from_utf8_lossy(&result.stderr);
            warn!(output = %output.display(), "diff-pdf produced no diff output");
            return Err(SnapshotError::tool_failed(
                TOOL_NAME,
                format!(
                    "no diff written to {}: {}",
                    output.display(),
                    stderr.trim()
                ),
            ));
        }

        Ok(())
    }
}

async fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).await.ok()?.modified().ok()
}
