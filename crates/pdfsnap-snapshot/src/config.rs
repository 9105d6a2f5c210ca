//! Snapshot configuration.
//!
//! Configuration is loaded with the following precedence (later overrides earlier):
//! 1. Built-in defaults
//! 2. `pdfsnap.json` in the project directory
//! 3. Environment overrides: `PDFSNAP_UPDATE`, `PDFSNAP_DIFF_PDF`, `PDFSNAP_SNAPSHOT_DIR`

use crate::{ComparisonRequest, SnapshotError, SnapshotResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;
use tracing::debug;

/// Project configuration file name.
pub const CONFIG_FILE: &str = "pdfsnap.json";

/// Default `diff-pdf` executable.
pub const DEFAULT_DIFF_PDF_BINARY: &str = "diff-pdf";

/// When snapshots may be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Write missing snapshots and overwrite existing ones.
    All,
    /// Write missing snapshots only.
    #[default]
    New,
    /// Never write snapshots.
    None,
}

impl UpdateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateMode::All => "all",
            UpdateMode::New => "new",
            UpdateMode::None => "none",
        }
    }

    /// Whether existing snapshots are overwritten.
    pub fn update_snapshot(&self) -> bool {
        matches!(self, UpdateMode::All)
    }

    /// Whether missing snapshots are written.
    pub fn add_snapshot(&self) -> bool {
        matches!(self, UpdateMode::All | UpdateMode::New)
    }

    /// Default mode for the environment: `none` on CI, `new` elsewhere.
    pub fn for_environment(ci: bool) -> Self {
        if ci {
            UpdateMode::None
        } else {
            UpdateMode::New
        }
    }
}

impl FromStr for UpdateMode {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(UpdateMode::All),
            "new" => Ok(UpdateMode::New),
            "none" => Ok(UpdateMode::None),
            other => Err(SnapshotError::config(format!(
                "unknown update mode '{other}' (expected all, new or none)"
            ))),
        }
    }
}

/// Options passed to `diff-pdf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffPdfConfig {
    /// Executable name or path.
    pub binary: PathBuf,

    /// Per-channel color difference ignored when comparing pixels (0-255).
    pub channel_tolerance: Option<u8>,

    /// Number of differing pixels tolerated per page.
    pub per_page_pixel_tolerance: Option<u64>,

    /// Rasterization resolution.
    pub dpi: Option<u32>,

    /// Compare in grayscale.
    pub grayscale: bool,

    /// Mark differing regions in the diff output.
    pub mark_differences: bool,

    /// Leave identical pages out of the diff output.
    pub skip_identical: bool,

    /// Extra arguments appended before the document paths.
    pub extra_args: Vec<String>,
}

impl Default for DiffPdfConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_DIFF_PDF_BINARY),
            channel_tolerance: None,
            per_page_pixel_tolerance: None,
            dpi: None,
            grayscale: false,
            mark_differences: false,
            skip_identical: false,
            extra_args: Vec::new(),
        }
    }
}

/// Top-level snapshot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Snapshot directory used when a request does not name one.
    pub snapshot_dir: Option<PathBuf>,

    /// Snapshot write policy.
    pub update: UpdateMode,

    /// `diff-pdf` options.
    pub diff_pdf: DiffPdfConfig,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: None,
            update: UpdateMode::for_environment(std::env::var_os("CI").is_some()),
            diff_pdf: DiffPdfConfig::default(),
        }
    }
}

impl SnapshotConfig {
    /// Load configuration for a project directory, applying process environment overrides.
    ///
    /// A relative `snapshot_dir` in the project file is taken relative to `project_dir`.
    pub async fn load(project_dir: Option<&Path>) -> SnapshotResult<Self> {
        let mut config = Self::default();
        if let Some(dir) = project_dir {
            let path = dir.join(CONFIG_FILE);
            if path.exists() {
                config = Self::load_file(&path).await?;
                config.snapshot_dir = config.snapshot_dir.map(|snapshots| dir.join(snapshots));
            }
        }
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub async fn load_file(path: &Path) -> SnapshotResult<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "Loaded snapshot config");
        Ok(config)
    }

    /// Apply `PDFSNAP_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> SnapshotResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("PDFSNAP_UPDATE") {
            self.update = mode.parse()?;
        }
        if let Some(binary) = lookup("PDFSNAP_DIFF_PDF") {
            self.diff_pdf.binary = PathBuf::from(binary);
        }
        if let Some(dir) = lookup("PDFSNAP_SNAPSHOT_DIR") {
            self.snapshot_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    /// Build a request whose add/update flags follow the configured update mode.
    pub fn request(
        &self,
        document_path: impl Into<PathBuf>,
        snapshot_dir: impl Into<PathBuf>,
        snapshot_identifier: impl Into<String>,
    ) -> ComparisonRequest {
        ComparisonRequest::new(document_path, snapshot_dir, snapshot_identifier)
            .with_update_snapshot(self.update.update_snapshot())
            .with_add_snapshot(self.update.add_snapshot())
    }
}
