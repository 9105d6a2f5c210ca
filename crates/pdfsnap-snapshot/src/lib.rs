//! Snapshot testing for page-oriented documents.
//!
//! This crate compares a freshly produced document against a stored reference
//! snapshot and:
//! - Writes the snapshot on first run (when allowed)
//! - Overwrites it on request
//! - Produces a visual diff when the two differ
//!
//! Comparison itself is delegated to a [`DiffCapability`]; [`DiffPdf`] drives
//! the `diff-pdf` tool.
//!
//! # Example
//!
//! ```no_run
//! use pdfsnap_snapshot::{compare, DiffPdf, SnapshotConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SnapshotConfig::load(None).await?;
//! let request = config.request("target/report.pdf", "tests/__pdf_snapshots__", "report");
//!
//! let result = compare(&request, &DiffPdf::new(config.diff_pdf.clone())).await?;
//! if !result.pass() {
//!     eprintln!("{result}");
//! }
//! # Ok(())
//! # }
//! ```

mod capability;
mod comparator;
mod config;
mod diff_pdf;
mod error;
pub mod naming;
mod outcome;
mod request;

pub use capability::DiffCapability;
pub use comparator::compare;
pub use config::{DiffPdfConfig, SnapshotConfig, UpdateMode, CONFIG_FILE, DEFAULT_DIFF_PDF_BINARY};
pub use diff_pdf::{DiffPdf, COMMAND_NOT_FOUND_STATUS};
pub use error::{SnapshotError, SnapshotResult};
pub use outcome::{ComparisonResult, FailureType};
pub use request::{ComparisonRequest, DEFAULT_EXTENSION, DIFF_OUTPUT_DIR};
