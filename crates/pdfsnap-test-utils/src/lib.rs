//! Testing utilities, fixtures, and mocks for pdfsnap.
//!
//! - **Fixtures**: Temporary project directories holding documents and snapshots
//! - **Mocks**: A recording [`DiffCapability`](pdfsnap_snapshot::DiffCapability)
//! - **Assertions**: Helpers for checking comparison results and files
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pdfsnap_snapshot::{compare, ComparisonRequest};
//! use pdfsnap_test_utils::{MockDiffTool, TestProject};
//!
//! #[tokio::test]
//! async fn test_first_run_adds_snapshot() {
//!     let project = TestProject::new().with_document("out/report.pdf", b"%PDF-1.7").build();
//!     let request = ComparisonRequest::new(project.path().join("out/report.pdf"), project.path().join("snaps"), "report")
//!         .with_add_snapshot(true);
//!
//!     let result = compare(&request, &MockDiffTool::new()).await.unwrap();
//!     assert!(result.added());
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used items
pub use fixtures::{BuiltTestProject, TestProject};
pub use mocks::{DiffCall, MockDiffTool};
