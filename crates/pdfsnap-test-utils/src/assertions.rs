//! Custom assertion helpers for common test patterns.

use pdfsnap_snapshot::{ComparisonResult, FailureType};
use std::path::Path;

/// Assert that a comparison passed without writing a snapshot.
pub fn assert_matched(result: &ComparisonResult) {
    assert!(
        result.pass() && !result.added() && !result.updated(),
        "Expected a plain match, got {:?}",
        result
    );
}

/// Assert that a comparison failed with the given failure type.
pub fn assert_failed(result: &ComparisonResult, expected: FailureType) {
    assert!(!result.pass(), "Expected failure {:?}, got pass", expected);
    assert_eq!(
        result.failure_type(),
        Some(expected),
        "Unexpected failure type in {:?}",
        result
    );
    assert!(!result.added() && !result.updated());
}

/// Assert that two files hold the same bytes.
///
/// # Example
///
/// ```rust
/// use pdfsnap_test_utils::assertions::assert_files_identical;
/// use tempfile::TempDir;
///
/// let dir = TempDir::new().unwrap();
/// let a = dir.path().join("a.pdf");
/// let b = dir.path().join("b.pdf");
/// std::fs::write(&a, b"%PDF").unwrap();
/// std::fs::write(&b, b"%PDF").unwrap();
///
/// assert_files_identical(&a, &b);
/// ```
pub fn assert_files_identical(actual: &Path, expected: &Path) {
    let read = |path: &Path| {
        std::fs::read(path)
            .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e))
    };

    assert!(
        read(actual) == read(expected),
        "File {} differs from {}",
        actual.display(),
        expected.display()
    );
}

/// Assert that a result is Ok and extract the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}
