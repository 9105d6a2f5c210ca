//! Snapshot naming conventions.
//!
//! Snapshots live next to the test that produced them, in a
//! `__pdf_snapshots__` directory, and are named after the test file, the test
//! name and a per-test counter.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory name for snapshots, relative to the test file's directory.
pub const SNAPSHOT_DIR_NAME: &str = "__pdf_snapshots__";

/// Default snapshot directory for a test file.
pub fn default_snapshot_dir(test_file: &Path) -> PathBuf {
    test_file
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(SNAPSHOT_DIR_NAME)
}

/// Snapshot identifier for the `counter`-th assertion in a test.
///
/// `("tests/report.rs", "renders totals", 1)` becomes `report-rs-renders-totals-1`.
pub fn snapshot_identifier(test_file: &Path, test_name: &str, counter: u32) -> String {
    let file_name = test_file
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    kebab_case(&format!("{file_name}-{test_name}-{counter}"))
}

/// Lowercase words joined by single hyphens.
///
/// Word boundaries are non-alphanumeric characters and lower-to-upper case
/// transitions.
pub fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_lower = false;

    for c in input.chars() {
        if c.is_alphanumeric() {
            if c.is_uppercase() && prev_lower {
                out.push('-');
            }
            out.extend(c.to_lowercase());
            prev_lower = c.is_lowercase() || c.is_numeric();
        } else {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Counts snapshot assertions per test so repeated assertions get distinct names.
#[derive(Debug, Default)]
pub struct SnapshotCounter {
    counts: HashMap<String, u32>,
}

impl SnapshotCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next counter value for `test_name`, starting at 1.
    pub fn next(&mut self, test_name: &str) -> u32 {
        let count = self.counts.entry(test_name.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Next identifier for `test_name` in `test_file`.
    pub fn next_identifier(&mut self, test_file: &Path, test_name: &str) -> String {
        let counter = self.next(test_name);
        snapshot_identifier(test_file, test_name, counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("renders totals"), "renders-totals");
        assert_eq!(kebab_case("invoiceTotals"), "invoice-totals");
        assert_eq!(kebab_case("  Mixed__Separators!! "), "mixed-separators");
        assert_eq!(kebab_case("page2Header"), "page2-header");
        assert_eq!(kebab_case("PDF"), "pdf");
    }

    #[test]
    fn test_snapshot_identifier() {
        assert_eq!(
            snapshot_identifier(Path::new("tests/report.rs"), "renders totals", 1),
            "report-rs-renders-totals-1"
        );
    }

    #[test]
    fn test_default_snapshot_dir() {
        assert_eq!(
            default_snapshot_dir(Path::new("tests/report.rs")),
            PathBuf::from("tests/__pdf_snapshots__")
        );
        assert_eq!(
            default_snapshot_dir(Path::new("report.rs")),
            PathBuf::from("__pdf_snapshots__")
        );
    }

    #[test]
    fn test_counter_is_per_test() {
        let mut counter = SnapshotCounter::new();
        let file = Path::new("tests/report.rs");

        assert_eq!(counter.next_identifier(file, "a"), "report-rs-a-1");
        assert_eq!(counter.next_identifier(file, "a"), "report-rs-a-2");
        assert_eq!(counter.next_identifier(file, "b"), "report-rs-b-1");
    }
}
