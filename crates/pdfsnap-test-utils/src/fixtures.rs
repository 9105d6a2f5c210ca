//! Test fixtures for creating reproducible test environments.
//!
//! Provides a temporary project directory holding candidate documents and
//! snapshot directories.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary test project with configurable file structure.
///
/// Creates a temporary directory that is automatically cleaned up
/// when the project is dropped.
///
/// # Example
///
/// ```rust
/// use pdfsnap_test_utils::fixtures::{content, TestProject};
///
/// let project = TestProject::new()
///     .with_document("out/report.pdf", content::PDF_A)
///     .with_dir("snapshots")
///     .build();
///
/// assert!(project.file_exists("out/report.pdf"));
/// ```
pub struct TestProject {
    /// The temporary directory backing this project.
    temp_dir: TempDir,
    /// Files to create (path relative to root -> contents).
    files: HashMap<PathBuf, Vec<u8>>,
    /// Directories to create (paths relative to root).
    dirs: Vec<PathBuf>,
}

impl TestProject {
    /// Create a new test project builder.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
            files: HashMap::new(),
            dirs: Vec::new(),
        }
    }

    /// Add a document to the project.
    ///
    /// The path should be relative to the project root.
    /// Parent directories are created automatically.
    pub fn with_document(mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        self.files
            .insert(path.as_ref().to_path_buf(), contents.as_ref().to_vec());
        self
    }

    /// Add an empty directory to the project.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.dirs.push(path.as_ref().to_path_buf());
        self
    }

    /// Add a stored snapshot `<snapshot_dir>/<identifier>.pdf`.
    pub fn with_snapshot(
        self,
        snapshot_dir: impl AsRef<Path>,
        identifier: &str,
        contents: impl AsRef<[u8]>,
    ) -> Self {
        let path = snapshot_dir.as_ref().join(format!("{identifier}.pdf"));
        self.with_document(path, contents)
    }

    /// Add a `pdfsnap.json` configuration file.
    pub fn with_config(self, config: &str) -> Self {
        self.with_document("pdfsnap.json", config)
    }

    /// Build the project, creating all files and directories.
    pub fn build(self) -> BuiltTestProject {
        let root = self.temp_dir.path();

        // Create directories first
        for dir in &self.dirs {
            let full_path = root.join(dir);
            fs::create_dir_all(&full_path).unwrap_or_else(|e| {
                panic!("Failed to create directory {}: {}", full_path.display(), e)
            });
        }

        for (path, contents) in &self.files {
            let full_path = root.join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).unwrap_or_else(|e| {
                    panic!(
                        "Failed to create parent directory for {}: {}",
                        full_path.display(),
                        e
                    )
                });
            }
            fs::write(&full_path, contents)
                .unwrap_or_else(|e| panic!("Failed to write file {}: {}", full_path.display(), e));
        }

        BuiltTestProject {
            temp_dir: self.temp_dir,
        }
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A built test project with files created on disk.
pub struct BuiltTestProject {
    temp_dir: TempDir,
}

impl BuiltTestProject {
    /// Get the path to the project root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a project-relative path.
    pub fn join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.path().join(path)
    }

    /// Read a file from the project.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Vec<u8> {
        let full_path = self.join(path);
        fs::read(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read file {}: {}", full_path.display(), e))
    }

    /// Check if a file exists in the project.
    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        self.join(path).exists()
    }

    /// Write a file to the project (for modifying during tests).
    pub fn write_file(&self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) {
        let full_path = self.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).ok();
        }
        fs::write(&full_path, contents)
            .unwrap_or_else(|e| panic!("Failed to write file {}: {}", full_path.display(), e));
    }

    /// List file and directory names directly under `dir`, sorted.
    pub fn list_dir(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let full_path = self.join(dir);
        if !full_path.exists() {
            return Vec::new();
        }

        let mut names: Vec<String> = fs::read_dir(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", full_path.display(), e))
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

/// Common test document contents.
///
/// These are not renderable documents; the mock capability never parses them.
pub mod content {
    /// A candidate document.
    pub const PDF_A: &[u8] = b"%PDF-1.7\n% document A\n%%EOF\n";

    /// A document differing from [`PDF_A`].
    pub const PDF_B: &[u8] = b"%PDF-1.7\n% document B\n%%EOF\n";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builds_files_and_dirs() {
        let project = TestProject::new()
            .with_document("out/a.pdf", content::PDF_A)
            .with_snapshot("snaps", "x", content::PDF_B)
            .with_dir("empty")
            .build();

        assert_eq!(project.read_file("out/a.pdf"), content::PDF_A);
        assert_eq!(project.read_file("snaps/x.pdf"), content::PDF_B);
        assert!(project.join("empty").is_dir());
        assert_eq!(project.list_dir("snaps"), vec!["x.pdf"]);
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let project = TestProject::new().build();
        assert!(project.list_dir("nope").is_empty());
    }
}
