//! Test utilities for creating temporary directories of files.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for testing, cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Directory populated with the reference files a.txt(1) .. B.txt(7).
    pub fn with_reference_files() -> Self {
        let dir = Self::new();
        for (name, contents) in REFERENCE_FILES {
            dir.add_file(name, contents);
        }
        dir
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Names and contents whose byte lengths run from 1 to 7.
pub const REFERENCE_FILES: [(&str, &str); 7] = [
    ("a.txt", "1"),
    ("ab.txt", "12"),
    ("abc.txt", "123"),
    ("bc.txt", "1234"),
    ("bcd.txt", "12345"),
    ("AbCd.txt", "123456"),
    ("B.txt", "1234567"),
];
