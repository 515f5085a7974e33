//! Test utilities for temporary file handling
//!
//! Every file lives in its own temporary directory, removed on drop.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII wrapper for a temporary test file
pub struct TempTestFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TempTestFile {
    /// Reserve a path `<name>.<extension>` inside a fresh temporary directory
    pub fn new(name: &str, extension: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix("tabprep_test_")
            .tempdir()
            .expect("failed to create temporary directory");
        let path = dir.path().join(format!("{}.{}", name, extension));
        TempTestFile { _dir: dir, path }
    }

    /// Path of the file, which may not exist yet
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write `contents` verbatim to a temporary file
pub fn write_test_file(name: &str, extension: &str, contents: &str) -> TempTestFile {
    let file = TempTestFile::new(name, extension);
    fs::write(file.path(), contents).expect("failed to write test file");
    file
}

/// Helper to create a test CSV file with a header row
pub fn create_test_csv(name: &str, headers: &[&str], rows: &[&[&str]]) -> TempTestFile {
    let mut contents = headers.join(",");
    contents.push('\n');
    for row in rows {
        contents.push_str(&row.join(","));
        contents.push('\n');
    }
    write_test_file(name, "csv", &contents)
}

#[test]
fn test_temp_file_removed_on_drop() {
    let path;
    {
        let file = create_test_csv("cleanup", &["a"], &[&["1"]]);
        path = file.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n1\n");
    }
    assert!(!path.exists());
}
