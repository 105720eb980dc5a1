#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the boxchart binary.
#[macro_export]
macro_rules! boxchart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("boxchart"))
    };
}

/// The 1..=9 regression dataset.
pub const ONE_TO_NINE: &str = "1 2 3 4 5 6 7 8 9\n";

/// 1..=9 plus one value far above the upper fence.
pub const WITH_OUTLIER: &str = "1, 2, 3, 4, 5, 6, 7, 8, 9, 100\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.boxchart.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".boxchart.toml", content)
    }

    /// Creates a dataset file.
    pub fn create_dataset(&self, relative_path: &str, content: &str) -> PathBuf {
        self.create_file(relative_path, content)
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
