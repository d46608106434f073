#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the dark-guard binary.
#[macro_export]
macro_rules! dark_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("dark-guard"))
    };
}

/// Directory under the fixture that gets audited. Config files live beside
/// it so they are never judged themselves.
pub const TREE_DIR: &str = "tree";

/// Creates a temporary directory with a tree to audit.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty tree.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fs::create_dir(fixture.tree()).expect("Failed to create tree directory");
        fixture
    }

    /// Creates a file inside the audited tree.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.tree().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory inside the audited tree.
    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.tree().join(relative_path)).expect("Failed to create directory");
    }

    /// Writes `.dark-guard.toml` next to the tree.
    pub fn create_config(&self, content: &str) {
        fs::write(self.path().join(".dark-guard.toml"), content).expect("Failed to write config");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the path to the audited tree.
    pub fn tree(&self) -> PathBuf {
        self.dir.path().join(TREE_DIR)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A tree every default rule accepts.
pub fn clean_fixture() -> TestFixture {
    let fixture = TestFixture::new();
    fixture.create_file("readme.txt", "read me");
    fixture.create_file("data/values.csv", "a,b\n1,2\n");
    fixture
}
