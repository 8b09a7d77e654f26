//! Temporary task file infrastructure
//!
//! Provides a `TestStore` helper that owns a scratch directory for a task
//! file. The directory and everything in it are removed on drop.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// File name used for the task list inside the scratch directory
pub const TASK_FILE: &str = "tasks.json";

/// Scratch directory holding a task file
pub struct TestStore {
    dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    /// Create an empty store; the task file itself does not exist yet
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestStore;
    ///
    /// let store = TestStore::new();
    /// assert!(!store.path().exists());
    /// ```
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("todo-test-")
            .tempdir()
            .expect("Failed to create temporary directory");
        let path = dir.path().join(TASK_FILE);

        tracing::debug!(path = %path.display(), "Created test store");
        Self { dir, path }
    }

    /// Create a store whose task file already holds `contents`
    pub fn with_contents(contents: &str) -> Self {
        let store = Self::new();
        store.write_raw(contents);
        store
    }

    /// Path of the task file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scratch directory root
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path nested in a sub-directory that does not exist yet
    pub fn nested_path(&self, sub_dir: &str) -> PathBuf {
        self.dir.path().join(sub_dir).join(TASK_FILE)
    }

    /// Path that can never be written: its parent is a regular file
    pub fn blocked_path(&self) -> PathBuf {
        let blocker = self.dir.path().join("not-a-directory");
        fs::write(&blocker, b"").expect("Failed to create blocking file");
        blocker.join(TASK_FILE)
    }

    /// Overwrite the task file with raw text
    pub fn write_raw(&self, contents: &str) {
        fs::write(&self.path, contents).expect("Failed to write task file");
    }

    /// Overwrite the task file with arbitrary bytes
    pub fn write_bytes(&self, contents: &[u8]) {
        fs::write(&self.path, contents).expect("Failed to write task file");
    }

    /// Read the task file as raw text
    pub fn read_raw(&self) -> String {
        fs::read_to_string(&self.path).expect("Failed to read task file")
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
