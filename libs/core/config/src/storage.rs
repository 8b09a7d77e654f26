use crate::{env_or_default, ConfigError, FromEnv};
use std::path::{Path, PathBuf};

/// Default task file, relative to the working directory
pub const DEFAULT_TASK_FILE: &str = "tasks.json";

/// Location of the persisted task list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl StorageConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the configured path when an explicit one is given (e.g. a CLI flag)
    pub fn with_override(self, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self { path },
            None => self,
        }
    }
}

impl FromEnv for StorageConfig {
    /// Reads TODO_FILE, defaulting to `tasks.json`
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("TODO_FILE", DEFAULT_TASK_FILE);

        if raw.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "TODO_FILE".to_string(),
                details: "path must not be empty".to_string(),
            });
        }

        Ok(Self::new(raw))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TASK_FILE)
    }
}
