use std::path::PathBuf;

use thiserror::Error;

use crate::models::TaskId;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Task {0} is already completed")]
    AlreadyCompleted(TaskId),

    #[error("Corrupted task file {}: {details}", path.display())]
    Corrupted { path: PathBuf, details: String },

    #[error("Unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save the new task: {0}")]
    Persistence(#[source] Box<TaskError>),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupted(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        TaskError::Corrupted {
            path: path.into(),
            details: details.into(),
        }
    }

    /// True when the error came from the storage layer, meaning in-memory
    /// state may be ahead of what was persisted.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            TaskError::Io { .. } | TaskError::Corrupted { .. } | TaskError::Persistence(_)
        )
    }
}

impl From<validator::ValidationErrors> for TaskError {
    fn from(err: validator::ValidationErrors) -> Self {
        TaskError::Validation(err.to_string())
    }
}
