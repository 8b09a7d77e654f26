use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::models::Task;

/// Storage trait for the persisted task list
///
/// The manager always hands over the complete collection; implementations
/// replace whatever they held before. Alternate backings (a database, a
/// remote API) only need these three operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStorage: Send + Sync {
    /// Whether a persisted collection is currently available
    async fn exists(&self) -> TaskResult<bool>;

    /// Load the persisted collection, or an empty one if nothing was saved yet
    async fn load(&self) -> TaskResult<Vec<Task>>;

    /// Replace the persisted collection with `tasks`
    async fn save(&self, tasks: &[Task]) -> TaskResult<()>;
}

/// Check that a loaded collection can be trusted: positive, unique ids and
/// non-blank descriptions.
pub fn validate_collection(source: &Path, tasks: &[Task]) -> TaskResult<()> {
    let mut seen = HashSet::with_capacity(tasks.len());

    for task in tasks {
        if task.id == 0 {
            return Err(TaskError::corrupted(source, "task id 0 is not allowed"));
        }
        if !seen.insert(task.id) {
            return Err(TaskError::corrupted(
                source,
                format!("duplicate task id {}", task.id),
            ));
        }
        if task.description.trim().is_empty() {
            return Err(TaskError::corrupted(
                source,
                format!("task {} has an empty description", task.id),
            ));
        }
    }

    Ok(())
}

/// In-memory implementation of TaskStorage (for development/testing)
///
/// Clones share state, so a test can keep a handle and inspect what the
/// manager saved.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskStorage {
    tasks: Arc<RwLock<Option<Vec<Task>>>>,
}

impl InMemoryTaskStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already persisted collection
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Some(tasks))),
        }
    }

    /// Snapshot of the last saved collection
    pub async fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().await.clone().unwrap_or_default()
    }
}

#[async_trait]
impl TaskStorage for InMemoryTaskStorage {
    async fn exists(&self) -> TaskResult<bool> {
        Ok(self.tasks.read().await.is_some())
    }

    async fn load(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.snapshot().await;
        validate_collection(Path::new("<memory>"), &tasks)?;
        Ok(tasks)
    }

    async fn save(&self, tasks: &[Task]) -> TaskResult<()> {
        *self.tasks.write().await = Some(tasks.to_vec());
        tracing::trace!(count = tasks.len(), "Saved tasks in memory");
        Ok(())
    }
}
