use std::sync::Arc;

use tracing::{debug, instrument, warn};
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskFilter, TaskId, TaskStatistics};
use crate::storage::TaskStorage;

/// Owns the authoritative task collection for one run.
///
/// Every mutation saves the complete collection before reporting success.
/// When a save fails the in-memory change stays applied and
/// [`has_unsaved_changes`](Self::has_unsaved_changes) reports the gap.
/// Operations are not synchronized; callers run one at a time.
pub struct TaskManager<S: TaskStorage> {
    storage: Arc<S>,
    tasks: Vec<Task>,
    next_id: TaskId,
    dirty: bool,
}

impl<S: TaskStorage> TaskManager<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
            tasks: Vec::new(),
            next_id: 1,
            dirty: false,
        }
    }

    /// Replace in-memory state with the persisted collection
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) -> TaskResult<()> {
        if !self.storage.exists().await? {
            debug!("No persisted tasks, starting with an empty list");
        }

        let tasks = self.storage.load().await?;
        self.next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        self.tasks = tasks;
        self.dirty = false;

        debug!(
            count = self.tasks.len(),
            next_id = self.next_id,
            "Task manager initialized"
        );
        Ok(())
    }

    /// Add a new task with validation
    #[instrument(skip(self, input), fields(priority = %input.priority))]
    pub async fn add(&mut self, input: CreateTask) -> TaskResult<Task> {
        input.validate()?;

        let id = self.allocate_id()?;
        self.next_id = id.checked_add(1).ok_or_else(id_space_exhausted)?;

        let task = Task::new(id, input);
        self.tasks.push(task.clone());

        if let Err(err) = self.persist().await {
            // The counter rolls back; the unsaved task stays in memory and
            // keeps its id reserved through allocate_id.
            self.next_id = id;
            warn!(task_id = id, error = %err, "Failed to save new task");
            return Err(TaskError::Persistence(Box::new(err)));
        }

        debug!(task_id = id, "Added task");
        Ok(task)
    }

    /// Tasks matching every set filter, ordered by id
    pub fn list(&self, filter: &TaskFilter) -> Vec<Task> {
        let mut result: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();

        result.sort_by_key(|t| t.id);
        result
    }

    /// Mark a task as completed. `Ok(false)` when the id is unknown.
    #[instrument(skip(self))]
    pub async fn mark_done(&mut self, id: TaskId) -> TaskResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!("Task not found");
            return Ok(false);
        };

        if task.completed {
            return Err(TaskError::AlreadyCompleted(id));
        }

        task.completed = true;
        self.persist().await?;

        debug!("Task completed");
        Ok(true)
    }

    /// Remove a task. `Ok(false)` when the id is unknown.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: TaskId) -> TaskResult<bool> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            debug!("Task not found");
            return Ok(false);
        };

        self.tasks.remove(index);
        self.persist().await?;

        debug!("Task deleted");
        Ok(true)
    }

    pub fn statistics(&self) -> TaskStatistics {
        TaskStatistics::from_tasks(&self.tasks)
    }

    /// Current collection in storage order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Id counter. The next add receives this id unless an unsaved task
    /// already holds it.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// True when the last save failed and memory is ahead of storage
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Next id above both the counter and every task held in memory
    fn allocate_id(&self) -> TaskResult<TaskId> {
        let above_held = match self.tasks.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(id_space_exhausted)?,
            None => 1,
        };
        Ok(self.next_id.max(above_held))
    }

    async fn persist(&mut self) -> TaskResult<()> {
        match self.storage.save(&self.tasks).await {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                Err(err)
            }
        }
    }
}

fn id_space_exhausted() -> TaskError {
    TaskError::Validation("task id space exhausted".to_string())
}
