//! Tasks Domain
//!
//! Personal task tracking: an in-memory task collection that is saved in
//! full after every change.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │ TaskManager │  ← Id allocation, validation, filtering, statistics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ TaskStorage │  ← Load/save of the whole list (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Task, priority, filters, statistics
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{CreateTask, JsonTaskStorage, TaskManager, TaskPriority};
//!
//! # async fn example() -> Result<(), domain_tasks::TaskError> {
//! let storage = JsonTaskStorage::new("tasks.json");
//! let mut manager = TaskManager::new(storage);
//! manager.initialize().await?;
//!
//! let task = manager
//!     .add(CreateTask::new("Buy milk").with_priority(TaskPriority::High))
//!     .await?;
//! manager.mark_done(task.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod json;
pub mod manager;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use json::JsonTaskStorage;
pub use manager::TaskManager;
pub use models::{CreateTask, Task, TaskFilter, TaskId, TaskPriority, TaskStatistics};
pub use storage::{InMemoryTaskStorage, TaskStorage};
