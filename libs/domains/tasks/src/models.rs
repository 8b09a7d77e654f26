use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::{Validate, ValidationError};

/// Task identifier. Assigned by the manager, starting at 1.
pub type TaskId = u32;

/// Task priority levels
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TaskPriority {
    Low,
    /// Default priority
    #[default]
    Medium,
    High,
}

/// Task entity - a single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, never reused
    pub id: TaskId,
    /// Trimmed, non-empty text
    pub description: String,
    /// Set once through completion
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    pub(crate) fn new(id: TaskId, input: CreateTask) -> Self {
        Self {
            id,
            description: input.description.trim().to_string(),
            completed: false,
            created_at: Utc::now(),
            priority: input.priority,
            tags: normalize_tags(input.tags),
        }
    }

    /// Case-insensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("Task description cannot be empty".into()));
    }
    Ok(())
}

/// DTO for creating a new task
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(custom(function = "validate_description"))]
    pub description: String,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateTask {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Query filters for listing tasks. Both filters must match when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub tag: Option<String>,
}

impl TaskFilter {
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }
        if let Some(tag) = self.tag.as_deref() {
            // Blank tag filter means "no tag filter"
            if !tag.trim().is_empty() && !task.has_tag(tag) {
                return false;
            }
        }
        true
    }
}

/// Derived counts over the current collection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TaskStatistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage rounded to one decimal place
    pub completion_rate: f64,
}

impl TaskStatistics {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let completion_rate = if total > 0 {
            let rate = completed as f64 / total as f64 * 100.0;
            // Halves go to the even neighbour: 6.25 becomes 6.2
            (rate * 10.0).round_ties_even() / 10.0
        } else {
            0.0
        };

        Self {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        }
    }
}

impl fmt::Display for TaskStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {}, Completed: {}, Pending: {}, Completion Rate: {}%",
            self.total, self.completed, self.pending, self.completion_rate
        )
    }
}
