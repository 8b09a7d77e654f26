use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain_tasks::{TaskFilter, TaskId, TaskPriority};

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    author,
    version,
    about = "Track personal tasks from the command line"
)]
pub struct Cli {
    /// Task file to use (overrides TODO_FILE, default: tasks.json)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a new task
    Add {
        /// What needs doing
        description: String,

        /// Task priority: low, medium or high
        #[arg(short, long, default_value_t = TaskPriority::Medium)]
        priority: TaskPriority,

        /// Comma-separated tags, e.g. --tags work,urgent
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// List tasks, oldest first
    List {
        /// Only completed tasks
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Only pending tasks
        #[arg(long)]
        pending: bool,

        /// Only tasks carrying this tag (case-insensitive)
        #[arg(long)]
        tag: Option<String>,
    },

    /// Mark a task as done
    Done {
        /// Task id
        id: TaskId,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: TaskId,
    },

    /// Show completion statistics
    Stats,
}

/// Build the list filter from `list` flags
pub fn list_filter(completed: bool, pending: bool, tag: Option<String>) -> TaskFilter {
    let completed = match (completed, pending) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    TaskFilter { completed, tag }
}
