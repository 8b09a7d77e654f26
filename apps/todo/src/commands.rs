use std::io::{self, Write};
use std::process::ExitCode;

use domain_tasks::{CreateTask, Task, TaskError, TaskManager, TaskStorage};
use thiserror::Error;

use crate::cli::{Command, list_filter};

#[derive(Debug, Error)]
pub enum CommandError {
    /// Reported to the user; the process keeps control of its exit code
    #[error(transparent)]
    Task(#[from] TaskError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// How a command ended when no error was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::FAILURE,
        }
    }
}

/// Run one command against the manager, writing results to `out`.
///
/// Unknown ids are printed and reported as [`Outcome::NotFound`]; they are
/// not errors.
pub async fn execute<S, W>(
    command: Command,
    manager: &mut TaskManager<S>,
    out: &mut W,
) -> Result<Outcome, CommandError>
where
    S: TaskStorage,
    W: Write,
{
    match command {
        Command::Add {
            description,
            priority,
            tags,
        } => {
            let input = CreateTask::new(description)
                .with_priority(priority)
                .with_tags(tags);
            let task = manager.add(input).await?;
            writeln!(out, "Added task #{}: {}", task.id, task.description)?;
            Ok(Outcome::Success)
        }
        Command::List {
            completed,
            pending,
            tag,
        } => {
            let tasks = manager.list(&list_filter(completed, pending, tag));
            if tasks.is_empty() {
                writeln!(out, "No tasks found.")?;
            }
            for task in &tasks {
                writeln!(out, "{}", format_task(task))?;
            }
            Ok(Outcome::Success)
        }
        Command::Done { id } => {
            if manager.mark_done(id).await? {
                writeln!(out, "Marked task #{id} as done.")?;
                Ok(Outcome::Success)
            } else {
                writeln!(out, "Task #{id} not found.")?;
                Ok(Outcome::NotFound)
            }
        }
        Command::Delete { id } => {
            if manager.delete(id).await? {
                writeln!(out, "Deleted task #{id}.")?;
                Ok(Outcome::Success)
            } else {
                writeln!(out, "Task #{id} not found.")?;
                Ok(Outcome::NotFound)
            }
        }
        Command::Stats => {
            writeln!(out, "{}", manager.statistics())?;
            Ok(Outcome::Success)
        }
    }
}

/// One line per task: `[x] #1 Buy milk (high) [shopping] created 2024-05-01`
pub fn format_task(task: &Task) -> String {
    let mark = if task.completed { "[x]" } else { "[ ]" };
    let mut line = format!(
        "{} #{} {} ({})",
        mark, task.id, task.description, task.priority
    );
    if !task.tags.is_empty() {
        line.push_str(&format!(" [{}]", task.tags.join(", ")));
    }
    line.push_str(&format!(" created {}", task.created_at.format("%Y-%m-%d")));
    line
}
