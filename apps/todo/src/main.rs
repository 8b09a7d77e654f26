mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use color_eyre::Result;
use commands::CommandError;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv, StorageConfig};
use domain_tasks::{JsonTaskStorage, TaskManager};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    install_color_eyre();

    let cli = Cli::parse();
    init_tracing(&Environment::from_env());

    let config = StorageConfig::from_env()?.with_override(cli.file.clone());
    let mut manager = TaskManager::new(JsonTaskStorage::new(config.path()));

    if let Err(err) = manager.initialize().await {
        debug!(error = %err, path = %config.path().display(), "Failed to load tasks");
        eprintln!("Fatal error: {err}");
        return Ok(ExitCode::FAILURE);
    }

    let mut out = std::io::stdout();
    match commands::execute(cli.command, &mut manager, &mut out).await {
        Ok(outcome) => Ok(outcome.into()),
        Err(CommandError::Task(err)) => {
            debug!(error = %err, "Command failed");
            eprintln!("Error: {err}");
            if manager.has_unsaved_changes() {
                eprintln!(
                    "Warning: the change was not saved to {}",
                    config.path().display()
                );
            }
            Ok(ExitCode::FAILURE)
        }
        Err(err @ CommandError::Output(_)) => Err(err.into()),
    }
}
