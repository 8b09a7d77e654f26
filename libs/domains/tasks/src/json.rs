use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::{
    error::{TaskError, TaskResult},
    models::Task,
    storage::{validate_collection, TaskStorage},
};

/// JSON file backing for the task list
///
/// The whole collection is rewritten on every save. Writes go to a sibling
/// temporary file that is then renamed over the target, so readers never see
/// a half-written list.
#[derive(Debug, Clone)]
pub struct JsonTaskStorage {
    path: PathBuf,
}

impl JsonTaskStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(self.path.file_name().unwrap_or(OsStr::new("tasks.json")));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl TaskStorage for JsonTaskStorage {
    async fn exists(&self) -> TaskResult<bool> {
        // Unreadable or missing paths count as "nothing persisted yet"
        Ok(fs::metadata(&self.path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false))
    }

    async fn load(&self) -> TaskResult<Vec<Task>> {
        if !self.exists().await? {
            tracing::debug!(path = %self.path.display(), "No task file yet");
            return Ok(Vec::new());
        }

        let raw = fs::read(&self.path)
            .await
            .map_err(|e| TaskError::io(&self.path, e))?;

        if raw.trim_ascii().is_empty() {
            return Ok(Vec::new());
        }

        // Bytes that are not UTF-8 fail here too, as corruption
        let tasks: Vec<Task> = serde_json::from_slice(&raw)
            .map_err(|e| TaskError::corrupted(&self.path, e.to_string()))?;
        validate_collection(&self.path, &tasks)?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    async fn save(&self, tasks: &[Task]) -> TaskResult<()> {
        let json = serde_json::to_string_pretty(tasks)
            .map_err(|e| TaskError::io(&self.path, std::io::Error::other(e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| TaskError::io(parent, e))?;
        }

        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, json.as_bytes()).await {
            let _ = fs::remove_file(&temp).await;
            return Err(TaskError::io(&temp, e));
        }

        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(TaskError::io(&self.path, e));
        }

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Saved tasks");
        Ok(())
    }
}
