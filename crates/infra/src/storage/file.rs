//! JSON-file backed key-value store
//!
//! All entries live in one JSON object. Every write rewrites the whole file
//! through a temporary sibling that is renamed into place, so a crash never
//! leaves a half-written file behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tasks_core::KeyValueStore;
use tasks_domain::{Result, TasksError};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::errors::InfraError;

/// Key-value store persisted to a single JSON file
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: Mutex<Map<String, Value>>,
}

impl FileKeyValueStore {
    /// Open the store at `path`, loading existing entries.
    ///
    /// A missing file is an empty store; the file and its parent directories
    /// are created on the first write.
    ///
    /// # Errors
    /// Returns `Storage` if the file exists but is unreadable or is not a JSON
    /// object.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if fs::try_exists(&path).await.map_err(to_tasks)? {
            let contents = fs::read_to_string(&path).await.map_err(to_tasks)?;
            if contents.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&contents).map_err(to_tasks)? {
                    Value::Object(map) => map,
                    _ => {
                        return Err(TasksError::Storage(format!(
                            "{} does not contain a JSON object",
                            path.display()
                        )))
                    }
                }
            }
        } else {
            Map::new()
        };

        info!(path = %path.display(), entries = entries.len(), "file_store.opened");
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(to_tasks)?;
        }

        let contents = serde_json::to_vec_pretty(entries).map_err(to_tasks)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents).await.map_err(to_tasks)?;
        fs::rename(&tmp, &self.path).await.map_err(to_tasks)?;

        debug!(path = %self.path.display(), entries = entries.len(), "file_store.flushed");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value);
        self.flush(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries).await
    }
}

fn to_tasks<E: Into<InfraError>>(err: E) -> TasksError {
    let infra: InfraError = err.into();
    infra.into()
}
