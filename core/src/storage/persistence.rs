//! Task collection persistence
//!
//! Serializes the whole collection as one JSON array under a fixed key.

use tracing::debug;

use super::slot::BlobSlot;
use crate::task::Task;
use crate::{Error, Result};

/// Key of the slot holding the task collection
pub const STORAGE_KEY: &str = "cc_todos_v2";

/// Maps the task collection onto a [`BlobSlot`]
pub struct TaskPersistence {
    slot: Box<dyn BlobSlot>,
    key: String,
}

impl TaskPersistence {
    /// Create a new TaskPersistence using [`STORAGE_KEY`]
    pub fn new(slot: impl BlobSlot + 'static) -> Self {
        Self::with_key(slot, STORAGE_KEY)
    }

    pub fn with_key(slot: impl BlobSlot + 'static, key: impl Into<String>) -> Self {
        Self {
            slot: Box::new(slot),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored collection.
    ///
    /// A missing or empty blob is an empty collection. A blob that does not
    /// parse is reported as [`Error::Corrupt`]; deciding what to do about it
    /// is left to the caller.
    pub fn load(&self) -> Result<Vec<Task>> {
        let Some(raw) = self.slot.get(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|e| Error::Corrupt(e.to_string()))
    }

    /// Overwrite the stored collection
    pub fn save(&mut self, tasks: &[Task]) -> Result<()> {
        let blob = serde_json::to_string(tasks)?;
        self.slot.set(&self.key, &blob)?;
        debug!("Persisted {} tasks under `{}`", tasks.len(), self.key);
        Ok(())
    }

    /// Remove the stored blob entirely
    pub fn clear(&mut self) -> Result<()> {
        self.slot.clear(&self.key)
    }
}
