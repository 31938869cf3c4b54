//! In-memory blob slot
//!
//! Clones share the same map, so a caller can keep a handle to inspect
//! what a store wrote.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::slot::BlobSlot;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    blobs: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with one blob
    pub fn with_blob(key: &str, blob: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.blobs.borrow_mut().insert(key.to_string(), blob.into());
        slot
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl BlobSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}
