//! Blob slot trait
//!
//! Defines the interface for the durable key-value slot.

use crate::Result;

/// Get/set/clear of whole blobs by key
pub trait BlobSlot {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob under `key`
    fn set(&mut self, key: &str, blob: &str) -> Result<()>;

    /// Remove the blob under `key`; removing a missing key is not an error
    fn clear(&mut self, key: &str) -> Result<()>;
}
