//! Durable storage for the task collection
//!
//! A [`BlobSlot`] is a key-value slot holding whole blobs; the
//! [`TaskPersistence`] adapter maps the collection onto one of its keys.

mod file_slot;
mod memory_slot;
mod persistence;
mod slot;

pub use file_slot::FileSlot;
pub use memory_slot::MemorySlot;
pub use persistence::{TaskPersistence, STORAGE_KEY};
pub use slot::BlobSlot;
