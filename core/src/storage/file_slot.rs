//! File-based blob slot
//!
//! Each key is stored as `<dir>/<key>.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::slot::BlobSlot;
use crate::Result;

/// Blob slot backed by one file per key in a directory
#[derive(Debug, Clone)]
pub struct FileSlot {
    /// Directory holding the blob files
    dir: PathBuf,
}

impl FileSlot {
    /// Create a new FileSlot
    ///
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        // Write beside the target and rename so a crash never leaves half a blob
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;

        debug!("Wrote {} bytes to {}", blob.len(), path.display());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
