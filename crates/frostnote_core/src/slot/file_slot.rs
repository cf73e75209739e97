//! File-backed storage slot.
//!
//! # Responsibility
//! - Persist the serialized collection in a single file on disk.
//!
//! # Invariants
//! - A failed write must not truncate the previous payload.

use super::{SlotResult, StorageSlot};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the serialized collection in one file.
#[derive(Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot at `path`. The file may not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn load(&self) -> SlotResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&mut self, payload: &str) -> SlotResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write a sibling temp file first, then rename over the slot, so an
        // interrupted write leaves the previous payload intact.
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, payload)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}
