//! In-memory storage slot.
//!
//! Used by tests and by embedding hosts that manage durability themselves.

use super::{SlotResult, StorageSlot};
use std::io::{Error, ErrorKind};

/// Keeps the payload in memory; starts empty unless seeded.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Option<String>,
    fail_writes: bool,
}

impl MemorySlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with `payload`, as if previously written.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            fail_writes: false,
        }
    }

    /// Makes every subsequent `store` call fail, for write-failure tests.
    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    /// Returns the last stored payload, if any.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl StorageSlot for MemorySlot {
    fn load(&self) -> SlotResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn store(&mut self, payload: &str) -> SlotResult<()> {
        if self.fail_writes {
            return Err(Error::new(ErrorKind::Other, "slot writes disabled").into());
        }
        self.payload = Some(payload.to_string());
        Ok(())
    }
}
