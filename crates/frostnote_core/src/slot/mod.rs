//! Durable storage slot abstractions and implementations.
//!
//! # Responsibility
//! - Define the single-slot read/write contract used by the note store.
//! - Isolate filesystem details from collection/business logic.
//!
//! # Invariants
//! - One slot holds the entire serialized collection.
//! - Every write is a full overwrite, never an incremental patch.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file_slot;
mod memory_slot;

pub use file_slot::FileSlot;
pub use memory_slot::MemorySlot;

pub type SlotResult<T> = Result<T, SlotError>;

/// Error raised by slot read/write operations.
///
/// Callers in the store treat these as best-effort failures: they are logged
/// and never surfaced to the user.
#[derive(Debug)]
pub enum SlotError {
    Io(std::io::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "slot io failure: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SlotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Single named storage location for the serialized note collection.
pub trait StorageSlot {
    /// Reads the current payload. `None` when the slot has never been written.
    fn load(&self) -> SlotResult<Option<String>>;

    /// Replaces the entire payload.
    fn store(&mut self, payload: &str) -> SlotResult<()>;
}
