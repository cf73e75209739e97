//! Core domain logic for Frostnote.
//! This crate is the single source of truth for note-collection invariants.

pub mod logging;
pub mod model;
pub mod search;
pub mod slot;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    clamp_content, Note, NoteColor, NoteDraft, NoteId, MAX_CONTENT_CHARS, PALETTE, UNTITLED_TITLE,
};
pub use search::filter::filter_notes;
pub use slot::{FileSlot, MemorySlot, SlotError, SlotResult, StorageSlot};
pub use store::note_store::{NoteStore, SaveOutcome};
pub use store::sources::{Clock, Entropy, SystemClock, ThreadEntropy};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
