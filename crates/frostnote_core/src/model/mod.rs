//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical note record, its color palette, and save inputs.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - The collection is ordered newest-first and fully re-serialized on write.

pub mod note;
