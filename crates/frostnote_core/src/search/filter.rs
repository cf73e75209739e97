//! Case-insensitive substring filter.
//!
//! # Responsibility
//! - Derive a read-only, order-preserving view of notes matching a query.
//!
//! # Invariants
//! - Pure function; no caching or indexing. Collections stay small enough
//!   that a linear scan per keystroke is acceptable.
//! - An empty query matches every note.

use crate::model::note::Note;

/// Returns every note whose title or content contains `query`,
/// case-insensitively, preserving collection order.
///
/// Whitespace in `query` is matched literally, not trimmed away.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .collect()
}
