//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `frostnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use frostnote_core::{MemorySlot, NoteDraft, NoteStore};

fn main() {
    let mut store = NoteStore::open(MemorySlot::new());
    store.save(NoteDraft::new("Smoke", "core wiring check"));

    println!("frostnote_core version={}", frostnote_core::core_version());
    println!("frostnote_core notes={}", store.len());
}
