//! Time and randomness sources for note creation.
//!
//! # Responsibility
//! - Supply save timestamps and fresh id/color values to the store.
//!
//! # Invariants
//! - `stamp` output is display-oriented; it is stored verbatim, never parsed.
//! - Colors are drawn uniformly from [`PALETTE`].

use crate::model::note::{NoteColor, NoteId, PALETTE};
use chrono::Local;
use rand::Rng;
use uuid::Uuid;

/// Source of formatted save timestamps.
pub trait Clock {
    fn stamp(&self) -> String;
}

/// Source of fresh note identity and palette color.
pub trait Entropy {
    fn note_id(&mut self) -> NoteId;
    fn pick_color(&mut self) -> NoteColor;
}

/// Wall-clock implementation producing stamps like `Jan 5, 03:04 PM`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn stamp(&self) -> String {
        Local::now().format("%b %-d, %I:%M %p").to_string()
    }
}

/// Thread-rng implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn note_id(&mut self) -> NoteId {
        Uuid::new_v4()
    }

    fn pick_color(&mut self) -> NoteColor {
        PALETTE[rand::thread_rng().gen_range(0..PALETTE.len())]
    }
}
