//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its save-input shape.
//! - Keep the palette and title/content defaults in one place for store and
//!   input layers.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `color` is assigned once at creation and survives edits unless the
//!   caller explicitly overrides it.
//! - `date` is a display string stamped on every save; it is never parsed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Title substituted when a note is saved with a blank title.
pub const UNTITLED_TITLE: &str = "Untitled Note";

/// Upper bound on content length, enforced by input layers via
/// [`clamp_content`].
///
/// The store never truncates on its own: the bound is an input-time rule, so
/// longer pre-existing content keeps round-tripping unchanged.
pub const MAX_CONTENT_CHARS: usize = 300;

/// Categorical color tag attached to every note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Blue,
    Purple,
    Emerald,
    Amber,
}

/// Fixed palette sampled uniformly when a note is created.
pub const PALETTE: [NoteColor; 4] = [
    NoteColor::Blue,
    NoteColor::Purple,
    NoteColor::Emerald,
    NoteColor::Amber,
];

/// User-authored note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id assigned at creation.
    pub id: NoteId,
    /// Title text; never blank after a save (defaults to [`UNTITLED_TITLE`]).
    pub title: String,
    /// Body text.
    pub content: String,
    /// Human-readable save stamp, recomputed on every save including edits.
    pub date: String,
    /// Palette tag, preserved across edits.
    pub color: NoteColor,
}

/// Save input accepted by the store.
///
/// `id` selects between create (absent or unmatched) and in-place update
/// (matches an existing note). `color` is an optional override; edits keep
/// the existing color when it is `None`.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub color: Option<NoteColor>,
}

impl NoteDraft {
    /// Creates a draft for a new note.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            color: None,
        }
    }

    /// Creates a draft replacing the note with `id`.
    pub fn edit(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            content: content.into(),
            color: None,
        }
    }

    /// Returns whether both title and content are empty or whitespace-only.
    ///
    /// Blank drafts are silently ignored by the store.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

/// Truncates content to the input bound on a character boundary.
///
/// Input layers call this while text is being entered; stored content is
/// accepted as given.
pub fn clamp_content(content: &str) -> String {
    content.chars().take(MAX_CONTENT_CHARS).collect()
}
