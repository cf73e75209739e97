//! Authoritative note collection with slot synchronization.
//!
//! # Responsibility
//! - Own the ordered note collection (newest first).
//! - Mirror every successful mutation into the storage slot.
//!
//! # Invariants
//! - No two notes share an id.
//! - Blank drafts (title and content both whitespace) never mutate state.
//! - Slot writes are best-effort: failures are logged and in-memory state
//!   stays authoritative until the next successful write.
//! - Missing or malformed durable state degrades to an empty collection.

use crate::model::note::{Note, NoteDraft, NoteId, UNTITLED_TITLE};
use crate::slot::StorageSlot;
use crate::store::sources::{Clock, Entropy, SystemClock, ThreadEntropy};
use log::{info, warn};

/// Result of one `save` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new note with this id was prepended to the collection.
    Created(NoteId),
    /// The existing note with this id was replaced in place.
    Updated(NoteId),
    /// The draft was blank; nothing changed and nothing was written.
    Ignored,
}

/// Owned note store synchronizing to a single storage slot.
pub struct NoteStore<S: StorageSlot> {
    notes: Vec<Note>,
    slot: S,
    clock: Box<dyn Clock>,
    entropy: Box<dyn Entropy>,
}

impl<S: StorageSlot> NoteStore<S> {
    /// Opens a store over `slot` with wall-clock time and thread randomness.
    pub fn open(slot: S) -> Self {
        Self::with_parts(slot, Box::new(SystemClock), Box::new(ThreadEntropy))
    }

    /// Opens a store with caller-supplied time and randomness sources.
    pub fn with_parts(slot: S, clock: Box<dyn Clock>, entropy: Box<dyn Entropy>) -> Self {
        let notes = load_collection(&slot);
        Self {
            notes,
            slot,
            clock,
            entropy,
        }
    }

    /// Returns the full collection, newest first. No side effects.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Creates or replaces one note from `draft`.
    ///
    /// A draft whose id matches an existing note replaces that note in place,
    /// restamping its date and keeping its color unless the draft carries an
    /// override. Any other draft becomes a new note at the front of the
    /// collection with a fresh id. Blank titles default to
    /// [`UNTITLED_TITLE`] on every save.
    pub fn save(&mut self, draft: NoteDraft) -> SaveOutcome {
        if draft.is_blank() {
            return SaveOutcome::Ignored;
        }

        let title = if draft.title.trim().is_empty() {
            UNTITLED_TITLE.to_string()
        } else {
            draft.title
        };
        let date = self.clock.stamp();

        if let Some(position) = draft.id.and_then(|id| self.position_of(id)) {
            let existing = &self.notes[position];
            let id = existing.id;
            let color = draft.color.unwrap_or(existing.color);
            self.notes[position] = Note {
                id,
                title,
                content: draft.content,
                date,
                color,
            };
            self.sync();
            info!("event=note_saved module=store status=ok kind=update id={id}");
            return SaveOutcome::Updated(id);
        }

        let id = self.entropy.note_id();
        let color = draft
            .color
            .unwrap_or_else(|| self.entropy.pick_color());
        self.notes.insert(
            0,
            Note {
                id,
                title,
                content: draft.content,
                date,
                color,
            },
        );
        self.sync();
        info!("event=note_saved module=store status=ok kind=create id={id}");
        SaveOutcome::Created(id)
    }

    /// Removes the note with `id`.
    ///
    /// Returns `false` without writing when no note matches, so repeated
    /// deletes stay observable no-ops.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let Some(position) = self.position_of(id) else {
            return false;
        };
        self.notes.remove(position);
        self.sync();
        info!("event=note_deleted module=store status=ok id={id}");
        true
    }

    /// Consumes the store and returns its slot.
    pub fn into_slot(self) -> S {
        self.slot
    }

    fn position_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn sync(&mut self) {
        let payload = match serde_json::to_string(&self.notes) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=slot_write_skipped module=store status=error reason=serialize err={err}");
                return;
            }
        };
        if let Err(err) = self.slot.store(&payload) {
            warn!("event=slot_write_failed module=store status=error err={err}");
        }
    }
}

fn load_collection<S: StorageSlot>(slot: &S) -> Vec<Note> {
    let payload = match slot.load() {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=slot_read_failed module=store status=error err={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Note>>(&payload) {
        Ok(notes) => {
            info!("event=store_load module=store status=ok count={}", notes.len());
            notes
        }
        Err(err) => {
            warn!("event=slot_parse_failed module=store status=error err={err}");
            Vec::new()
        }
    }
}
