use frostnote_core::{
    Clock, FileSlot, MemorySlot, Note, NoteDraft, NoteStore, SlotError, StorageSlot,
};
use std::fs;

struct FixedClock(&'static str);

impl Clock for FixedClock {
    fn stamp(&self) -> String {
        self.0.to_string()
    }
}

#[test]
fn file_slot_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let mut store = NoteStore::open(FileSlot::new(&path));
    store.save(NoteDraft::new("first", "alpha"));
    store.save(NoteDraft::new("second", "beta"));
    let written: Vec<Note> = store.list().to_vec();
    drop(store);

    let reopened = NoteStore::open(FileSlot::new(&path));
    assert_eq!(reopened.list(), written.as_slice());
}

#[test]
fn missing_file_yields_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = NoteStore::open(FileSlot::new(dir.path().join("absent.json")));
    assert!(store.is_empty());
}

#[test]
fn malformed_payload_degrades_to_empty_and_recovers_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(&path, "{ not json at all").unwrap();

    let mut store = NoteStore::open(FileSlot::new(&path));
    assert!(store.is_empty());

    store.save(NoteDraft::new("recovered", "body"));
    drop(store);

    let reopened = NoteStore::open(FileSlot::new(&path));
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.list()[0].title, "recovered");
}

#[test]
fn serialized_collection_round_trips_to_equal_notes() {
    let mut store = NoteStore::with_parts(
        MemorySlot::new(),
        Box::new(FixedClock("Mar 1, 08:15 AM")),
        Box::new(frostnote_core::ThreadEntropy),
    );
    store.save(NoteDraft::new("one", "içerik"));
    store.save(NoteDraft::new("", "untitled body"));
    let original: Vec<Note> = store.list().to_vec();

    let payload = serde_json::to_string(&original).unwrap();
    let parsed: Vec<Note> = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn file_slot_reports_unreadable_payload_as_error() {
    let dir = tempfile::tempdir().unwrap();
    let slot = FileSlot::new(dir.path());

    // Reading a directory path fails with a non-NotFound error.
    match slot.load() {
        Err(SlotError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn file_slot_store_is_a_full_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot.json");
    let mut slot = FileSlot::new(&path);

    slot.store("[1,2,3]").unwrap();
    slot.store("[]").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    assert_eq!(slot.load().unwrap().as_deref(), Some("[]"));
}
