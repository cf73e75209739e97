//! Note store and its injected time/randomness seams.
//!
//! # Responsibility
//! - Own the authoritative note collection and keep the slot in sync.
//! - Keep nondeterminism (ids, colors, timestamps) behind small traits.
//!
//! # Invariants
//! - All mutations run synchronously to completion; there is no concurrent
//!   mutator and no locking.

pub mod note_store;
pub mod sources;
