//! Search entry points over the note collection.
//!
//! # Responsibility
//! - Expose the pure substring filter used by list views.
//! - Keep result shaping inside core.

pub mod filter;
