//! View-facing list adapter over the record store.
//!
//! # Responsibility
//! - Expose records to a display surface through indexed aspect reads.
//! - Apply surface edits and report every change to registered observers.
//!
//! # Invariants
//! - Structural changes are bracketed: an "about to" event before the store
//!   mutates and a matching "done" event after.
//! - Cell edits emit one `DataChanged` scoped to the edited row and aspect.
//! - Invalid rows fail before any event is emitted.

pub mod aspect;
pub mod list_adapter;
pub mod observer;
