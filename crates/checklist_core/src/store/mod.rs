//! In-memory record store for one session.
//!
//! # Responsibility
//! - Hold the canonical ordered list of records.
//! - Convert the whole list to and from persisted documents.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Invalid positions are reported, never clamped.

pub mod record_store;
