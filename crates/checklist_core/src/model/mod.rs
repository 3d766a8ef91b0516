//! To-do record model.
//!
//! # Responsibility
//! - Define the single record shape shown by the checklist surface.
//! - Define the flat document shape used by persistence.
//!
//! # Invariants
//! - A record has no identity beyond its position in the owning store.

pub mod record;
