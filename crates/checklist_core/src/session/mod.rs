//! Session lifecycle and surface intents.
//!
//! # Responsibility
//! - Carry process configuration in an explicit application context.
//! - Load records before the surface exists and save them after it is gone.
//! - Map surface intents onto list-model operations.
//!
//! # Invariants
//! - One session owns one record store; adapters only borrow it.
//! - A session never saves while an adapter borrow is alive.

pub mod context;
pub mod intent;
