//! In-memory project state and change notification.
//!
//! # Responsibility
//! - Hold the single source of truth for submitted projects.
//! - Fan out a full snapshot to every subscriber on each change.
//!
//! # Invariants
//! - The project sequence is append-only.
//! - Subscribers only ever receive copies of the internal sequence.

pub mod project_store;
