//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the canonical project record shared by the store and all views.
//!
//! # Invariants
//! - A project is never mutated after creation.
//! - Status is a closed enum, never a bare number or string.

pub mod project;
