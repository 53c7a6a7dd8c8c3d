//! Input validation for project submissions.
//!
//! # Responsibility
//! - Provide the constraint checker used before anything reaches the store.
//! - Convert raw form values into a typed, validated draft.
//!
//! # Invariants
//! - The store never re-validates; everything is checked here first.

pub mod form;
pub mod rules;
