//! Headless UI components driven by the project store.
//!
//! # Responsibility
//! - Describe where a component's template is mounted inside its host.
//! - Keep rendered project lists in sync with store snapshots.
//!
//! # Invariants
//! - Components are composed from a `ComponentConfig`, not from a base type.
//! - A list view always redraws from scratch; entries never accumulate.

pub mod component;
pub mod project_list;
