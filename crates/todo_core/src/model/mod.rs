//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the item record rendered by the list view.
//! - Own the fixed display format for creation stamps.
//!
//! # Invariants
//! - Every item is identified by a stable `TodoId`.
//! - Deletion is a hard remove; there are no tombstones.

pub mod timestamp;
pub mod todo;
