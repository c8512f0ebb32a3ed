//! In-memory task list state.
//!
//! # Responsibility
//! - Hold the ordered item list and transient draft/editing state.
//! - Expose the mutation entry points the presentation layer forwards
//!   user intents into.
//!
//! # Invariants
//! - State lives only for the process lifetime; nothing is persisted.
//! - All mutations run to completion under `&mut self`.

pub mod clock;
pub mod todo_store;
