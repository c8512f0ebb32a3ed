//! Core state logic for the single-screen task list.
//! This crate owns every item invariant; UI layers only forward intents.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::timestamp::format_created_at;
pub use model::todo::{TodoId, TodoIdParseError, TodoItem};
pub use store::clock::{Clock, FixedClock, SystemClock};
pub use store::todo_store::{
    EditingSession, EditorMode, StoreError, StoreOptions, StoreResult, TodoSnapshot, TodoStore,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
