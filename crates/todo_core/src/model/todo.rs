//! Todo item domain model.
//!
//! # Responsibility
//! - Define the record rendered as one row of the task list.
//! - Keep identity and creation stamp immutable after construction.
//!
//! # Invariants
//! - `id` is stable and never reused for another item in the same store.
//! - `created_at` is formatted once at creation and never recomputed.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for one todo item.
///
/// Wraps a v4 UUID so ids cannot be confused with other string inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for string ids that are not valid UUIDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoIdParseError(String);

impl Display for TodoIdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid todo id: `{}`", self.0)
    }
}

impl Error for TodoIdParseError {}

impl FromStr for TodoId {
    type Err = TodoIdParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| TodoIdParseError(value.to_string()))
    }
}

/// One entry in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Sole lookup key for every mutation.
    pub id: TodoId,
    /// Display text. Not validated here.
    pub text: String,
    /// Toggled only by the complete operation.
    pub completed: bool,
    /// Display-ready creation stamp, e.g. `April 5th 2024, 3:04:05 pm`.
    pub created_at: String,
}

impl TodoItem {
    /// Creates an open item with the given identity and creation stamp.
    pub fn new(id: TodoId, text: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: created_at.into(),
        }
    }

    /// Flips completion and returns the new value.
    pub fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
