//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task list store to Dart via FRB as sync calls.
//! - Own the single store instance for the process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Ids cross the boundary as UUID strings.
//! - Each call runs one store operation to completion under the store lock.

use std::sync::{Mutex, MutexGuard, OnceLock};
use todo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    StoreOptions, TodoId, TodoItem, TodoStore,
};

static STORE: OnceLock<Mutex<TodoStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One list row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemView {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

/// Full render state for the list screen and edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoSnapshotView {
    /// Items in display order.
    pub items: Vec<TodoItemView>,
    /// Text for whichever input is focused.
    pub draft: String,
    pub editing_id: Option<String>,
    pub is_edit_view_open: bool,
}

/// Generic action response envelope for store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// Whether the intent was applied.
    pub ok: bool,
    /// Affected item ID, when one exists.
    pub todo_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>, todo_id: Option<TodoId>) -> Self {
        Self {
            ok: true,
            todo_id: todo_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            todo_id: None,
            message: message.into(),
        }
    }
}

/// Switches blank-text rejection for add and save.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_configure(reject_blank_text: bool) {
    with_store(|store| store.set_options(StoreOptions { reject_blank_text }));
}

/// Adds an item with `text` as given.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String) -> TodoActionResponse {
    match with_store(|store| store.add(text)) {
        Ok(id) => TodoActionResponse::success("Todo added.", Some(id)),
        Err(err) => TodoActionResponse::failure(format!("todo_add failed: {err}")),
    }
}

/// Adds an item from the add-input draft.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_submit_draft() -> TodoActionResponse {
    match with_store(|store| store.submit_draft()) {
        Ok(id) => TodoActionResponse::success("Todo added.", Some(id)),
        Err(err) => TodoActionResponse::failure(format!("todo_submit_draft failed: {err}")),
    }
}

/// Deletes one item. Unknown ids succeed without changes.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> TodoActionResponse {
    let id = match parse_id(id.as_str()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match with_store(|store| store.delete(id)) {
        Some(_) => TodoActionResponse::success("Todo deleted.", Some(id)),
        None => TodoActionResponse::success("No matching todo.", None),
    }
}

/// Toggles completion of one item. Unknown ids succeed without changes.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle_complete(id: String) -> TodoActionResponse {
    let id = match parse_id(id.as_str()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match with_store(|store| store.toggle_complete(id)) {
        Some(true) => TodoActionResponse::success("Todo completed.", Some(id)),
        Some(false) => TodoActionResponse::success("Todo reopened.", Some(id)),
        None => TodoActionResponse::success("No matching todo.", None),
    }
}

/// Opens the edit modal for one item.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_begin_edit(id: String) -> TodoActionResponse {
    let id = match parse_id(id.as_str()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match with_store(|store| store.begin_edit(id)) {
        Ok(()) => TodoActionResponse::success("Editing.", Some(id)),
        Err(err) => TodoActionResponse::failure(format!("todo_begin_edit failed: {err}")),
    }
}

/// Replaces the focused input draft.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_update_draft(text: String) {
    with_store(|store| store.update_draft(text));
}

/// Saves the edit draft and closes the modal.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_commit_edit() -> TodoActionResponse {
    match with_store(|store| store.commit_edit()) {
        Ok(Some(id)) => TodoActionResponse::success("Todo updated.", Some(id)),
        Ok(None) => TodoActionResponse::success("Nothing to save.", None),
        Err(err) => TodoActionResponse::failure(format!("todo_commit_edit failed: {err}")),
    }
}

/// Closes the edit modal without saving.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_cancel_edit() {
    with_store(|store| store.cancel_edit());
}

/// Returns the current render state.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_snapshot() -> TodoSnapshotView {
    let snapshot = with_store(|store| store.snapshot());
    TodoSnapshotView {
        items: snapshot.items.into_iter().map(to_item_view).collect(),
        draft: snapshot.draft,
        editing_id: snapshot.editing_id.map(|id| id.to_string()),
        is_edit_view_open: snapshot.is_edit_view_open,
    }
}

fn with_store<T>(f: impl FnOnce(&mut TodoStore) -> T) -> T {
    let mutex = STORE.get_or_init(|| Mutex::new(TodoStore::new()));
    let mut guard = lock_store(mutex);
    f(&mut guard)
}

// Store operations never panic mid-mutation, so a poisoned lock still guards
// consistent state.
fn lock_store(mutex: &Mutex<TodoStore>) -> MutexGuard<'_, TodoStore> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("event=store_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn parse_id(raw: &str) -> Result<TodoId, TodoActionResponse> {
    raw.parse::<TodoId>()
        .map_err(|err| TodoActionResponse::failure(err.to_string()))
}

fn to_item_view(item: TodoItem) -> TodoItemView {
    TodoItemView {
        id: item.id.to_string(),
        text: item.text,
        completed: item.completed,
        created_at: item.created_at,
    }
}
