//! Task list store and editing state machine.
//!
//! # Responsibility
//! - Own the ordered item list, the add-input draft and the edit session.
//! - Apply user intents (add, delete, toggle, edit) as total, synchronous
//!   state transitions.
//!
//! # Invariants
//! - Item ids are pairwise distinct at all times.
//! - Insertion order is display order; no operation reorders items.
//! - At most one edit session exists; it always references a live item.
//! - Unknown ids on list mutations are no-ops reported via `None`.
//! - Log lines carry ids and counts only, never item text.

use crate::model::timestamp::format_created_at;
use crate::model::todo::{TodoId, TodoItem};
use crate::store::clock::{Clock, SystemClock};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store operations that can refuse an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Target item does not exist (never created or already deleted).
    TodoNotFound(TodoId),
    /// Text is empty after trim and the store rejects blank text.
    BlankText,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TodoNotFound(id) => write!(f, "todo not found: {id}"),
            Self::BlankText => write!(f, "todo text must not be blank"),
        }
    }
}

impl Error for StoreError {}

/// Store behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Refuse whitespace-only text on add and commit. Off by default.
    pub reject_blank_text: bool,
}

/// Open edit modal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditingSession {
    /// Item the modal was opened for.
    pub item_id: TodoId,
    /// Working text, seeded from the item and replaced by `update_draft`.
    pub draft: String,
}

/// Borrowed view of the input state for exhaustive matching by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode<'a> {
    /// No edit session and an empty add draft.
    Idle,
    /// No edit session; the add input holds text.
    Adding(&'a str),
    /// The edit modal is open.
    Editing { item_id: TodoId, draft: &'a str },
}

/// Render-ready copy of the observable store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoSnapshot {
    /// Items in display order.
    pub items: Vec<TodoItem>,
    /// Draft of the input that currently has focus.
    pub draft: String,
    /// Item being edited, if the modal is open.
    pub editing_id: Option<TodoId>,
    pub is_edit_view_open: bool,
}

/// In-memory task list with add draft and edit session.
pub struct TodoStore<C: Clock = SystemClock> {
    items: Vec<TodoItem>,
    add_draft: String,
    session: Option<EditingSession>,
    options: StoreOptions,
    clock: C,
}

impl TodoStore<SystemClock> {
    /// Creates an empty store stamped by the system local clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock, StoreOptions::default())
    }

    /// Creates an empty store with explicit options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self::with_clock(SystemClock, options)
    }
}

impl Default for TodoStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TodoStore<C> {
    /// Creates an empty store using the provided clock.
    pub fn with_clock(clock: C, options: StoreOptions) -> Self {
        Self {
            items: Vec::new(),
            add_draft: String::new(),
            session: None,
            options,
            clock,
        }
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    pub fn set_options(&mut self, options: StoreOptions) {
        self.options = options;
    }

    /// Appends a new open item with `raw_text` as given and clears the add
    /// draft.
    ///
    /// # Contract
    /// - Text is not trimmed.
    /// - The new id differs from every live id.
    /// - Existing items keep their values and relative order.
    ///
    /// # Errors
    /// - `BlankText` when blank text is rejected; state is unchanged.
    pub fn add(&mut self, raw_text: impl Into<String>) -> StoreResult<TodoId> {
        let text = raw_text.into();
        self.check_text(text.as_str())?;

        let id = self.fresh_id();
        let created_at = format_created_at(&self.clock.now());
        self.items.push(TodoItem::new(id, text, created_at));
        self.add_draft.clear();

        info!(
            "event=todo_add module=store status=ok todo_id={} count={}",
            id,
            self.items.len()
        );
        Ok(id)
    }

    /// Adds an item from the current add draft (submit key or "+" button).
    pub fn submit_draft(&mut self) -> StoreResult<TodoId> {
        let text = self.add_draft.clone();
        self.add(text)
    }

    /// Removes the item with `id` and returns it.
    ///
    /// Returns `None` and leaves the list unchanged for unknown ids. Closes
    /// the edit session when it referenced the removed item.
    pub fn delete(&mut self, id: TodoId) -> Option<TodoItem> {
        let Some(index) = self.position(id) else {
            debug!("event=todo_delete module=store status=noop todo_id={id}");
            return None;
        };
        let removed = self.items.remove(index);

        if self
            .session
            .as_ref()
            .is_some_and(|session| session.item_id == id)
        {
            self.session = None;
            info!("event=edit_close module=store status=ok reason=item_deleted todo_id={id}");
        }

        info!(
            "event=todo_delete module=store status=ok todo_id={} count={}",
            id,
            self.items.len()
        );
        Some(removed)
    }

    /// Flips `completed` on the item with `id` and returns the new value.
    ///
    /// Returns `None` for unknown ids.
    pub fn toggle_complete(&mut self, id: TodoId) -> Option<bool> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=todo_toggle module=store status=noop todo_id={id}");
            return None;
        };
        let completed = item.toggle_completed();
        info!("event=todo_toggle module=store status=ok todo_id={id} completed={completed}");
        Some(completed)
    }

    /// Replaces the text of the item with `id` directly, outside the modal.
    ///
    /// Returns `Ok(false)` for unknown ids.
    ///
    /// # Errors
    /// - `BlankText` when blank text is rejected.
    pub fn edit_text(&mut self, id: TodoId, text: impl Into<String>) -> StoreResult<bool> {
        let text = text.into();
        self.check_text(text.as_str())?;

        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text;
                info!("event=todo_edit module=store status=ok todo_id={id}");
                Ok(true)
            }
            None => {
                debug!("event=todo_edit module=store status=noop todo_id={id}");
                Ok(false)
            }
        }
    }

    /// Opens the edit modal for `id` and seeds its draft with the item text.
    ///
    /// An already open session is replaced by the new target.
    ///
    /// # Errors
    /// - `TodoNotFound` for unknown ids; the current session is kept.
    pub fn begin_edit(&mut self, id: TodoId) -> StoreResult<()> {
        let Some(item) = self.get(id) else {
            warn!("event=edit_open module=store status=error reason=not_found todo_id={id}");
            return Err(StoreError::TodoNotFound(id));
        };
        let draft = item.text.clone();

        if let Some(previous) = self.session.as_ref() {
            debug!(
                "event=edit_switch module=store status=ok from={} to={}",
                previous.item_id, id
            );
        }
        self.session = Some(EditingSession { item_id: id, draft });
        info!("event=edit_open module=store status=ok todo_id={id}");
        Ok(())
    }

    /// Replaces the draft of the focused input.
    ///
    /// Targets the edit draft while the modal is open, otherwise the add
    /// draft.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.session.as_mut() {
            Some(session) => session.draft = text,
            None => self.add_draft = text,
        }
    }

    /// Writes the edit draft into the referenced item and closes the modal.
    ///
    /// Returns `Ok(None)` when no session is open, `Ok(Some(id))` when the
    /// item was updated. Only `text` changes.
    ///
    /// # Errors
    /// - `BlankText` when blank text is rejected; the session stays open.
    /// - `TodoNotFound` when the item vanished; the session is closed.
    pub fn commit_edit(&mut self) -> StoreResult<Option<TodoId>> {
        let Some(session) = self.session.take() else {
            debug!("event=edit_commit module=store status=noop reason=no_session");
            return Ok(None);
        };
        if let Err(err) = self.check_text(session.draft.as_str()) {
            self.session = Some(session);
            return Err(err);
        }

        let id = session.item_id;
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = session.draft;
                info!("event=edit_commit module=store status=ok todo_id={id}");
                Ok(Some(id))
            }
            None => {
                warn!("event=edit_commit module=store status=error reason=stale todo_id={id}");
                Err(StoreError::TodoNotFound(id))
            }
        }
    }

    /// Closes the edit modal without touching any item.
    pub fn cancel_edit(&mut self) {
        match self.session.take() {
            Some(session) => info!(
                "event=edit_cancel module=store status=ok todo_id={}",
                session.item_id
            ),
            None => debug!("event=edit_cancel module=store status=noop reason=no_session"),
        }
    }

    /// Items in display order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Draft of the focused input: edit draft while editing, else add draft.
    pub fn draft(&self) -> &str {
        match self.session.as_ref() {
            Some(session) => session.draft.as_str(),
            None => self.add_draft.as_str(),
        }
    }

    pub fn editing(&self) -> Option<&EditingSession> {
        self.session.as_ref()
    }

    pub fn is_edit_view_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn mode(&self) -> EditorMode<'_> {
        match self.session.as_ref() {
            Some(session) => EditorMode::Editing {
                item_id: session.item_id,
                draft: session.draft.as_str(),
            },
            None if self.add_draft.is_empty() => EditorMode::Idle,
            None => EditorMode::Adding(self.add_draft.as_str()),
        }
    }

    /// Copies the observable state for rendering.
    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot {
            items: self.items.clone(),
            draft: self.draft().to_string(),
            editing_id: self.session.as_ref().map(|session| session.item_id),
            is_edit_view_open: self.is_edit_view_open(),
        }
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn fresh_id(&self) -> TodoId {
        loop {
            let id = TodoId::generate();
            if self.position(id).is_none() {
                return id;
            }
        }
    }

    fn check_text(&self, text: &str) -> StoreResult<()> {
        if self.options.reject_blank_text && text.trim().is_empty() {
            warn!("event=text_check module=store status=error reason=blank");
            return Err(StoreError::BlankText);
        }
        Ok(())
    }
}
