//! The todo store: one owned todo list behind a serializing [`Store`].
//!
//! Each operation sends exactly one [`TodoAction`] and projects the result
//! under the same lock acquisition, so the returned view is the state that
//! operation produced, never a later one.
//!
//! Concurrent callers are serialized by the store's lock. There is no
//! conflict resolution between them: the last writer wins.

use crate::error::TodoError;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{EditMode, Filter, FilterState, TodoAction, TodoItem, TodoState, TodoView};
use todo_engine_core::Effects;
use todo_engine_runtime::Store;

/// Gauge of items currently in the list.
pub const ITEMS_GAUGE: &str = "todo_items_total";

/// The result of a mutation plus the effects it produced
#[derive(Debug)]
pub struct Update<T> {
    /// What the caller renders
    pub value: T,
    /// Notifications for dependent views
    pub effects: Effects,
}

/// Owned todo list shared by all request handlers
pub struct TodoStore {
    store: Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Creates a store holding an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(TodoState::new())
    }

    /// Creates a store holding `state`
    #[must_use]
    pub fn with_state(state: TodoState) -> Self {
        Self {
            store: Store::new(state, TodoReducer::new(), ()),
        }
    }

    /// Empties the list and resets the filter (index page load)
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` mirrors the other operations.
    pub async fn reset(&self) -> Result<Update<TodoView>, TodoError> {
        self.apply_view(TodoAction::Reset).await
    }

    /// Appends an item and returns the filtered view
    ///
    /// # Errors
    ///
    /// Never fails; labels are accepted as-is, including empty ones.
    pub async fn add_item(&self, label: impl Into<String>) -> Result<Update<TodoView>, TodoError> {
        self.apply_view(TodoAction::AddItem {
            label: label.into(),
        })
        .await
    }

    /// Flips an item's completion flag and returns the filtered view
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::OutOfRange`] if `position` addresses no item.
    pub async fn toggle_item(&self, position: usize) -> Result<Update<TodoView>, TodoError> {
        self.apply_view(TodoAction::ToggleItem { position }).await
    }

    /// Opens or commits an inline edit and returns the edited item
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::OutOfRange`] if `position` addresses no item.
    pub async fn edit_item(
        &self,
        position: usize,
        mode: EditMode,
    ) -> Result<Update<TodoItem>, TodoError> {
        let (item, effects) = self
            .store
            .send_and_read(TodoAction::EditItem { position, mode }, |state| {
                state.items[position].clone()
            })
            .await?;
        Ok(Update {
            value: item,
            effects,
        })
    }

    /// Removes an item, re-indexes the rest and returns the filtered view
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::OutOfRange`] if `position` addresses no item.
    pub async fn delete_item(&self, position: usize) -> Result<Update<TodoView>, TodoError> {
        self.apply_view(TodoAction::DeleteItem { position }).await
    }

    /// Removes every checked item and returns the view under the unchanged filter
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` mirrors the other operations.
    pub async fn clear_completed(&self) -> Result<Update<TodoView>, TodoError> {
        self.apply_view(TodoAction::ClearCompleted).await
    }

    /// Sets the current filter and returns the matching items
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` mirrors the other operations.
    pub async fn set_filter(&self, filter: Filter) -> Result<Update<TodoView>, TodoError> {
        self.apply_view(TodoAction::SetFilter { filter }).await
    }

    /// Current counts and filter
    pub async fn summary(&self) -> FilterState {
        self.store.state(TodoState::summary).await
    }

    /// Current filtered view, without mutating anything
    pub async fn view(&self) -> TodoView {
        self.store.state(TodoState::view).await
    }

    /// Clone of the full state
    pub async fn snapshot(&self) -> TodoState {
        self.store.state(Clone::clone).await
    }

    async fn apply_view(&self, action: TodoAction) -> Result<Update<TodoView>, TodoError> {
        let (view, effects) = self.store.send_and_read(action, TodoState::view).await?;
        record_items(view.summary.total_count);
        Ok(Update {
            value: view,
            effects,
        })
    }
}

#[allow(clippy::cast_precision_loss)] // item counts stay far below 2^52
fn record_items(total: usize) {
    metrics::gauge!(ITEMS_GAUGE).set(total as f64);
}
