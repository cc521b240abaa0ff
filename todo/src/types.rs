//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of items plus a summary of the
//! collection (active/total counts and the filter currently applied to the
//! view). An item's position in the collection is also its external
//! identifier, so every structural change re-indexes the items behind it.

use serde::{Deserialize, Serialize};
use std::fmt;
use todo_engine_core::{action::Action, effect::Notification};

/// Emitted whenever the active or total count changes.
pub const TODOS_CHANGED: Notification = Notification::new("todos-changed");

/// Emitted whenever the current filter is set.
pub const FILTER_CHANGED: Notification = Notification::new("filter-changed");

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    /// Zero-based slot in the collection
    pub position: usize,
    /// Free-text content
    pub label: String,
    /// Whether the item is completed
    pub checked: bool,
    /// Whether an inline edit form is open for this item
    pub editing: bool,
}

impl TodoItem {
    /// Creates a new, unchecked item at `position`
    #[must_use]
    pub const fn new(position: usize, label: String) -> Self {
        Self {
            position,
            label,
            checked: false,
            editing: false,
        }
    }

    /// CSS class for the item row: `"completed"` iff checked
    #[must_use]
    pub const fn style_class(&self) -> &'static str {
        if self.checked { "completed" } else { "" }
    }

    /// Element id of the item row
    #[must_use]
    pub fn dom_id(&self) -> String {
        self.position.to_string()
    }

    /// Element id of the item's label
    #[must_use]
    pub fn label_id(&self) -> String {
        format!("label_{}", self.position)
    }

    /// Form name of the item's checkbox
    #[must_use]
    pub fn input_name(&self) -> String {
        format!("checkbox_{}", self.position)
    }
}

/// Which items a view shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Unchecked items
    Active,
    /// Checked items
    Completed,
}

impl Filter {
    /// All filters, in display order
    pub const VARIANTS: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Parses a filter name case-insensitively.
    ///
    /// Empty or unrecognized names fall back to [`Filter::All`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "all" => Self::All,
            "active" => Self::Active,
            "completed" => Self::Completed,
            other => {
                tracing::debug!(filter = %other, "Unknown filter, using all");
                Self::All
            }
        }
    }

    /// Lowercase name, as used in URLs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Whether `item` is visible under this filter
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.checked,
            Self::Completed => item.checked,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts over the whole (unfiltered) collection plus the current filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Number of unchecked items
    pub active_count: usize,
    /// Number of items
    pub total_count: usize,
    /// Filter applied to views
    pub current_filter: Filter,
}

impl FilterState {
    /// Number of checked items
    #[must_use]
    pub const fn completed_count(&self) -> usize {
        self.total_count - self.active_count
    }
}

/// The filtered items together with the summary they were computed from
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoView {
    /// Items matching the current filter, in collection order
    pub items: Vec<TodoItem>,
    /// Counts over the whole collection
    pub summary: FilterState,
}

/// State of the todo list
///
/// Fields are only mutated by the reducer, which keeps positions dense and
/// the counts in step with the items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    pub(crate) items: Vec<TodoItem>,
    pub(crate) summary: FilterState,
}

impl TodoState {
    /// Creates a new empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from arbitrary items, re-indexing them and
    /// recomputing the counts.
    #[must_use]
    pub fn from_items(items: Vec<TodoItem>, current_filter: Filter) -> Self {
        let mut state = Self {
            items,
            summary: FilterState {
                current_filter,
                ..FilterState::default()
            },
        };
        for (position, item) in state.items.iter_mut().enumerate() {
            item.position = position;
        }
        state.summary.total_count = state.items.len();
        state.summary.active_count = state.items.iter().filter(|item| !item.checked).count();
        state
    }

    /// All items in collection order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Counts and current filter
    #[must_use]
    pub const fn summary(&self) -> FilterState {
        self.summary
    }

    /// Returns the item at `position`
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&TodoItem> {
        self.items.get(position)
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items matching the current filter, cloned into a view
    #[must_use]
    pub fn view(&self) -> TodoView {
        let filter = self.summary.current_filter;
        TodoView {
            items: self
                .items
                .iter()
                .filter(|item| filter.matches(item))
                .cloned()
                .collect(),
            summary: self.summary,
        }
    }

    /// Removes every item matching `predicate`, then re-indexes the rest.
    ///
    /// Returns the removed items. Counts are left to the caller.
    pub(crate) fn remove_where<P>(&mut self, mut predicate: P) -> Vec<TodoItem>
    where
        P: FnMut(&TodoItem) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.items).into_iter().partition(|item| predicate(item));
        self.items = kept;
        self.reindex();
        removed
    }

    /// Reassigns dense positions and closes any open edit form.
    pub(crate) fn reindex(&mut self) {
        for (position, item) in self.items.iter_mut().enumerate() {
            item.position = position;
            item.editing = false;
        }
    }
}

/// How an edit request treats the target item
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditMode {
    /// Open the inline edit form
    Begin,
    /// Close the edit form, replacing the label when one was decoded
    Commit {
        /// New label, or `None` to keep the current one
        label: Option<String>,
    },
}

/// Actions accepted by the todo reducer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Replace the collection with an empty one (index page load)
    Reset,

    /// Append a new item
    AddItem {
        /// Item text, accepted as-is
        label: String,
    },

    /// Flip an item's completion flag
    ToggleItem {
        /// Item to toggle
        position: usize,
    },

    /// Open or commit an inline edit
    EditItem {
        /// Item to edit
        position: usize,
        /// Begin or commit
        mode: EditMode,
    },

    /// Remove an item and re-index the rest
    DeleteItem {
        /// Item to remove
        position: usize,
    },

    /// Remove every checked item
    ClearCompleted,

    /// Change which items views show
    SetFilter {
        /// New filter
        filter: Filter,
    },
}

impl Action for TodoAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::AddItem { .. } => "add_item",
            Self::ToggleItem { .. } => "toggle_item",
            Self::EditItem { .. } => "edit_item",
            Self::DeleteItem { .. } => "delete_item",
            Self::ClearCompleted => "clear_completed",
            Self::SetFilter { .. } => "set_filter",
        }
    }
}
