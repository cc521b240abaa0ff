//! A single in-memory todo list driven by a reducer, served as htmx fragments.
//!
//! The list is an ordered collection of [`TodoItem`]s addressed by position,
//! plus a [`FilterState`] summary (active/total counts and the current
//! [`Filter`]). Every change goes through [`TodoReducer`] as a [`TodoAction`];
//! [`TodoStore`] owns the state and serializes concurrent callers.
//!
//! The [`server`] module maps HTTP routes onto store operations and renders
//! the results with askama. Mutations that affect the footer return an
//! `HX-Trigger` header so the page refreshes it out of band.
//!
//! # Quick Start
//!
//! ```no_run
//! use todo::{Filter, TodoStore};
//!
//! # async fn example() -> Result<(), todo::TodoError> {
//! let store = TodoStore::new();
//!
//! store.add_item("Buy milk").await?;
//! store.add_item("Walk dog").await?;
//! store.toggle_item(0).await?;
//!
//! let active = store.set_filter(Filter::Active).await?;
//! assert_eq!(active.value.items.len(), 1);
//! assert_eq!(active.value.summary.total_count, 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod reducer;
pub mod server;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::TodoError;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::{TodoStore, Update};
pub use types::{
    EditMode, Filter, FilterState, TodoAction, TodoItem, TodoState, TodoView, FILTER_CHANGED,
    TODOS_CHANGED,
};
