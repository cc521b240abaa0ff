//! Askama templates for the page and its htmx fragments.
//!
//! Templates live under `todo/templates/`. Fragments are rendered on their
//! own by the mutation handlers and embedded into the index page on load.

use crate::types::{Filter, FilterState, TodoItem, TodoView};
use askama::Template;
use axum::response::Html;
use todo_engine_web::AppError;

/// Full page served on `GET /`
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Item list fragment
    pub list: TodoListTemplate,
    /// Footer fragment
    pub footer: FooterTemplate,
}

impl IndexTemplate {
    /// Page for `view`
    #[must_use]
    pub fn new(view: TodoView) -> Self {
        Self {
            footer: FooterTemplate::from(view.summary),
            list: TodoListTemplate { items: view.items },
        }
    }
}

/// The `<ul id="todo-list">` fragment
#[derive(Template)]
#[template(path = "todo-list.html")]
pub struct TodoListTemplate {
    /// Items to show, already filtered
    pub items: Vec<TodoItem>,
}

impl From<TodoView> for TodoListTemplate {
    fn from(view: TodoView) -> Self {
        Self { items: view.items }
    }
}

/// A single `<li>`, either the read view or the inline edit form
#[derive(Template)]
#[template(path = "todo-item.html")]
pub struct TodoItemTemplate {
    /// Item to render
    pub item: TodoItem,
}

/// One filter link in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLink {
    /// URL segment
    pub name: &'static str,
    /// Link text
    pub label: &'static str,
    /// Whether this is the current filter
    pub selected: bool,
}

/// Counts, filter links and the clear button
#[derive(Template)]
#[template(path = "footer.html")]
pub struct FooterTemplate {
    /// Unchecked items
    pub active_count: usize,
    /// All items
    pub total_count: usize,
    /// Checked items
    pub completed_count: usize,
    /// Filter links in display order
    pub links: Vec<FilterLink>,
}

impl From<FilterState> for FooterTemplate {
    fn from(summary: FilterState) -> Self {
        Self {
            active_count: summary.active_count,
            total_count: summary.total_count,
            completed_count: summary.completed_count(),
            links: Filter::VARIANTS
                .iter()
                .map(|&filter| FilterLink {
                    name: filter.as_str(),
                    label: filter.label(),
                    selected: filter == summary.current_filter,
                })
                .collect(),
        }
    }
}

/// Render `template` into an HTML response body.
///
/// # Errors
///
/// Returns a 500 [`AppError`] carrying the askama error as its source.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|error| {
        AppError::internal("Failed to render template").with_source(anyhow::Error::new(error))
    })
}
