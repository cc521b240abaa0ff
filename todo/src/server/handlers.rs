//! HTTP handlers for the todo page.
//!
//! Each handler makes exactly one store call and renders the fragment htmx
//! swaps in. Mutations that change counts or the filter carry their
//! notifications as an `HX-Trigger` header so the footer refreshes itself.

use super::state::AppState;
use super::templates::{render, FooterTemplate, IndexTemplate, TodoItemTemplate, TodoListTemplate};
use crate::error::TodoError;
use crate::store::Update;
use crate::types::{EditMode, Filter, TodoView};
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use todo_engine_web::{
    handlers::metrics_response, AppError, LenientJson, PathIndex, Triggered, WebResult,
};

/// Stylesheet served at `GET /css/output.css`
const STYLESHEET: &str = include_str!("../../static/output.css");

/// JSON body sent by the add and edit forms
#[derive(Debug, Deserialize)]
pub struct TodoBody {
    /// Item text
    pub todo: String,
}

impl From<TodoError> for AppError {
    fn from(error: TodoError) -> Self {
        match error {
            TodoError::OutOfRange { position, .. } => Self::out_of_range(position),
        }
    }
}

fn list_fragment(update: Update<TodoView>) -> WebResult<Triggered<Html<String>>> {
    let html = render(&TodoListTemplate::from(update.value))?;
    Ok(Triggered::new(html, &update.effects))
}

/// `GET /` resets the list and serves the full page.
pub async fn index(State(state): State<AppState>) -> WebResult<Html<String>> {
    let update = state.store.reset().await?;
    render(&IndexTemplate::new(update.value))
}

/// `POST /todos` appends an item.
///
/// An undecodable body adds an item with an empty label.
pub async fn add_todo(
    State(state): State<AppState>,
    LenientJson(body): LenientJson<TodoBody>,
) -> WebResult<Triggered<Html<String>>> {
    let label = body.map(|body| body.todo).unwrap_or_default();
    list_fragment(state.store.add_item(label).await?)
}

/// `DELETE /todos/:position`
pub async fn delete_todo(
    State(state): State<AppState>,
    PathIndex(position): PathIndex,
) -> WebResult<Triggered<Html<String>>> {
    list_fragment(state.store.delete_item(position).await?)
}

/// `PUT /todos/toggle/:position`
pub async fn toggle_todo(
    State(state): State<AppState>,
    PathIndex(position): PathIndex,
) -> WebResult<Triggered<Html<String>>> {
    list_fragment(state.store.toggle_item(position).await?)
}

/// `GET /todos/edit/:position` opens the inline edit form.
pub async fn begin_edit(
    State(state): State<AppState>,
    PathIndex(position): PathIndex,
) -> WebResult<Html<String>> {
    let update = state.store.edit_item(position, EditMode::Begin).await?;
    render(&TodoItemTemplate { item: update.value })
}

/// `PUT /todos/edit/:position` commits the edit.
///
/// An undecodable body closes the form and keeps the old label.
pub async fn commit_edit(
    State(state): State<AppState>,
    PathIndex(position): PathIndex,
    LenientJson(body): LenientJson<TodoBody>,
) -> WebResult<Html<String>> {
    let mode = EditMode::Commit {
        label: body.map(|body| body.todo),
    };
    let update = state.store.edit_item(position, mode).await?;
    render(&TodoItemTemplate { item: update.value })
}

/// `GET /footer`
pub async fn footer(State(state): State<AppState>) -> WebResult<Html<String>> {
    let summary = state.store.summary().await;
    render(&FooterTemplate::from(summary))
}

/// `POST /footer/:filter` switches the filter. Unknown names select `all`.
pub async fn set_filter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> WebResult<Triggered<Html<String>>> {
    list_fragment(state.store.set_filter(Filter::from_name(&name)).await?)
}

/// `DELETE /footer` removes every completed item.
pub async fn clear_completed(
    State(state): State<AppState>,
) -> WebResult<Triggered<Html<String>>> {
    list_fragment(state.store.clear_completed().await?)
}

/// `GET /css/output.css`
#[allow(clippy::unused_async)]
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

/// `GET /metrics`
#[allow(clippy::unused_async)]
pub async fn metrics(State(state): State<AppState>) -> Response {
    metrics_response(state.metrics.as_ref())
}
