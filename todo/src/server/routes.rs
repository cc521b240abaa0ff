//! Router configuration for the todo page.

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use todo_engine_web::handlers::health_check;
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Every mutating route answers with the HTML fragment htmx swaps in.
/// Positions in paths are zero-based and must be plain decimal numbers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Page and item list
        .route("/", get(handlers::index))
        .route("/todos", post(handlers::add_todo))
        .route("/todos/:position", delete(handlers::delete_todo))
        .route("/todos/toggle/:position", put(handlers::toggle_todo))
        .route(
            "/todos/edit/:position",
            get(handlers::begin_edit).put(handlers::commit_edit),
        )
        // Footer: counts, filters, clear completed
        .route(
            "/footer",
            get(handlers::footer).delete(handlers::clear_completed),
        )
        .route("/footer/:filter", post(handlers::set_filter))
        // Assets and operations
        .route("/css/output.css", get(handlers::stylesheet))
        .route("/health", get(health_check))
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
