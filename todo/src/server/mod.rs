//! HTTP server for the todo list.
//!
//! Routes translate requests into [`TodoStore`](crate::store::TodoStore)
//! calls and render the results as HTML fragments for htmx to swap in.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

pub use routes::build_router;
pub use state::AppState;
