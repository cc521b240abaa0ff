//! Axum web framework integration for the todo state engine.
//!
//! This crate is the imperative shell around a reducer-driven store. It
//! translates HTTP requests into actions and reducer results into
//! partial-update responses for an htmx front end.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON bodies, path params
//! │  - Request parsing (extractors)         │  ← Lenient decoding
//! │  - Fragment responses + HX-Trigger      │  ← Logging, metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - Reducers mutate owned state          │  ← Testable at memory speed
//! │  - Effects are values (notifications)   │  ← No I/O, no side effects
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract** the position ([`PathIndex`]) and body ([`LenientJson`])
//! 3. **Dispatch** an action through the `Store`
//! 4. **Render** the resulting view as an HTML fragment
//! 5. **Signal** notifications with [`Triggered`] so dependent fragments refresh
//!
//! # Example
//!
//! ```ignore
//! use todo_engine_web::{AppError, PathIndex, Triggered};
//!
//! async fn delete(
//!     State(state): State<AppState>,
//!     PathIndex(position): PathIndex,
//! ) -> Result<Triggered<Html<String>>, AppError> {
//!     let update = state.store.delete_item(position).await?;
//!     Ok(Triggered::new(render(&update.value)?, &update.effects))
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::{LenientJson, PathIndex};
pub use response::{Triggered, HX_TRIGGER_HEADER};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
