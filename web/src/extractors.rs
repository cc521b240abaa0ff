//! Custom Axum extractors.
//!
//! - `PathIndex`: a zero-based collection position taken from the last path
//!   parameter, rejected as out of range when it is not a plain decimal number
//! - `LenientJson`: a JSON body that degrades to `None` instead of rejecting
//!   the request when it cannot be decoded
//!
//! # Examples
//!
//! ```ignore
//! use todo_engine_web::extractors::{LenientJson, PathIndex};
//!
//! async fn commit_edit(
//!     State(state): State<AppState>,
//!     PathIndex(position): PathIndex,
//!     LenientJson(body): LenientJson<TodoBody>,
//! ) -> Result<Html<String>, AppError> {
//!     let label = body.map(|b| b.todo);
//!     // ...
//! }
//! ```

use crate::error::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Zero-based position of an item, taken from the route's path parameter.
///
/// Only non-empty strings of ASCII digits that fit in `usize` are accepted.
/// Anything else (`-1`, `+2`, `abc`, overflow) is rejected with
/// [`AppError::out_of_range`] before any handler logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathIndex(pub usize);

impl PathIndex {
    /// Parse a raw path segment.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(Self)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PathIndex
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::out_of_range(format!("<{}>", rejection.body_text())))?;

        Self::parse(&raw).ok_or_else(|| {
            tracing::debug!(raw = %raw, "Malformed position in path");
            AppError::out_of_range(raw)
        })
    }
}

/// JSON request body that never rejects.
///
/// The body is decoded regardless of `Content-Type`. A body that cannot be
/// read or decoded is logged at `warn` and yields `LenientJson(None)`, so the
/// handler can carry on with "no payload".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LenientJson<T>(pub Option<T>);

#[async_trait]
impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Failed to read request body");
                return Ok(Self(None));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(Some(value))),
            Err(error) => {
                tracing::warn!(%error, "Failed to decode JSON body");
                Ok(Self(None))
            }
        }
    }
}
