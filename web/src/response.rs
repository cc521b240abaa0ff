//! Partial-update responses.
//!
//! A reducer reports "this derived view is stale" as
//! [`Effect::Notify`](todo_engine_core::effect::Effect::Notify). [`Triggered`]
//! forwards those notifications to the browser as an `HX-Trigger` header so
//! htmx can re-fetch the dependent fragments (for example a footer showing
//! item counts) independently of the fragment being swapped.

use axum::{
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use todo_engine_core::effect::{notifications, Effect, Notification};

/// Header htmx reads client-side events from.
pub const HX_TRIGGER_HEADER: HeaderName = HeaderName::from_static("hx-trigger");

/// A response paired with the notifications produced while computing it.
#[derive(Debug)]
pub struct Triggered<T> {
    inner: T,
    notifications: Vec<Notification>,
}

impl<T> Triggered<T> {
    /// Wrap `inner`, collecting the distinct notifications in `effects`.
    #[must_use]
    pub fn new(inner: T, effects: &[Effect]) -> Self {
        Self {
            inner,
            notifications: notifications(effects),
        }
    }

    /// Notifications that will be sent with the response.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Value of the `HX-Trigger` header, if any notification is pending.
    #[must_use]
    pub fn header_value(&self) -> Option<String> {
        if self.notifications.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.notifications.iter().map(|n| n.name()).collect();
        Some(names.join(", "))
    }
}

impl<T> IntoResponse for Triggered<T>
where
    T: IntoResponse,
{
    fn into_response(self) -> Response {
        let header = self.header_value();
        let mut response = self.inner.into_response();

        if let Some(value) = header {
            match HeaderValue::try_from(value) {
                Ok(value) => {
                    response.headers_mut().insert(HX_TRIGGER_HEADER, value);
                }
                Err(error) => {
                    tracing::warn!(%error, "Notification names are not a valid header value");
                }
            }
        }

        response
    }
}
