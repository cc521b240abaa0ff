//! Application state shared by all handlers.

use crate::store::TodoStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The one todo list every request operates on
    pub store: Arc<TodoStore>,
    /// Render handle of the installed Prometheus recorder, if any
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create application state around `store`, without metrics.
    #[must_use]
    pub const fn new(store: Arc<TodoStore>) -> Self {
        Self {
            store,
            metrics: None,
        }
    }

    /// Attach the Prometheus render handle served at `GET /metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
