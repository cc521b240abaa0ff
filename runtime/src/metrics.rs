//! Prometheus metrics for the store runtime.
//!
//! Metrics go through the `metrics` facade. Nothing is recorded until a
//! recorder is installed, so libraries and tests can emit freely.
//!
//! # Example
//!
//! ```rust,no_run
//! use todo_engine_runtime::metrics::install_recorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handle = install_recorder()?;
//!
//! // Later, from a `/metrics` handler:
//! let body = handle.render();
//! # Ok(())
//! # }
//! ```

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use thiserror::Error;

/// Counter of actions sent to a store, labelled by `action` and `outcome`.
pub const ACTIONS_TOTAL: &str = "store_actions_total";

/// Histogram of time spent inside `Reducer::reduce`, labelled by `action`.
pub const REDUCE_DURATION_SECONDS: &str = "store_reduce_duration_seconds";

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Install the global Prometheus recorder and return its render handle.
///
/// # Errors
///
/// Returns [`MetricsError::Build`] if the histogram buckets are rejected and
/// [`MetricsError::Install`] if a global recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, MetricsError> {
    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Suffix("duration_seconds".to_string()),
            &[0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.005, 0.01, 0.05],
        )
        .map_err(|e| MetricsError::Build(e.to_string()))?;

    let handle = builder
        .install_recorder()
        .map_err(|e| MetricsError::Install(e.to_string()))?;

    register_metrics();
    tracing::info!("Prometheus recorder installed");

    Ok(handle)
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions sent to a store");
    describe_histogram!(
        REDUCE_DURATION_SECONDS,
        "Time spent applying an action in the reducer"
    );
}

/// Store metrics recorder.
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record one reducer invocation.
    pub fn record_action(action: &'static str, duration: Duration, accepted: bool) {
        let outcome = if accepted { "accepted" } else { "rejected" };
        counter!(ACTIONS_TOTAL, "action" => action, "outcome" => outcome).increment(1);
        histogram!(REDUCE_DURATION_SECONDS, "action" => action).record(duration.as_secs_f64());
    }
}
