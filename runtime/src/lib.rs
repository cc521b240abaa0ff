//! # Todo Engine Runtime
//!
//! Runtime for the todo state engine.
//!
//! This crate provides the [`Store`] that owns a piece of state and funnels
//! every mutation through a [`Reducer`].
//!
//! ## Concurrency
//!
//! State lives behind a single `tokio::sync::RwLock`. Every `send` takes the
//! write lock for the duration of one reducer call, so concurrent callers are
//! serialized: each action runs to completion before the next one observes the
//! state. There are no transactions spanning several actions and no conflict
//! resolution: the last writer wins.
//!
//! ## Example
//!
//! ```ignore
//! use todo_engine_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! let effects = store.send(Action::DoSomething).await?;
//!
//! // Send an action and project the resulting state under the same lock
//! let (len, effects) = store.send_and_read(Action::DoSomething, |s| s.items.len()).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use std::time::Instant;
use todo_engine_core::{action::Action, reducer::Reducer, Effects};
use tokio::sync::RwLock;

/// Prometheus metrics for observability
pub mod metrics;

use metrics::StoreMetrics;

/// The Store - runtime that owns state and applies actions through a reducer
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    A: Action,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
        }
    }

    /// Send an action through the reducer
    ///
    /// # Errors
    ///
    /// Returns the reducer's error when the action is rejected. The state is
    /// unchanged in that case.
    pub async fn send(&self, action: A) -> Result<Effects, R::Error> {
        self.send_and_read(action, |_| ())
            .await
            .map(|((), effects)| effects)
    }

    /// Send an action and project the resulting state before releasing the lock
    ///
    /// Use this when a caller needs the state *its own* action produced:
    /// no other action can run between the reducer call and `read`.
    ///
    /// # Errors
    ///
    /// Returns the reducer's error when the action is rejected. `read` is not
    /// called in that case.
    #[tracing::instrument(skip_all, name = "store_send", fields(action = action.name()))]
    pub async fn send_and_read<F, T>(&self, action: A, read: F) -> Result<(T, Effects), R::Error>
    where
        F: FnOnce(&S) -> T,
    {
        let name = action.name();
        let mut state = self.state.write().await;

        let started = Instant::now();
        let result = self.reducer.reduce(&mut state, action, &self.environment);
        StoreMetrics::record_action(name, started.elapsed(), result.is_ok());

        match result {
            Ok(effects) => {
                tracing::debug!(effects = effects.len(), "Action applied");
                Ok((read(&state), effects))
            }
            Err(error) => {
                tracing::warn!(%error, "Action rejected");
                Err(error)
            }
        }
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let count = store.state(|s| s.items.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }
}
