//! # Todo Engine Core
//!
//! Core traits and types shared by the todo state engine and its adapters.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature (plain data, `Clone`)
//! - **Action**: Every discrete input a reducer accepts
//! - **Reducer**: `(State, Action, Environment) → Result<Effects, Error>`
//! - **Effect**: Descriptions of out-of-band work for the shell (never executed here)
//! - **Notification**: A named "state changed" signal the shell forwards to clients
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Rejected actions leave state untouched
//! - Effects are values, interpreted by the adapter layer
//!
//! ## Example
//!
//! ```
//! use todo_engine_core::{
//!     action::Action,
//!     effect::{Effect, Notification},
//!     reducer::Reducer,
//!     Effects, SmallVec,
//! };
//!
//! const CHANGED: Notification = Notification::new("count-changed");
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn name(&self) -> &'static str {
//!         "increment"
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = u32;
//!     type Action = CounterAction;
//!     type Environment = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut u32,
//!         _action: CounterAction,
//!         _env: &(),
//!     ) -> Result<Effects, Self::Error> {
//!         *state += 1;
//!         let mut effects = SmallVec::new();
//!         effects.push(Effect::Notify(CHANGED));
//!         Ok(effects)
//!     }
//! }
//!
//! let mut count = 0;
//! let effects = CounterReducer.reduce(&mut count, CounterAction::Increment, &()).unwrap();
//! assert_eq!(count, 1);
//! assert_eq!(effects.len(), 1);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Effects returned by a single reducer call.
///
/// Most actions produce zero or one effect, so four inline slots avoid
/// allocating in the common case.
pub type Effects = SmallVec<[effect::Effect; 4]>;

/// Action module - Unified input type for reducers
pub mod action {
    use std::fmt::Debug;

    /// An input accepted by a reducer.
    ///
    /// The name is used as a stable, low-cardinality label for tracing spans
    /// and metrics, so it must not embed payload data.
    pub trait Action: Clone + Debug {
        /// Short `snake_case` identifier of the action variant.
        fn name(&self) -> &'static str;
    }
}

/// Reducer module - The core trait for business logic
pub mod reducer {
    use super::Effects;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: Why an action was rejected
    ///
    /// # Contract
    ///
    /// When `reduce` returns `Err`, `state` must be exactly as it was before
    /// the call. Validate first, then mutate.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Rejection reason for actions that cannot be applied
        type Error: std::error::Error + Send + Sync + 'static;

        /// Reduce an action into state changes and effects
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action is invalid for the current
        /// state. The state is left unchanged in that case.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<Effects, Self::Error>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe what the shell should do after a reducer ran. They are
/// values, not execution.
pub mod effect {
    use std::fmt;

    /// A named signal telling clients that some derived view is stale.
    ///
    /// Adapters forward the name to the client (for example as an
    /// `HX-Trigger` header) so dependent fragments can be re-fetched.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Notification(&'static str);

    impl Notification {
        /// Creates a notification with the given event name
        #[must_use]
        pub const fn new(name: &'static str) -> Self {
            Self(name)
        }

        /// Returns the event name
        #[must_use]
        pub const fn name(self) -> &'static str {
            self.0
        }
    }

    impl fmt::Display for Notification {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    /// Effect type - describes a side effect to be carried out by the shell
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect {
        /// No-op effect
        None,

        /// Tell clients that a dependent view must be refreshed
        Notify(Notification),
    }

    impl Effect {
        /// Returns the notification carried by this effect, if any
        #[must_use]
        pub const fn notification(&self) -> Option<Notification> {
            match self {
                Self::Notify(notification) => Some(*notification),
                Self::None => None,
            }
        }
    }

    /// Collects the distinct notifications from a list of effects, in order.
    #[must_use]
    pub fn notifications(effects: &[Effect]) -> Vec<Notification> {
        let mut seen = Vec::new();
        for notification in effects.iter().filter_map(Effect::notification) {
            if !seen.contains(&notification) {
                seen.push(notification);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::effect::{notifications, Effect, Notification};

    const A: Notification = Notification::new("a-changed");
    const B: Notification = Notification::new("b-changed");

    #[test]
    fn notification_display_is_name() {
        assert_eq!(A.to_string(), "a-changed");
        assert_eq!(A.name(), "a-changed");
    }

    #[test]
    fn none_effect_has_no_notification() {
        assert_eq!(Effect::None.notification(), None);
        assert_eq!(Effect::Notify(B).notification(), Some(B));
    }

    #[test]
    fn notifications_are_deduplicated_in_order() {
        let effects = [
            Effect::Notify(B),
            Effect::None,
            Effect::Notify(A),
            Effect::Notify(B),
        ];
        assert_eq!(notifications(&effects), vec![B, A]);
    }
}
