//! # Todo Engine Testing
//!
//! Testing utilities for reducers built on the todo state engine.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for a single reducer call
//! - [`assertions`]: helpers for checking the effects a reducer returned
//!
//! ## Example
//!
//! ```ignore
//! use todo_engine_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::default())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::AddItem { label: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.items.len(), 1))
//!     .then_effects(|effects| assertions::assert_notifies(effects, TODOS_CHANGED))
//!     .run();
//! ```


// Re-export commonly used items
pub use reducer_test::{assertions, ReducerTest};
