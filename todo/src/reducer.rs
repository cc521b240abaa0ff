//! Reducer logic for the todo list.
//!
//! Every operation validates its target position first and only then
//! mutates, so a rejected action never leaves a partial change behind.

use crate::error::TodoError;
use crate::types::{EditMode, TodoAction, TodoItem, TodoState, FILTER_CHANGED, TODOS_CHANGED};
use todo_engine_core::{effect::Effect, reducer::Reducer, smallvec, Effects, SmallVec};

/// Environment dependencies for the todo reducer
///
/// The todo list is pure in-memory state and needs no injected services.
pub type TodoEnvironment = ();

/// Reducer for the todo list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks that `position` addresses an item
    fn validate_position(state: &TodoState, position: usize) -> Result<(), TodoError> {
        if position < state.items.len() {
            Ok(())
        } else {
            Err(TodoError::OutOfRange {
                position,
                len: state.items.len(),
            })
        }
    }

    fn add_item(state: &mut TodoState, label: String) {
        let position = state.items.len();
        state.items.push(TodoItem::new(position, label));
        state.summary.active_count += 1;
        state.summary.total_count += 1;
    }

    fn toggle_item(state: &mut TodoState, position: usize) -> Result<(), TodoError> {
        Self::validate_position(state, position)?;

        let item = &mut state.items[position];
        item.checked = !item.checked;
        if item.checked {
            state.summary.active_count -= 1;
        } else {
            state.summary.active_count += 1;
        }
        Ok(())
    }

    fn edit_item(state: &mut TodoState, position: usize, mode: EditMode) -> Result<(), TodoError> {
        Self::validate_position(state, position)?;

        let item = &mut state.items[position];
        match mode {
            EditMode::Begin => item.editing = true,
            EditMode::Commit { label } => {
                if let Some(label) = label {
                    item.label = label;
                }
                item.editing = false;
            }
        }
        Ok(())
    }

    fn delete_item(state: &mut TodoState, position: usize) -> Result<(), TodoError> {
        Self::validate_position(state, position)?;

        let removed = state.items.remove(position);
        state.reindex();
        if !removed.checked {
            state.summary.active_count -= 1;
        }
        state.summary.total_count -= 1;
        Ok(())
    }

    /// Removes checked items, returning how many were removed
    fn clear_completed(state: &mut TodoState) -> usize {
        let removed = state.remove_where(|item| item.checked).len();
        state.summary.total_count = state.items.len();
        state.summary.active_count = state.items.len();
        removed
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> Result<Effects, Self::Error> {
        match action {
            TodoAction::Reset => {
                *state = TodoState::new();
                Ok(smallvec![Effect::Notify(TODOS_CHANGED)])
            }

            TodoAction::AddItem { label } => {
                Self::add_item(state, label);
                Ok(smallvec![Effect::Notify(TODOS_CHANGED)])
            }

            TodoAction::ToggleItem { position } => {
                Self::toggle_item(state, position)?;
                Ok(smallvec![Effect::Notify(TODOS_CHANGED)])
            }

            // Editing never changes the counts
            TodoAction::EditItem { position, mode } => {
                Self::edit_item(state, position, mode)?;
                Ok(SmallVec::new())
            }

            TodoAction::DeleteItem { position } => {
                Self::delete_item(state, position)?;
                Ok(smallvec![Effect::Notify(TODOS_CHANGED)])
            }

            TodoAction::ClearCompleted => {
                if Self::clear_completed(state) == 0 {
                    Ok(SmallVec::new())
                } else {
                    Ok(smallvec![Effect::Notify(TODOS_CHANGED)])
                }
            }

            TodoAction::SetFilter { filter } => {
                state.summary.current_filter = filter;
                Ok(smallvec![Effect::Notify(FILTER_CHANGED)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Filter;
    use todo_engine_testing::{assertions, ReducerTest};

    fn item(label: &str, checked: bool) -> TodoItem {
        TodoItem {
            checked,
            ..TodoItem::new(0, label.to_string())
        }
    }

    fn state_of(items: &[(&str, bool)]) -> TodoState {
        TodoState::from_items(
            items.iter().map(|(label, checked)| item(label, *checked)).collect(),
            Filter::All,
        )
    }

    #[test]
    fn test_add_item_to_empty_list() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddItem {
                label: "Buy milk".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.items(), &[TodoItem::new(0, "Buy milk".to_string())]);
                assert_eq!(state.summary().active_count, 1);
                assert_eq!(state.summary().total_count, 1);
            })
            .then_effects(|effects| assertions::assert_notifies(effects, TODOS_CHANGED))
            .run();
    }

    #[test]
    fn test_add_item_accepts_empty_label() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_of(&[("A", false)]))
            .when_action(TodoAction::AddItem {
                label: String::new(),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 2);
                assert_eq!(state.items()[1].position, 1);
                assert_eq!(state.items()[1].label, "");
            })
            .run();
    }

    #[test]
    fn test_toggle_marks_completed() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_of(&[("Buy milk", false)]))
            .when_action(TodoAction::ToggleItem { position: 0 })
            .then_state(|state| {
                let item = state.get(0).unwrap();
                assert!(item.checked);
                assert_eq!(item.style_class(), "completed");
                assert_eq!(state.summary().active_count, 0);
                assert_eq!(state.summary().total_count, 1);
            })
            .then_effects(|effects| assertions::assert_notifies(effects, TODOS_CHANGED))
            .run();
    }

    #[test]
    fn test_toggle_unchecks_completed() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_of(&[("A", true), ("B", false)]))
            .when_action(TodoAction::ToggleItem { position: 0 })
            .then_state(|state| {
                assert!(!state.items()[0].checked);
                assert_eq!(state.items()[0].style_class(), "");
                assert_eq!(state.summary().active_count, 2);
            })
            .run();
    }

    #[test]
    fn test_toggle_out_of_range() {
        let given = state_of(&[("A", false)]);
        let expected = given.clone();

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(given)
            .when_action(TodoAction::ToggleItem { position: 1 })
            .then_error(|err| {
                assert_eq!(*err, TodoError::OutOfRange { position: 1, len: 1 });
            })
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn test_begin_edit_marks_only_target() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_of(&[("A", false), ("B", false)]))
            .when_action(TodoAction::EditItem {
                position: 1,
                mode: EditMode::Begin,
            })
            .then_state(|state| {
                assert!(!state.items()[0].editing);
                assert!(state.items()[1].editing);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_commit_edit_replaces_label() {
        let mut given = state_of(&[("A", false)]);
        given.items[0].editing = true;

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(given)
            .when_action(TodoAction::EditItem {
                position: 0,
                mode: EditMode::Commit {
                    label: Some("Buy oat milk".to_string()),
                },
            })
            .then_state(|state| {
                assert_eq!(state.items()[0].label, "Buy oat milk");
                assert!(!state.items()[0].editing);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_commit_edit_without_label_keeps_label() {
        let mut given = state_of(&[("A", false)]);
        given.items[0].editing = true;

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(given)
            .when_action(TodoAction::EditItem {
                position: 0,
                mode: EditMode::Commit { label: None },
            })
            .then_state(|state| {
                assert_eq!(state.items()[0].label, "A");
                assert!(!state.items()[0].editing);
            })
            .run();
    }

    #[test]
    fn test_edit_out_of_range() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::new())
            .when_action(TodoAction::EditItem {
                position: 0,
                mode: EditMode::Begin,
            })
            .then_error(|err| assert_eq!(err.position(), 0))
            .then_state(|state| assert!(state.is_empty()))
            .run();
    }

    #[test]
    fn test_delete_reindexes_remaining() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_of(&[("A", false), ("B", false)]))
            .when_action(TodoAction::DeleteItem { position: 0 })
            .then_state(|state| {
                assert_eq!(state.items(), &[TodoItem::new(0, "B".to_string())]);
                assert_eq!(state.summary().active_count, 1);
                assert_eq!(state.summary().total_count, 1);
            })
            .then_effects(|effects| assertions::assert_notifies(effects, TODOS_CHANGED))
            .run();
    }

    #[test]
    fn test_delete_checked_keeps_active_count() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_of(&[("A", true), ("B", false), ("C", false)]))
            .when_action(TodoAction::DeleteItem { position: 0 })
            .then_state(|state| {
                assert_eq!(state.summary().active_count, 2);
                assert_eq!(state.summary().total_count, 2);
            })
            .run();
    }

    #[test]
    fn test_delete_clears_editing() {
        let mut given = state_of(&[("A", false), ("B", false), ("C", false)]);
        given.items[2].editing = true;

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(given)
            .when_action(TodoAction::DeleteItem { position: 0 })
            .then_state(|state| {
                assert!(state.items().iter().all(|item| !item.editing));
                assert_eq!(state.items()[1].label, "C");
                assert_eq!(state.items()[1].position, 1);
            })
            .run();
    }

    #[test]
    fn test_delete_out_of_range() {
        let given = state_of(&[("A", false), ("B", true)]);
        let expected = given.clone();

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(given)
            .when_action(TodoAction::DeleteItem { position: 2 })
            .then_error(|err| {
                assert_eq!(*err, TodoError::OutOfRange { position: 2, len: 2 });
            })
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn test_clear_completed() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_of(&[("A", true), ("B", false)]))
            .when_action(TodoAction::ClearCompleted)
            .then_state(|state| {
                assert_eq!(state.items(), &[TodoItem::new(0, "B".to_string())]);
                assert_eq!(state.summary().active_count, 1);
                assert_eq!(state.summary().total_count, 1);
            })
            .then_effects(|effects| assertions::assert_notifies(effects, TODOS_CHANGED))
            .run();
    }

    #[test]
    fn test_clear_completed_preserves_filter() {
        let given = TodoState::from_items(vec![item("A", true), item("B", false)], Filter::Completed);

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(given)
            .when_action(TodoAction::ClearCompleted)
            .then_state(|state| {
                assert_eq!(state.summary().current_filter, Filter::Completed);
                assert!(state.view().items.is_empty());
            })
            .run();
    }

    #[test]
    fn test_clear_completed_with_nothing_checked() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_of(&[("A", false)]))
            .when_action(TodoAction::ClearCompleted)
            .then_state(|state| assert_eq!(state.len(), 1))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_set_filter() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(state_of(&[("A", true), ("B", false)]))
            .when_action(TodoAction::SetFilter {
                filter: Filter::Completed,
            })
            .then_state(|state| {
                let view = state.view();
                assert_eq!(view.items.len(), 1);
                assert_eq!(view.items[0].label, "A");
                assert_eq!(view.summary.total_count, 2);
                assert_eq!(view.summary.active_count, 1);
            })
            .then_effects(|effects| {
                assertions::assert_notifies(effects, FILTER_CHANGED);
                assertions::assert_does_not_notify(effects, TODOS_CHANGED);
            })
            .run();
    }

    #[test]
    fn test_reset_empties_list() {
        let given = TodoState::from_items(vec![item("A", true)], Filter::Active);

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(given)
            .when_action(TodoAction::Reset)
            .then_state(|state| {
                assert_eq!(*state, TodoState::new());
                assert_eq!(state.summary().current_filter, Filter::All);
            })
            .then_effects(|effects| assertions::assert_notifies(effects, TODOS_CHANGED))
            .run();
    }
}
