//! Reducers for the Todo application.
//!
//! Three small reducers, each owning one piece of state:
//!
//! - [`TaskReducer`]: a single task
//! - [`TasksReducer`]: the ordered task list, delegating to [`TaskReducer`]
//! - [`VisibilityFilterReducer`]: the selected filter
//!
//! [`TodoAppReducer`] combines the last two over [`TodoState`]. Every action
//! reaches both; each treats actions it does not handle as no-ops.

use crate::types::{Task, TaskList, TodoAction, TodoState, VisibilityFilter};
use statecraft_core::{CombinedReducer, Reducer, combine_reducers, scope_reducer};
use std::sync::{Arc, LazyLock};

/// Reducer for one task
///
/// The state is `None` when the task does not exist yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskReducer;

impl Reducer for TaskReducer {
    type State = Option<Arc<Task>>;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            // Any prior value is ignored; only the list reducer calls this,
            // always with `None`.
            TodoAction::AddTask { id, text } => Some(Arc::new(Task::new(*id, text.clone()))),

            TodoAction::ToggleTask { id } => state.as_ref().map(|task| {
                if task.id == *id {
                    Arc::new(task.toggled())
                } else {
                    Arc::clone(task)
                }
            }),

            TodoAction::SetFilter { .. } => state.clone(),
        }
    }
}

/// Reducer for the task list
#[derive(Clone, Copy, Debug, Default)]
pub struct TasksReducer {
    task: TaskReducer,
}

impl TasksReducer {
    /// Creates a new `TasksReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self { task: TaskReducer }
    }
}

impl Reducer for TasksReducer {
    type State = TaskList;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::AddTask { .. } => {
                let mut next = Vec::with_capacity(state.len() + 1);
                next.extend(state.iter().cloned());
                next.extend(self.task.reduce(&None, action));
                next
            }

            // The item reducer never drops an existing task, so the length is preserved.
            TodoAction::ToggleTask { .. } => state
                .iter()
                .filter_map(|task| self.task.reduce(&Some(Arc::clone(task)), action))
                .collect(),

            TodoAction::SetFilter { .. } => state.clone(),
        }
    }
}

/// Reducer for the visibility filter
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::SetFilter { filter } => *filter,
            TodoAction::AddTask { .. } | TodoAction::ToggleTask { .. } => *state,
        }
    }
}

/// Root reducer over [`TodoState`]
///
/// Routes every action to the task-list reducer and the filter reducer, each
/// scoped to its own field.
#[derive(Debug)]
pub struct TodoAppReducer {
    inner: CombinedReducer<TodoState, TodoAction>,
}

impl TodoAppReducer {
    /// Creates the root reducer
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: combine_reducers(vec![
                Box::new(scope_reducer(
                    TasksReducer::new(),
                    |state: &TodoState| &state.tasks,
                    |state: &mut TodoState, tasks| state.tasks = tasks,
                )),
                Box::new(scope_reducer(
                    VisibilityFilterReducer,
                    |state: &TodoState| &state.visibility_filter,
                    |state: &mut TodoState, filter| state.visibility_filter = filter,
                )),
            ]),
        }
    }
}

impl Default for TodoAppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoAppReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.inner.reduce(state, action)
    }
}

static ROOT: LazyLock<TodoAppReducer> = LazyLock::new(TodoAppReducer::new);

/// Applies an action to a single task (`None` when it does not exist yet)
#[must_use]
pub fn reduce_task(task: Option<&Arc<Task>>, action: &TodoAction) -> Option<Arc<Task>> {
    TaskReducer.reduce(&task.cloned(), action)
}

/// Applies an action to the task list
#[must_use]
pub fn reduce_tasks(tasks: &TaskList, action: &TodoAction) -> TaskList {
    TasksReducer::new().reduce(tasks, action)
}

/// Applies an action to the visibility filter
#[must_use]
pub fn reduce_filter(filter: VisibilityFilter, action: &TodoAction) -> VisibilityFilter {
    VisibilityFilterReducer.reduce(&filter, action)
}

/// Applies an action to the whole application state
#[must_use]
pub fn reduce_root(state: &TodoState, action: &TodoAction) -> TodoState {
    ROOT.reduce(state, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskId;
    use proptest::prelude::*;
    use statecraft_testing::{ReducerTest, helpers, properties};

    fn task(id: u64, text: &str, completed: bool) -> Arc<Task> {
        Arc::new(Task {
            id: TaskId(id),
            text: text.to_string(),
            completed,
        })
    }

    fn two_tasks() -> TaskList {
        vec![
            task(0, "Learn Redux", false),
            task(1, "Play synthesizers", false),
        ]
    }

    #[test]
    fn add_task_appends_new_task() {
        ReducerTest::new(TasksReducer::new())
            .given_state(Vec::new())
            .when_action(TodoAction::AddTask {
                id: TaskId(0),
                text: "Learn Redux".to_string(),
            })
            .then_state(|tasks| {
                assert_eq!(tasks, &vec![task(0, "Learn Redux", false)]);
            })
            .run();
    }

    #[test]
    fn add_task_keeps_existing_tasks_first() {
        ReducerTest::new(TasksReducer::new())
            .given_state(two_tasks())
            .when_action(TodoAction::AddTask {
                id: TaskId(2),
                text: "Go shopping".to_string(),
            })
            .then_transition(|before, after| {
                assert_eq!(after.len(), 3);
                assert!(Arc::ptr_eq(&before[0], &after[0]));
                assert!(Arc::ptr_eq(&before[1], &after[1]));
                assert_eq!(after[2].text, "Go shopping");
                assert!(!after[2].completed);
            })
            .run();
    }

    #[test]
    fn toggle_task_flips_only_matching_task() {
        ReducerTest::new(TasksReducer::new())
            .given_state(two_tasks())
            .when_action(TodoAction::ToggleTask { id: TaskId(1) })
            .then_state(|tasks| {
                assert_eq!(
                    tasks,
                    &vec![
                        task(0, "Learn Redux", false),
                        task(1, "Play synthesizers", true),
                    ]
                );
            })
            .then_transition(|before, after| {
                // Untouched tasks are shared, not copied
                assert!(Arc::ptr_eq(&before[0], &after[0]));
                assert!(!Arc::ptr_eq(&before[1], &after[1]));
                // The prior list is not modified
                assert!(!before[1].completed);
            })
            .run();
    }

    #[test]
    fn toggle_on_empty_list_is_empty() {
        ReducerTest::new(TasksReducer::new())
            .given_state(Vec::new())
            .when_action(TodoAction::ToggleTask { id: TaskId(7) })
            .then_state(|tasks| assert!(tasks.is_empty()))
            .run();
    }

    #[test]
    fn toggle_unknown_id_changes_nothing() {
        ReducerTest::new(TasksReducer::new())
            .given_state(two_tasks())
            .when_action(TodoAction::ToggleTask { id: TaskId(42) })
            .then_unchanged()
            .run();
    }

    #[test]
    fn task_reducer_passes_through_other_ids() {
        let prior = task(0, "Learn Redux", false);
        let next = reduce_task(Some(&prior), &TodoAction::ToggleTask { id: TaskId(1) });

        assert!(next.is_some_and(|next| Arc::ptr_eq(&next, &prior)));
    }

    #[test]
    fn task_reducer_add_ignores_prior() {
        let prior = task(9, "Old", true);
        let next = reduce_task(
            Some(&prior),
            &TodoAction::AddTask {
                id: TaskId(3),
                text: "New".to_string(),
            },
        );

        assert_eq!(next, Some(task(3, "New", false)));
    }

    #[test]
    fn task_reducer_toggle_absent_stays_absent() {
        assert_eq!(reduce_task(None, &TodoAction::ToggleTask { id: TaskId(0) }), None);
    }

    #[test]
    fn set_filter_stores_filter() {
        ReducerTest::new(VisibilityFilterReducer)
            .given_state(VisibilityFilter::ShowAll)
            .when_action(TodoAction::SetFilter {
                filter: VisibilityFilter::ShowCompleted,
            })
            .then_state(|filter| assert_eq!(*filter, VisibilityFilter::ShowCompleted))
            .run();
    }

    #[test]
    fn filter_ignores_task_actions() {
        assert_eq!(
            reduce_filter(
                VisibilityFilter::ShowActive,
                &TodoAction::ToggleTask { id: TaskId(0) }
            ),
            VisibilityFilter::ShowActive
        );
    }

    #[test]
    fn root_routes_action_to_both_slices() {
        ReducerTest::new(TodoAppReducer::new())
            .given_default_state()
            .when_actions([
                TodoAction::AddTask {
                    id: TaskId(1),
                    text: "Play synthesizers".to_string(),
                },
                TodoAction::SetFilter {
                    filter: VisibilityFilter::ShowActive,
                },
                TodoAction::ToggleTask { id: TaskId(1) },
            ])
            .then_state(|state| {
                assert_eq!(state.tasks, vec![task(1, "Play synthesizers", true)]);
                assert_eq!(state.visibility_filter, VisibilityFilter::ShowActive);
            })
            .run();
    }

    #[test]
    fn set_filter_shares_task_list_elements() {
        let state = TodoState {
            tasks: two_tasks(),
            visibility_filter: VisibilityFilter::ShowAll,
        };

        let next = reduce_root(
            &state,
            &TodoAction::SetFilter {
                filter: VisibilityFilter::ShowCompleted,
            },
        );

        assert_eq!(next.tasks, state.tasks);
        assert!(
            next.tasks
                .iter()
                .zip(&state.tasks)
                .all(|(a, b)| Arc::ptr_eq(a, b))
        );
    }

    fn arb_action() -> impl Strategy<Value = TodoAction> {
        prop_oneof![
            (0u64..8, "[a-z ]{0,12}").prop_map(|(id, text)| TodoAction::AddTask {
                id: TaskId(id),
                text,
            }),
            (0u64..8).prop_map(|id| TodoAction::ToggleTask { id: TaskId(id) }),
            prop::sample::select(VisibilityFilter::ALL.to_vec())
                .prop_map(|filter| TodoAction::SetFilter { filter }),
        ]
    }

    fn arb_state() -> impl Strategy<Value = TodoState> {
        prop::collection::vec(arb_action(), 0..12)
            .prop_map(|actions| helpers::replay(&TodoAppReducer::new(), TodoState::new(), actions))
    }

    proptest! {
        #[test]
        fn task_actions_leave_filter_alone(state in arb_state(), id in 0u64..8) {
            let next = reduce_root(&state, &TodoAction::ToggleTask { id: TaskId(id) });
            prop_assert_eq!(next.visibility_filter, state.visibility_filter);
        }

        #[test]
        fn filter_actions_leave_tasks_alone(state in arb_state(), action in arb_action()) {
            if let TodoAction::SetFilter { .. } = action {
                prop_assert!(properties::is_noop(&TasksReducer::new(), &state.tasks, &action));
            }
            if let TodoAction::AddTask { .. } | TodoAction::ToggleTask { .. } = action {
                prop_assert!(properties::is_noop(
                    &VisibilityFilterReducer,
                    &state.visibility_filter,
                    &action
                ));
            }
        }

        #[test]
        fn toggling_twice_restores_tasks(state in arb_state(), id in 0u64..8) {
            let toggle = TodoAction::ToggleTask { id: TaskId(id) };
            let twice = reduce_root(&reduce_root(&state, &toggle), &toggle);
            prop_assert_eq!(twice, state);
        }

        #[test]
        fn adding_n_tasks_keeps_insertion_order(ids in properties::distinct_ids(1_000, 0..30)) {
            let actions = ids.iter().map(|id| TodoAction::AddTask {
                id: TaskId(*id),
                text: format!("task {id}"),
            });
            let tasks = helpers::replay(&TasksReducer::new(), Vec::new(), actions);

            prop_assert_eq!(tasks.len(), ids.len());
            let stored: Vec<u64> = tasks.iter().map(|task| task.id.get()).collect();
            prop_assert_eq!(stored, ids);
            prop_assert!(tasks.iter().all(|task| !task.completed));
        }
    }
}
