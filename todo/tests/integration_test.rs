//! End-to-end tests: store, reducers, selectors and the session binding.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use statecraft_runtime::{Store, StoreConfig, StoreError};
use statecraft_testing::{RecordingListener, helpers};
use std::sync::Arc;
use todo::{
    IdAllocator, TaskId, TodoAction, TodoAppReducer, TodoError, TodoSession, TodoState, UiEvent,
    VisibilityFilter, reduce_root,
};

fn add(id: u64, text: &str) -> TodoAction {
    TodoAction::AddTask {
        id: TaskId(id),
        text: text.to_string(),
    }
}

#[test]
fn add_then_toggle_completes_task() {
    helpers::init_test_tracing();
    let store = Store::new(TodoAppReducer::new());

    store.send(add(1, "Play synthesizers")).unwrap();
    let added = store.state();
    assert_eq!(added.count(), 1);
    assert!(!added.tasks[0].completed);

    store.send(TodoAction::ToggleTask { id: TaskId(1) }).unwrap();
    let toggled = store.state();
    assert_eq!(toggled.tasks[0].id, TaskId(1));
    assert_eq!(toggled.tasks[0].text, "Play synthesizers");
    assert!(toggled.tasks[0].completed);

    // Earlier snapshots are never mutated.
    assert!(!added.tasks[0].completed);
}

#[test]
fn listeners_see_every_transition() {
    let store = Store::new(TodoAppReducer::new());
    let recorder = RecordingListener::<TodoState>::new();
    let _subscription = store.subscribe(recorder.listener()).unwrap();

    helpers::send_all(
        &store,
        [
            add(0, "Learn Redux"),
            add(1, "Play synthesizers"),
            TodoAction::SetFilter {
                filter: VisibilityFilter::ShowCompleted,
            },
        ],
    )
    .unwrap();

    let counts: Vec<_> = recorder.states().iter().map(TodoState::count).collect();
    assert_eq!(counts, vec![1, 2, 2]);
    assert_eq!(
        recorder.last().unwrap().visibility_filter,
        VisibilityFilter::ShowCompleted
    );
}

#[test]
fn irrelevant_actions_leave_state_equal() {
    let state = helpers::replay(
        &TodoAppReducer::new(),
        TodoState::new(),
        [add(0, "Learn Redux")],
    );

    let next = reduce_root(&state, &TodoAction::ToggleTask { id: TaskId(42) });
    assert_eq!(next, state);
    assert!(Arc::ptr_eq(&next.tasks[0], &state.tasks[0]));

    let next = reduce_root(
        &state,
        &TodoAction::SetFilter {
            filter: VisibilityFilter::ShowAll,
        },
    );
    assert_eq!(next, state);
}

#[test]
fn actions_from_json_drive_the_store() {
    let store = Store::new(TodoAppReducer::new());

    for json in [
        r#"{"type":"ADD_TODO","id":1,"text":"Play synthesizers"}"#,
        r#"{"type":"TOGGLE_TODO","id":1}"#,
        r#"{"type":"SET_VISIBILITY_FILTER","filter":"SHOW_ACTIVE"}"#,
    ] {
        store.send(TodoAction::from_json(json).unwrap()).unwrap();
    }

    let state = store.state();
    assert!(state.visible_tasks().is_empty());
    assert_eq!(
        serde_json::to_value(&*state).unwrap(),
        serde_json::json!({
            "todos": [{ "id": 1, "text": "Play synthesizers", "completed": true }],
            "visibilityFilter": "SHOW_ACTIVE"
        })
    );

    let bad = TodoAction::from_json(r#"{"type":"SET_VISIBILITY_FILTER","filter":"SHOW_NONE"}"#);
    assert!(matches!(bad, Err(TodoError::InvalidFilter(_))));
}

#[test]
fn session_flow_renders_after_each_transition() {
    let mut session = TodoSession::default();
    let renders = RecordingListener::<TodoState>::new();
    let _subscription = session.subscribe(renders.listener()).unwrap();

    for event in [
        UiEvent::InputChanged {
            value: "Learn Redux".to_string(),
        },
        UiEvent::AddClicked,
        UiEvent::AddClicked,
        UiEvent::TodoClicked { id: TaskId(0) },
        UiEvent::FilterClicked {
            filter: VisibilityFilter::ShowActive,
        },
    ] {
        session.handle(event).unwrap();
    }

    // Input changes are local to the view and do not reach the store.
    assert_eq!(renders.len(), 4);

    let state = session.store().state();
    let visible: Vec<_> = state.visible_tasks().iter().map(|task| task.id).collect();
    assert_eq!(visible, vec![TaskId(1)]);
    assert_eq!(state.tasks[1].text, "");
    assert_eq!(
        session.render(),
        "> _ [Add Todo]\n    1. \nShow: [ALL] ACTIVE [COMPLETED]  (1 left)"
    );
}

#[test]
fn injected_store_and_allocator_are_used() {
    let store = Store::with_config(
        TodoState::new(),
        TodoAppReducer::new(),
        StoreConfig::default().with_name("injected"),
    );
    let mut session = TodoSession::with_store(store.clone(), IdAllocator::starting_at(10));

    session.handle(UiEvent::AddClicked).unwrap();

    // The session shares state with the injected handle.
    assert_eq!(store.state().tasks[0].id, TaskId(10));
}

#[test]
fn listener_limit_is_reported() {
    let session = TodoSession::new(StoreConfig::default().with_max_listeners(1));
    let _first = session.subscribe(|_| {}).unwrap();

    let second = session.subscribe(|_| {});
    assert!(matches!(
        second,
        Err(TodoError::Store(StoreError::TooManyListeners(1)))
    ));
}
