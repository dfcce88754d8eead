//! # Statecraft Testing
//!
//! Testing utilities and helpers for the Statecraft architecture.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then builder for reducers
//! - [`RecordingListener`], a store listener that captures every state it sees
//! - Helpers for driving a [`Store`] and replaying action sequences
//! - Property-based testing utilities
//!
//! ## Example
//!
//! ```ignore
//! use statecraft_testing::{RecordingListener, helpers};
//! use statecraft_runtime::Store;
//!
//! #[test]
//! fn test_order_flow() {
//!     let store = Store::new(OrderReducer);
//!     let recorder = RecordingListener::new();
//!     let _subscription = store.subscribe(recorder.listener()).unwrap();
//!
//!     helpers::send_all(&store, [OrderAction::Place { id: 1 }]).unwrap();
//!
//!     assert_eq!(recorder.len(), 1);
//! }
//! ```

use statecraft_core::Reducer;
use statecraft_runtime::{Store, StoreError};


/// Mock implementations for testing.
pub mod mocks {
    use std::sync::{Arc, Mutex, PoisonError};

    /// Listener that records every state it is called with
    ///
    /// Clones share the same recording, so one clone can be handed to a
    /// store while another is inspected by the test.
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft_testing::RecordingListener;
    ///
    /// let recorder = RecordingListener::new();
    /// let listener = recorder.listener();
    /// listener(&1);
    /// listener(&2);
    /// assert_eq!(recorder.states(), vec![1, 2]);
    /// ```
    #[derive(Debug)]
    pub struct RecordingListener<S> {
        states: Arc<Mutex<Vec<S>>>,
    }

    impl<S: Clone + Send + 'static> RecordingListener<S> {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self {
                states: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Listener closure suitable for `Store::subscribe`
        pub fn listener(&self) -> impl Fn(&S) + Send + Sync + 'static {
            let states = Arc::clone(&self.states);
            move |state: &S| {
                states
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(state.clone());
            }
        }

        /// All recorded states, oldest first
        #[must_use]
        pub fn states(&self) -> Vec<S> {
            self.states
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Most recently recorded state
        #[must_use]
        pub fn last(&self) -> Option<S> {
            self.states
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .last()
                .cloned()
        }

        /// Number of notifications received
        #[must_use]
        pub fn len(&self) -> usize {
            self.states
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Whether no notification has been received
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    impl<S: Clone + Send + 'static> Default for RecordingListener<S> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<S> Clone for RecordingListener<S> {
        fn clone(&self) -> Self {
            Self {
                states: Arc::clone(&self.states),
            }
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    use super::{Reducer, Store, StoreError};

    /// Send every action to the store in order, stopping at the first error
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] reported by the store.
    pub fn send_all<S, A, R>(
        store: &Store<S, A, R>,
        actions: impl IntoIterator<Item = A>,
    ) -> Result<(), StoreError>
    where
        R: Reducer<State = S, Action = A>,
        A: std::fmt::Debug,
    {
        actions.into_iter().try_for_each(|action| store.send(action))
    }

    /// Fold a sequence of actions through a reducer, starting at `initial`
    pub fn replay<R, S, A>(reducer: &R, initial: S, actions: impl IntoIterator<Item = A>) -> S
    where
        R: Reducer<State = S, Action = A>,
    {
        actions
            .into_iter()
            .fold(initial, |state, action| reducer.reduce(&state, &action))
    }

    /// Install a `tracing` subscriber that writes to the test output
    ///
    /// Safe to call from every test; only the first call installs.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use super::Reducer;
    use proptest::prelude::*;

    /// Whether reducing `action` leaves `state` unchanged
    pub fn is_noop<R, S, A>(reducer: &R, state: &S, action: &A) -> bool
    where
        R: Reducer<State = S, Action = A>,
        S: PartialEq,
    {
        reducer.reduce(state, action) == *state
    }

    /// Strategy for a vector of `len` distinct ids drawn from `0..max`, in
    /// random order
    pub fn distinct_ids(max: u64, len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<u64>> {
        prop::collection::hash_set(0..max, len)
            .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }
}

// Re-export commonly used items
pub use mocks::RecordingListener;
pub use reducer_test::ReducerTest;
