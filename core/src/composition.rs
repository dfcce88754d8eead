//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a subset of state
//!
//! The two are usually used together: each slice of a composite state gets
//! its own small reducer, lifted with [`scope_reducer`], and the lifted
//! reducers are joined with [`combine_reducers`]. Every action reaches every
//! slice reducer, which is why slice reducers must treat unknown actions as
//! no-ops.
//!
//! # Examples
//!
//! ```
//! use statecraft_core::{Reducer, combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Default)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! enum AppAction {
//!     Increment,
//!     SetName(String),
//! }
//!
//! struct CountReducer;
//! struct NameReducer;
//!
//! impl Reducer for CountReducer {
//!     type State = i32;
//!     type Action = AppAction;
//!
//!     fn reduce(&self, state: &i32, action: &AppAction) -> i32 {
//!         match action {
//!             AppAction::Increment => state + 1,
//!             AppAction::SetName(_) => *state,
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!
//!     fn reduce(&self, state: &String, action: &AppAction) -> String {
//!         match action {
//!             AppAction::SetName(name) => name.clone(),
//!             AppAction::Increment => state.clone(),
//!         }
//!     }
//! }
//!
//! let app = combine_reducers(vec![
//!     Box::new(scope_reducer(CountReducer, |s: &AppState| &s.count, |s: &mut AppState, count| s.count = count)),
//!     Box::new(scope_reducer(NameReducer, |s: &AppState| &s.name, |s: &mut AppState, name| s.name = name)),
//! ]);
//!
//! let state = app.reduce(&AppState::default(), &AppAction::Increment);
//! let state = app.reduce(&state, &AppAction::SetName("Alice".to_string()));
//! assert_eq!(state.count, 1);
//! assert_eq!(state.name, "Alice");
//! ```

use crate::reducer::Reducer;
use std::marker::PhantomData;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence; the state returned by one reducer is the
/// input of the next. When every reducer owns a disjoint slice of the state
/// (see [`scope_reducer`]) the order is irrelevant and the result equals
/// running each of them independently against the prior state.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
#[must_use]
pub fn combine_reducers<S, A>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A> + Send + Sync>>,
) -> CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A>
where
    S: 'static,
    A: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A> + Send + Sync>>,
}

impl<S, A> CombinedReducer<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Number of reducers in this combination
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether this combination contains no reducers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A> std::fmt::Debug for CombinedReducer<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.reducers
            .iter()
            .fold(state.clone(), |next, reducer| reducer.reduce(&next, action))
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows you to reuse reducers designed for smaller state types
/// within a larger application state. The parent state is copied and only the
/// focused slice is replaced with the child reducer's result.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (subset of `S`)
/// - `A`: The action type
/// - `R`: The child reducer
///
/// # Examples
///
/// ```
/// use statecraft_core::{Reducer, scope_reducer};
///
/// struct Add;
///
/// impl Reducer for Add {
///     type State = i32;
///     type Action = i32;
///
///     fn reduce(&self, state: &i32, action: &i32) -> i32 {
///         state + action
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct Parent {
///     total: i32,
///     label: String,
/// }
///
/// let scoped = scope_reducer(Add, |p: &Parent| &p.total, |p: &mut Parent, total| p.total = total);
/// let next = scoped.reduce(&Parent { total: 2, label: "x".into() }, &3);
/// assert_eq!(next.total, 5);
/// assert_eq!(next.label, "x");
/// ```
pub const fn scope_reducer<S, SubS, A, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, R>
where
    S: Clone,
    R: Reducer<State = SubS, Action = A>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, R>
where
    R: Reducer<State = SubS, Action = A>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: PhantomData<fn() -> A>,
}

impl<S, SubS, A, R> std::fmt::Debug for ScopedReducer<S, SubS, A, R>
where
    R: Reducer<State = SubS, Action = A> + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedReducer")
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

impl<S, SubS, A, R> Reducer for ScopedReducer<S, SubS, A, R>
where
    S: Clone,
    R: Reducer<State = SubS, Action = A>,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        let sub_state = self.reducer.reduce((self.get_state)(state), action);

        let mut next = state.clone();
        (self.set_state)(&mut next, sub_state);
        next
    }
}
