//! # Statecraft Core
//!
//! Core traits for the Statecraft architecture.
//!
//! This crate provides the fundamental abstraction for building applications
//! around a unidirectional data flow: immutable actions are fed to pure
//! reducers, which compute the next state from the previous one.
//!
//! ## Core Concepts
//!
//! - **State**: Owned, cloneable application data
//! - **Action**: An immutable value describing one requested state change
//! - **Reducer**: Pure function `(State, Action) → State`
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Unknown actions are no-ops: a reducer returns its prior state unchanged
//! - Small reducers composed into larger ones (see [`composition`])
//!
//! ## Example
//!
//! ```
//! use statecraft_core::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &Counter, action: &CounterAction) -> Counter {
//!         match action {
//!             CounterAction::Increment => Counter { count: state.count + 1 },
//!             CounterAction::Decrement => Counter { count: state.count - 1 },
//!         }
//!     }
//! }
//!
//! let next = CounterReducer.reduce(&Counter::default(), &CounterAction::Increment);
//! assert_eq!(next.count, 1);
//! ```

pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action) → State`.
///
/// They contain all state-transition logic and are deterministic and testable.
pub mod reducer {
    use std::sync::Arc;

    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Contract
    ///
    /// - The prior state is only borrowed; the returned value is the next state.
    /// - Actions the reducer does not handle must return the prior state unchanged.
    /// - No observable side effects.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Compute the next state from the prior state and an action
        fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
    }

    impl<R> Reducer for &R
    where
        R: Reducer + ?Sized,
    {
        type State = R::State;
        type Action = R::Action;

        fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
            (**self).reduce(state, action)
        }
    }

    impl<R> Reducer for Arc<R>
    where
        R: Reducer + ?Sized,
    {
        type State = R::State;
        type Action = R::Action;

        fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
            (**self).reduce(state, action)
        }
    }

    impl<R> Reducer for Box<R>
    where
        R: Reducer + ?Sized,
    {
        type State = R::State;
        type Action = R::Action;

        fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
            (**self).reduce(state, action)
        }
    }
}

// Re-export commonly used items
pub use composition::{CombinedReducer, ScopedReducer, combine_reducers, scope_reducer};
pub use reducer::Reducer;
