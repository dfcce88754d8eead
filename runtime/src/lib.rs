//! # Statecraft Runtime
//!
//! Runtime implementation for the Statecraft architecture.
//!
//! This crate provides the Store that owns the current state, runs the
//! reducer for every submitted action and notifies listeners afterwards.
//!
//! ## Core Components
//!
//! - **Store**: The single owner of the current state cell
//! - **Listener registry**: Per-store observers notified after each transition
//! - **`StoreConfig`**: Limits and naming for a store instance
//!
//! ## Execution Model
//!
//! Everything is synchronous. `send` reduces one action to completion,
//! swaps in the new state and only then calls listeners, so a listener always
//! observes a fully updated state. Listeners run without any lock held and
//! may call back into the store.
//!
//! ## Example
//!
//! ```ignore
//! use statecraft_runtime::Store;
//!
//! let store = Store::new(my_reducer);
//!
//! let subscription = store.subscribe(|state| println!("{state:?}"))?;
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state_with(|s| s.some_field);
//!
//! subscription.unsubscribe();
//! ```

use statecraft_core::Reducer;
use std::sync::Arc;

/// Metric names recorded by the Store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// The listener limit configured in [`crate::StoreConfig`] was reached
        #[error("Listener limit of {0} reached")]
        TooManyListeners(usize),
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use statecraft_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_name("todos")
///     .with_max_listeners(8);
///
/// assert_eq!(config.max_listeners, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name attached to log events emitted by the store
    pub name: String,
    /// Maximum number of registered listeners (0 = unlimited)
    pub max_listeners: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub fn new(name: impl Into<String>, max_listeners: usize) -> Self {
        Self {
            name: name.into(),
            max_listeners,
        }
    }

    /// Set the store name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the listener limit (0 = unlimited)
    #[must_use]
    pub const fn with_max_listeners(mut self, max_listeners: usize) -> Self {
        self.max_listeners = max_listeners;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "store".to_string(),
            max_listeners: 1024,
        }
    }
}

/// Shared listener callback
type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Listeners of one store, keyed by registration order
struct ListenerRegistry<S> {
    next_id: u64,
    listeners: Vec<(u64, Listener<S>)>,
}

impl<S> ListenerRegistry<S> {
    const fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    fn insert(&mut self, listener: Listener<S>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn snapshot(&self) -> Vec<Listener<S>> {
        self.listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }
}

/// Handle returned by [`Store::subscribe`]
///
/// Dropping the handle does not remove the listener; call
/// [`Subscription::unsubscribe`] for that.
#[must_use = "keep the subscription to be able to unsubscribe later"]
pub struct Subscription<S> {
    id: u64,
    registry: std::sync::Weak<std::sync::Mutex<ListenerRegistry<S>>>,
}

impl<S> Subscription<S> {
    /// Remove the listener from its store
    ///
    /// Returns `false` if the listener was already removed or the store is
    /// gone.
    #[allow(clippy::must_use_candidate)]
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let removed = registry.remove(self.id);
        metrics::gauge!(metrics::LISTENERS_ACTIVE).decrement(f64::from(u8::from(removed)));
        removed
    }
}

impl<S> std::fmt::Debug for Subscription<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{
        Arc, ListenerRegistry, Reducer, StoreConfig, StoreError, Subscription, metrics,
    };
    use std::marker::PhantomData;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Mutex, PoisonError, RwLock};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (an immutable snapshot behind `RwLock`, replaced on each action)
    /// 2. Reducer (state transitions)
    /// 3. Listeners (notified after every transition)
    ///
    /// Cloning a Store yields another handle to the same state and listeners.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        state: Arc<RwLock<Arc<S>>>,
        reducer: Arc<R>,
        listeners: Arc<Mutex<ListenerRegistry<S>>>,
        shutdown: Arc<AtomicBool>,
        config: Arc<StoreConfig>,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, R> Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
        A: std::fmt::Debug,
    {
        /// Create a new store whose state starts at `S::default()`
        #[must_use]
        pub fn new(reducer: R) -> Self
        where
            S: Default,
        {
            Self::with_state(S::default(), reducer)
        }

        /// Create a new store with an explicit initial state
        #[must_use]
        pub fn with_state(initial_state: S, reducer: R) -> Self {
            Self::with_config(initial_state, reducer, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, config: StoreConfig) -> Self {
            tracing::debug!(store = %config.name, "Store created");

            Self {
                state: Arc::new(RwLock::new(Arc::new(initial_state))),
                reducer: Arc::new(reducer),
                listeners: Arc::new(Mutex::new(ListenerRegistry::new())),
                shutdown: Arc::new(AtomicBool::new(false)),
                config: Arc::new(config),
                _action: PhantomData,
            }
        }

        /// Configuration this store was created with
        #[must_use]
        pub fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Submit an action
        ///
        /// The reducer runs to completion and the resulting state replaces the
        /// current one before any listener is called. Listeners run on the
        /// caller's thread, in registration order, and each one receives the
        /// state current at the moment it is called. A listener that sends
        /// another action therefore never leaves the listeners after it with
        /// an outdated state.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self), fields(store = %self.config.name))]
        pub fn send(&self, action: A) -> Result<(), StoreError> {
            {
                // The cell only ever holds a fully built state, so a poisoned
                // lock still guards a consistent value.
                let mut current = self.state.write().unwrap_or_else(PoisonError::into_inner);
                tracing::trace!("Acquired write lock on state");

                // Checked under the state lock: `shutdown` flips the flag while
                // holding it, so no action is applied after shutdown returns.
                if self.shutdown.load(Ordering::Acquire) {
                    tracing::warn!("Rejected action: store is shutting down");
                    metrics::counter!(metrics::REJECTED_ACTIONS).increment(1);
                    return Err(StoreError::ShutdownInProgress);
                }

                metrics::counter!(metrics::ACTIONS_TOTAL).increment(1);

                let start = std::time::Instant::now();
                let next = self.reducer.reduce(&current, &action);
                metrics::histogram!(metrics::REDUCER_DURATION)
                    .record(start.elapsed().as_secs_f64());

                *current = Arc::new(next);
            }

            let listeners = self
                .listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .snapshot();

            tracing::trace!(listeners = listeners.len(), "Notifying listeners");
            #[allow(clippy::cast_precision_loss)]
            metrics::histogram!(metrics::LISTENERS_NOTIFIED).record(listeners.len() as f64);

            for listener in listeners {
                let current = self.state();
                listener(&current);
            }

            tracing::debug!("Action processing completed");
            Ok(())
        }

        /// Current state snapshot
        ///
        /// The snapshot is immutable; later actions produce new snapshots and
        /// never change this one.
        #[must_use]
        pub fn state(&self) -> Arc<S> {
            Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state_with(|s| s.tasks.len());
        /// ```
        pub fn state_with<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            f(&state)
        }

        /// Register a listener called after every state transition
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::TooManyListeners`] when the configured limit
        /// is reached, and [`StoreError::ShutdownInProgress`] after shutdown.
        pub fn subscribe<F>(&self, listener: F) -> Result<Subscription<S>, StoreError>
        where
            F: Fn(&S) + Send + Sync + 'static,
        {
            if self.shutdown.load(Ordering::Acquire) {
                return Err(StoreError::ShutdownInProgress);
            }

            let mut registry = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);

            // `shutdown` may have cleared the registry since the check above.
            if self.shutdown.load(Ordering::Acquire) {
                return Err(StoreError::ShutdownInProgress);
            }

            let max = self.config.max_listeners;
            if max != 0 && registry.listeners.len() >= max {
                tracing::warn!(store = %self.config.name, max, "Listener limit reached");
                return Err(StoreError::TooManyListeners(max));
            }

            let id = registry.insert(Arc::new(listener));
            metrics::gauge!(metrics::LISTENERS_ACTIVE).increment(1.0);
            tracing::debug!(store = %self.config.name, listener = id, "Listener subscribed");

            Ok(Subscription {
                id,
                registry: Arc::downgrade(&self.listeners),
            })
        }

        /// Number of registered listeners
        #[must_use]
        pub fn listener_count(&self) -> usize {
            self.listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .listeners
                .len()
        }

        /// Stop accepting actions and drop every listener
        ///
        /// The last state stays readable through [`Store::state`].
        pub fn shutdown(&self) {
            {
                let _state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                if self.shutdown.swap(true, Ordering::AcqRel) {
                    return;
                }
            }

            let mut registry = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
            #[allow(clippy::cast_precision_loss)]
            metrics::gauge!(metrics::LISTENERS_ACTIVE).decrement(registry.listeners.len() as f64);
            registry.listeners.clear();

            tracing::info!(store = %self.config.name, "Store shut down");
        }

        /// Whether [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shutdown(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }
    }

    impl<S, A, R> Clone for Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                listeners: Arc::clone(&self.listeners),
                shutdown: Arc::clone(&self.shutdown),
                config: Arc::clone(&self.config),
                _action: PhantomData,
            }
        }
    }

    impl<S, A, R> std::fmt::Debug for Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("name", &self.config.name)
                .field("shutdown", &self.shutdown.load(Ordering::Relaxed))
                .finish_non_exhaustive()
        }
    }
}

pub use store::Store;
