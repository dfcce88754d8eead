//! Store binding for the view layer.
//!
//! A [`TodoSession`] owns one store and the id allocator used for that
//! store's `AddTask` actions. The view layer gets the session passed in
//! explicitly; there is no global store.

use crate::actions::{self, IdAllocator};
use crate::containers;
use crate::error::TodoError;
use crate::reducer::TodoAppReducer;
use crate::types::{TaskId, TodoAction, TodoState, VisibilityFilter};
use crate::view::{AppProps, render_app};
use statecraft_runtime::{Store, StoreConfig, Subscription};

/// Store type used by the todo application
pub type TodoStore = Store<TodoState, TodoAction, TodoAppReducer>;

/// User interaction reported by the view layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The new-task input changed
    InputChanged {
        /// Full content of the input
        value: String,
    },
    /// The "Add Todo" button was clicked
    AddClicked,
    /// A row of the list was clicked
    TodoClicked {
        /// Task shown on that row
        id: TaskId,
    },
    /// A filter link was clicked
    FilterClicked {
        /// Filter of that link
        filter: VisibilityFilter,
    },
}

/// One running todo application: store, id allocator and input buffer
#[derive(Debug)]
pub struct TodoSession {
    store: TodoStore,
    ids: IdAllocator,
    input: String,
}

impl TodoSession {
    /// Creates a session with a fresh store and ids starting at 0
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_store(
            Store::with_config(TodoState::new(), TodoAppReducer::new(), config),
            IdAllocator::new(),
        )
    }

    /// Creates a session around an existing store and allocator
    #[must_use]
    pub const fn with_store(store: TodoStore, ids: IdAllocator) -> Self {
        Self {
            store,
            ids,
            input: String::new(),
        }
    }

    /// The bound store
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Current content of the new-task input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Register a listener on the bound store
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Store`] if the store refuses the listener.
    pub fn subscribe<F>(&self, listener: F) -> Result<Subscription<TodoState>, TodoError>
    where
        F: Fn(&TodoState) + Send + Sync + 'static,
    {
        Ok(self.store.subscribe(listener)?)
    }

    /// Submit an action to the bound store
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Store`] if the store is shut down.
    pub fn dispatch(&self, action: TodoAction) -> Result<(), TodoError> {
        Ok(self.store.send(action)?)
    }

    /// Translate a UI event into an action and dispatch it
    ///
    /// Returns the dispatched action, or `None` when the event only touched
    /// local view state, clicked a task that does not exist, or clicked the
    /// already selected filter.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Store`] if the store is shut down.
    #[tracing::instrument(skip(self))]
    pub fn handle(&mut self, event: UiEvent) -> Result<Option<TodoAction>, TodoError> {
        let action = match event {
            UiEvent::InputChanged { value } => {
                self.input = value;
                return Ok(None);
            }
            UiEvent::AddClicked => {
                let text = std::mem::take(&mut self.input);
                actions::add_task(&self.ids, text)
            }
            UiEvent::TodoClicked { id } => {
                // Only rendered tasks can be clicked; a stale id has nothing to toggle.
                if self.store.state_with(|state| state.get(id).is_none()) {
                    tracing::debug!(%id, "Clicked task does not exist");
                    return Ok(None);
                }
                actions::toggle_task(id)
            }
            UiEvent::FilterClicked { filter } => {
                // The selected filter is rendered as plain text, not a link.
                if self.store.state_with(|state| state.visibility_filter == filter) {
                    tracing::debug!(%filter, "Filter already selected");
                    return Ok(None);
                }
                actions::set_filter(filter)
            }
        };

        tracing::debug!(?action, "Dispatching");
        self.dispatch(action.clone())?;
        Ok(Some(action))
    }

    /// Props for the whole application
    #[must_use]
    pub fn props(&self) -> AppProps {
        containers::app(&self.store.state(), &self.input)
    }

    /// Text rendering of the whole application
    #[must_use]
    pub fn render(&self) -> String {
        render_app(&self.props())
    }
}

impl Default for TodoSession {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
