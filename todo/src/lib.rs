//! Todo list built from small pure reducers.
//!
//! The application state is a list of tasks plus a visibility filter. It is
//! only ever changed by dispatching a [`TodoAction`] to a store, which runs
//! the combined [`TodoAppReducer`] and notifies subscribers.
//!
//! - [`types`]: tasks, filters, state and actions (with their JSON form)
//! - [`reducer`]: per-slice reducers and their composition
//! - [`selectors`]: derived views such as the visible tasks
//! - [`actions`]: action creators and the per-session id allocator
//! - [`view`] / [`containers`]: presentational props and text renderers
//! - [`session`]: a store bound to the view layer
//!
//! # Quick Start
//!
//! ```
//! use statecraft_runtime::Store;
//! use todo::{TaskId, TodoAction, TodoAppReducer, TodoState};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(TodoAppReducer::new());
//!
//! store.send(TodoAction::AddTask {
//!     id: TaskId(1),
//!     text: "Play synthesizers".to_string(),
//! })?;
//! store.send(TodoAction::ToggleTask { id: TaskId(1) })?;
//!
//! let state: std::sync::Arc<TodoState> = store.state();
//! assert!(state.tasks[0].completed);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod containers;
pub mod error;
pub mod reducer;
pub mod selectors;
pub mod session;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use actions::IdAllocator;
pub use config::Config;
pub use error::TodoError;
pub use reducer::{TaskReducer, TasksReducer, TodoAppReducer, VisibilityFilterReducer, reduce_root};
pub use session::{TodoSession, TodoStore, UiEvent};
pub use types::{Task, TaskId, TaskList, TodoAction, TodoState, VisibilityFilter};
