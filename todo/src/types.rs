//! Domain types for the Todo application.
//!
//! A todo list is an ordered collection of tasks plus the filter that decides
//! which of them are shown. Tasks are only ever added and toggled; nothing is
//! deleted.

use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Identifier of a task, assigned by [`crate::actions::IdAllocator`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Returns the raw numeric id
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Description entered by the user
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Creates a new, not yet completed task
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Returns a copy with `completed` inverted
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Ordered task collection; insertion order is creation order.
///
/// Tasks are shared between successive states, so a transition only
/// allocates for the tasks it actually changes.
pub type TaskList = Vec<Arc<Task>>;

/// Which tasks are visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VisibilityFilter {
    /// Every task
    #[default]
    ShowAll,
    /// Tasks not yet completed
    ShowActive,
    /// Completed tasks
    ShowCompleted,
}

impl VisibilityFilter {
    /// Every filter, in the order they are offered to the user
    pub const ALL: [Self; 3] = [Self::ShowAll, Self::ShowActive, Self::ShowCompleted];

    /// Wire name (`SHOW_ALL`, `SHOW_ACTIVE`, `SHOW_COMPLETED`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowAll => "SHOW_ALL",
            Self::ShowActive => "SHOW_ACTIVE",
            Self::ShowCompleted => "SHOW_COMPLETED",
        }
    }

    /// Whether a task with the given completion flag passes this filter
    #[must_use]
    pub const fn admits(self, completed: bool) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowActive => !completed,
            Self::ShowCompleted => completed,
        }
    }
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisibilityFilter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| TodoError::InvalidFilter(s.to_string()))
    }
}

impl TryFrom<String> for VisibilityFilter {
    type Error = TodoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VisibilityFilter> for String {
    fn from(filter: VisibilityFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Composite application state
///
/// This is the only source of truth; visible tasks and counters are derived
/// from it (see [`crate::selectors`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoState {
    /// All tasks in creation order
    #[serde(rename = "todos")]
    pub tasks: TaskList,
    /// Currently selected filter
    pub visibility_filter: VisibilityFilter,
}

impl TodoState {
    /// Creates the initial state: no tasks, every task visible
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Arc<Task>> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// Actions accepted by the todo reducers
///
/// Serialized as a record tagged by `type`, e.g.
/// `{"type":"ADD_TODO","id":0,"text":"Learn Redux"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TodoAction {
    /// Append a new task
    #[serde(rename = "ADD_TODO")]
    AddTask {
        /// Identifier of the new task
        id: TaskId,
        /// Description of the new task
        text: String,
    },

    /// Flip `completed` on the task with this id
    #[serde(rename = "TOGGLE_TODO")]
    ToggleTask {
        /// Task to toggle
        id: TaskId,
    },

    /// Select which tasks are visible
    #[serde(rename = "SET_VISIBILITY_FILTER")]
    SetFilter {
        /// New filter
        filter: VisibilityFilter,
    },
}

impl TodoAction {
    /// Parse an action from its JSON form
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidFilter`] for a `SET_VISIBILITY_FILTER`
    /// action naming an unknown filter, and [`TodoError::MalformedAction`] for
    /// anything else that is not a valid action.
    pub fn from_json(json: &str) -> Result<Self, TodoError> {
        #[derive(Deserialize)]
        struct RawFilter {
            #[serde(rename = "type")]
            kind: String,
            filter: Option<String>,
        }

        // Surface unknown filters as their own error kind instead of a generic
        // deserialization failure.
        if let Ok(RawFilter {
            kind,
            filter: Some(filter),
        }) = serde_json::from_str::<RawFilter>(json)
        {
            if kind == "SET_VISIBILITY_FILTER" {
                return Ok(Self::SetFilter {
                    filter: filter.parse()?,
                });
            }
        }

        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the JSON form
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::MalformedAction`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TodoError> {
        Ok(serde_json::to_string(self)?)
    }
}
