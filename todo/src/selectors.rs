//! Derived views over [`TodoState`].
//!
//! Nothing here is stored; every view is recomputed from the state on demand.

use crate::types::{Task, TodoState, VisibilityFilter};
use std::sync::Arc;

/// Tasks passing `filter`, in their original order
///
/// The returned tasks are shared with the state they came from.
#[must_use]
pub fn visible_tasks(tasks: &[Arc<Task>], filter: VisibilityFilter) -> Vec<Arc<Task>> {
    tasks
        .iter()
        .filter(|task| filter.admits(task.completed))
        .cloned()
        .collect()
}

/// Number of tasks not yet completed
#[must_use]
pub fn active_count(tasks: &[Arc<Task>]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

/// Number of completed tasks
#[must_use]
pub fn completed_count(tasks: &[Arc<Task>]) -> usize {
    tasks.len() - active_count(tasks)
}

impl TodoState {
    /// Tasks visible under the current filter
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<Arc<Task>> {
        visible_tasks(&self.tasks, self.visibility_filter)
    }
}
