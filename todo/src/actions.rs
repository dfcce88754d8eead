//! Action creators.
//!
//! `AddTask` actions need a fresh id. Ids come from an [`IdAllocator`] owned by
//! whoever owns the store (see [`crate::session::TodoSession`]), so two
//! sessions in one process never hand out ids from the same counter.

use crate::types::{TaskId, TodoAction, VisibilityFilter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic task id source
///
/// Starts at 0, advances once per [`add_task`] call and is never reset.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Creates an allocator whose first id is 0
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates an allocator whose first id is `first`
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Hands out the next id
    pub fn allocate(&self) -> TaskId {
        TaskId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to [`IdAllocator::allocate`] will return
    #[must_use]
    pub fn peek(&self) -> TaskId {
        TaskId(self.next.load(Ordering::Relaxed))
    }
}

/// Builds an `AddTask` action stamped with a fresh id
pub fn add_task(ids: &IdAllocator, text: impl Into<String>) -> TodoAction {
    TodoAction::AddTask {
        id: ids.allocate(),
        text: text.into(),
    }
}

/// Builds a `ToggleTask` action
#[must_use]
pub const fn toggle_task(id: TaskId) -> TodoAction {
    TodoAction::ToggleTask { id }
}

/// Builds a `SetFilter` action
#[must_use]
pub const fn set_filter(filter: VisibilityFilter) -> TodoAction {
    TodoAction::SetFilter { filter }
}
