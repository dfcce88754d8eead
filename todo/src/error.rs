//! Error types for the Todo application.

use statecraft_runtime::StoreError;
use thiserror::Error;

/// Errors raised at the boundaries of the todo application
///
/// Reducers themselves never fail; these errors come from parsing external
/// input and from the store.
#[derive(Error, Debug)]
pub enum TodoError {
    /// A visibility filter name outside `SHOW_ALL`, `SHOW_ACTIVE`, `SHOW_COMPLETED`
    #[error("Invalid visibility filter {0:?} (expected SHOW_ALL, SHOW_ACTIVE or SHOW_COMPLETED)")]
    InvalidFilter(String),

    /// Input that does not describe any known action
    #[error("Malformed action: {0}")]
    MalformedAction(#[from] serde_json::Error),

    /// The store rejected an action or a listener
    #[error(transparent)]
    Store(#[from] StoreError),
}
