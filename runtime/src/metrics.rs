//! Metric names and descriptions recorded by the Store.
//!
//! The Store records through the [`metrics`] facade only. Without an
//! installed recorder every macro call is a no-op, so applications decide
//! whether and where metrics are exported.
//!
//! # Example
//!
//! ```
//! // Call once after installing a recorder so exporters can show help text.
//! statecraft_runtime::metrics::describe_metrics();
//! ```

use metrics::{Unit, describe_counter, describe_gauge, describe_histogram};

// Re-export metrics macros for use in other modules
pub use metrics::{counter, gauge, histogram};

/// Total number of actions reduced by any store
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Actions rejected because the store was shut down
pub const REJECTED_ACTIONS: &str = "store.shutdown.rejected_actions";

/// Time spent inside the root reducer per action
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";

/// Number of listeners notified after each transition
pub const LISTENERS_NOTIFIED: &str = "store.listeners.notified";

/// Listeners currently registered
pub const LISTENERS_ACTIVE: &str = "store.listeners.active";

/// Register descriptions for every metric emitted by this crate.
pub fn describe_metrics() {
    describe_counter!(ACTIONS_TOTAL, Unit::Count, "Actions reduced by the store");
    describe_counter!(
        REJECTED_ACTIONS,
        Unit::Count,
        "Actions rejected because the store was shutting down"
    );
    describe_histogram!(
        REDUCER_DURATION,
        Unit::Seconds,
        "Root reducer execution time per action"
    );
    describe_histogram!(
        LISTENERS_NOTIFIED,
        Unit::Count,
        "Listeners notified after a state transition"
    );
    describe_gauge!(LISTENERS_ACTIVE, Unit::Count, "Registered store listeners");
}
