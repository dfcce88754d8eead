//! Presentational components.
//!
//! Components here only know their props: they neither read the store nor
//! create actions. Each component is a props struct plus a text renderer; the
//! containers in [`crate::containers`] compute the props from state.

use crate::types::{Task, TaskId, VisibilityFilter};
use serde::Serialize;
use std::fmt::Write as _;

/// One line of the todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoRow {
    /// Task id, reported back when the row is clicked
    pub id: TaskId,
    /// Task text
    pub text: String,
    /// Completed rows are struck through
    pub completed: bool,
}

impl From<&Task> for TodoRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
        }
    }
}

/// Props of the todo list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoListProps {
    /// Rows in display order
    pub rows: Vec<TodoRow>,
}

/// Props of one filter link
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterLinkProps {
    /// Filter selected when the link is clicked
    pub filter: VisibilityFilter,
    /// Link text
    pub label: &'static str,
    /// The currently selected filter renders as plain text, not a link
    pub active: bool,
}

/// Props of the footer holding the filter links
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterProps {
    /// One link per filter
    pub links: Vec<FilterLinkProps>,
    /// Number of tasks still open
    pub active_count: usize,
}

/// Props of the whole application
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppProps {
    /// Current content of the new-task input
    pub input: String,
    /// Visible tasks
    pub list: TodoListProps,
    /// Filter links
    pub footer: FooterProps,
}

/// Label shown for a filter link
#[must_use]
pub const fn filter_label(filter: VisibilityFilter) -> &'static str {
    match filter {
        VisibilityFilter::ShowAll => "ALL",
        VisibilityFilter::ShowActive => "ACTIVE",
        VisibilityFilter::ShowCompleted => "COMPLETED",
    }
}

/// Renders the new-task input and its button
#[must_use]
pub fn render_add_todo(input: &str) -> String {
    format!("> {input}_ [Add Todo]")
}

/// Renders one row
#[must_use]
pub fn render_todo(row: &TodoRow) -> String {
    if row.completed {
        format!("  {:>3}. ~~{}~~", row.id, row.text)
    } else {
        format!("  {:>3}. {}", row.id, row.text)
    }
}

/// Renders the todo list, one row per line
#[must_use]
pub fn render_todo_list(props: &TodoListProps) -> String {
    if props.rows.is_empty() {
        return "  (nothing to show)".to_string();
    }

    props
        .rows
        .iter()
        .map(render_todo)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a filter link; the active one is not clickable
#[must_use]
pub fn render_filter_link(props: &FilterLinkProps) -> String {
    if props.active {
        props.label.to_string()
    } else {
        format!("[{}]", props.label)
    }
}

/// Renders the footer: the filter links followed by the open-task count
#[must_use]
pub fn render_footer(props: &FooterProps) -> String {
    let links = props
        .links
        .iter()
        .map(render_filter_link)
        .collect::<Vec<_>>()
        .join(" ");

    format!("Show: {links}  ({} left)", props.active_count)
}

/// Renders the whole application
#[must_use]
pub fn render_app(props: &AppProps) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", render_add_todo(&props.input));
    let _ = writeln!(out, "{}", render_todo_list(&props.list));
    let _ = write!(out, "{}", render_footer(&props.footer));
    out
}
