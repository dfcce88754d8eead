//! Container components: map application state to presentational props.

use crate::selectors;
use crate::types::{TodoState, VisibilityFilter};
use crate::view::{AppProps, FilterLinkProps, FooterProps, TodoListProps, TodoRow, filter_label};

/// Props for the list of tasks visible under the current filter
#[must_use]
pub fn visible_todo_list(state: &TodoState) -> TodoListProps {
    TodoListProps {
        rows: state
            .visible_tasks()
            .iter()
            .map(|task| TodoRow::from(task.as_ref()))
            .collect(),
    }
}

/// Props for a filter link, marking it active when its filter is selected
#[must_use]
pub fn filter_link(state: &TodoState, filter: VisibilityFilter) -> FilterLinkProps {
    FilterLinkProps {
        filter,
        label: filter_label(filter),
        active: filter == state.visibility_filter,
    }
}

/// Props for the footer
#[must_use]
pub fn footer(state: &TodoState) -> FooterProps {
    FooterProps {
        links: VisibilityFilter::ALL
            .into_iter()
            .map(|filter| filter_link(state, filter))
            .collect(),
        active_count: selectors::active_count(&state.tasks),
    }
}

/// Props for the whole application
#[must_use]
pub fn app(state: &TodoState, input: &str) -> AppProps {
    AppProps {
        input: input.to_string(),
        list: visible_todo_list(state),
        footer: footer(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Task, TaskId};
    use std::sync::Arc;

    fn state(filter: VisibilityFilter) -> TodoState {
        TodoState {
            tasks: vec![
                Arc::new(Task::new(TaskId(0), "Learn Redux")),
                Arc::new(Task::new(TaskId(1), "Play synthesizers").toggled()),
            ],
            visibility_filter: filter,
        }
    }

    #[test]
    fn list_follows_filter() {
        let rows = visible_todo_list(&state(VisibilityFilter::ShowActive)).rows;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "Learn Redux");

        let rows = visible_todo_list(&state(VisibilityFilter::ShowAll)).rows;
        assert_eq!(rows.len(), 2);
        assert!(rows[1].completed);
    }

    #[test]
    fn only_selected_filter_is_active() {
        let props = footer(&state(VisibilityFilter::ShowCompleted));

        let active: Vec<_> = props
            .links
            .iter()
            .filter(|link| link.active)
            .map(|link| link.filter)
            .collect();
        assert_eq!(active, vec![VisibilityFilter::ShowCompleted]);
        assert_eq!(props.active_count, 1);
    }

    #[test]
    fn app_carries_input() {
        let props = app(&state(VisibilityFilter::ShowAll), "Buy milk");
        assert_eq!(props.input, "Buy milk");
        assert_eq!(props.list.rows.len(), 2);
        assert_eq!(props.footer.links.len(), 3);
    }
}
