//! Pure state-to-view projection.
//!
//! # Responsibility
//! - Project `(tasks, filter)` into a display-ready view model.
//! - Derive the remaining-count label and clear-control enabled state.
//!
//! # Invariants
//! - Projection never mutates state and is idempotent: same input, same view.
//! - Counters are computed over the whole list, not the filtered subset.

use crate::model::task::{Filter, Task, TaskId};
use std::fmt::Write as _;

/// One visible row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowView {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Display-ready projection of the task list under one filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub filter: Filter,
    /// Tasks visible under `filter`, in list order.
    pub rows: Vec<TaskRowView>,
    /// e.g. `3 tasks remaining` / `1 task remaining`, over the whole list.
    pub remaining_label: String,
    /// Whether the clear-completed control should be offered.
    pub clear_enabled: bool,
    /// Hint shown instead of rows when the visible list is empty.
    pub empty_hint: Option<String>,
}

/// Projects the full task list into a view for the given filter.
pub fn project(tasks: &[Task], filter: Filter) -> TaskListView {
    let rows: Vec<TaskRowView> = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .map(|task| TaskRowView {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
        })
        .collect();

    let remaining = tasks.iter().filter(|task| task.is_active()).count();
    let clear_enabled = tasks.iter().any(|task| task.completed);

    let empty_hint = if rows.is_empty() {
        Some(match filter {
            Filter::All => "No tasks yet. Add a task to get started!".to_string(),
            Filter::Active => "No tasks active".to_string(),
            Filter::Completed => "No tasks completed".to_string(),
        })
    } else {
        None
    };

    TaskListView {
        filter,
        rows,
        remaining_label: remaining_label(remaining),
        clear_enabled,
        empty_hint,
    }
}

fn remaining_label(remaining: usize) -> String {
    let plural = if remaining == 1 { "" } else { "s" };
    format!("{remaining} task{plural} remaining")
}

impl TaskListView {
    /// Formats the view for a terminal.
    ///
    /// Rows are numbered by their position in the visible list; front ends
    /// map those positions back to ids through `rows`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(hint) = &self.empty_hint {
            out.push_str(hint);
            out.push('\n');
        }
        for (position, row) in self.rows.iter().enumerate() {
            let marker = if row.completed { 'x' } else { ' ' };
            let _ = writeln!(out, "{:>3}. [{marker}] {}", position + 1, row.text);
        }

        out.push_str(&self.remaining_label);
        if self.filter != Filter::All {
            let _ = write!(out, " (filter: {})", self.filter);
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{project, remaining_label};
    use crate::model::task::{Filter, Task};

    #[test]
    fn remaining_label_pluralizes() {
        assert_eq!(remaining_label(0), "0 tasks remaining");
        assert_eq!(remaining_label(1), "1 task remaining");
        assert_eq!(remaining_label(2), "2 tasks remaining");
    }

    #[test]
    fn empty_hint_depends_on_filter() {
        let view = project(&[], Filter::All);
        assert_eq!(
            view.empty_hint.as_deref(),
            Some("No tasks yet. Add a task to get started!")
        );

        let view = project(&[], Filter::Active);
        assert_eq!(view.empty_hint.as_deref(), Some("No tasks active"));
    }

    #[test]
    fn counters_cover_the_whole_list_not_the_filtered_subset() {
        let mut done = Task::new(1, "done", 1);
        done.completed = true;
        let tasks = vec![Task::new(2, "open", 2), done];

        let view = project(&tasks, Filter::Active);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.remaining_label, "1 task remaining");
        assert!(view.clear_enabled);
    }
}
