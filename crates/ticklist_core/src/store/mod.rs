//! In-memory task store.
//!
//! # Responsibility
//! - Own the ordered task list and every mutation over it.
//! - Allocate unique, timestamp-derived task ids.
//!
//! # Invariants
//! - The list keeps newest-first insertion order; `add` always prepends.
//! - Ids stay unique even for same-millisecond creations.
//! - Mutations on a missing id are no-ops, never errors.

use crate::model::task::{Filter, Task, TaskId, TaskValidationError};
use std::time::{SystemTime, UNIX_EPOCH};

/// Owner of the in-memory task list.
///
/// Every operation is a synchronous total transform; persistence and view
/// recomputation are layered on top by the session.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a loaded snapshot, preserving its order.
    pub fn from_snapshot(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Adds a task with the given text, prepending it to the list.
    ///
    /// The text is trimmed before validation and storage. Returns the id of
    /// the created task.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when the trimmed text is empty; the
    ///   list is left unchanged.
    pub fn add(&mut self, text: &str) -> Result<TaskId, TaskValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }

        let created_at = now_epoch_ms();
        let id = self.fresh_id(created_at);
        self.tasks.insert(0, Task::new(id, trimmed, created_at));
        Ok(id)
    }

    /// Removes the task with matching id. Returns whether a task was removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Flips `completed` on the matching task. Returns whether an id matched.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Removes all completed tasks. Returns how many were removed.
    ///
    /// Unconditional by design; asking the user for confirmation is a
    /// front-end concern.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_active);
        before - self.tasks.len()
    }

    /// Returns the tasks visible under `filter`, in list order. Pure.
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| filter.matches(task))
            .collect()
    }

    /// Count of tasks not yet completed.
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_active()).count()
    }

    /// Count of completed tasks. Drives the clear-control enabled state.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Full list in newest-first order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Allocates an id at or after `candidate` that no current task uses.
    ///
    /// Ids are timestamps, so same-millisecond adds would collide; bumping
    /// past the highest id in the list keeps them unique and keeps newer
    /// tasks carrying larger ids.
    fn fresh_id(&self, candidate: TaskId) -> TaskId {
        match self.tasks.iter().map(|task| task.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}
