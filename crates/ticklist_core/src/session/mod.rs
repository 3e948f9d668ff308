//! Task session orchestration.
//!
//! # Responsibility
//! - Own store, snapshot storage and filter state for one app run.
//! - Enforce the one-way flow: mutate store, persist snapshot, project view.
//!
//! # Invariants
//! - The snapshot is loaded exactly once, at open.
//! - Every mutation that changed the list is followed by a wholesale save.
//! - Filter changes never touch storage.

use crate::model::task::{Filter, TaskId, TaskValidationError};
use crate::storage::{SnapshotStorage, StorageError};
use crate::store::TaskStore;
use crate::view::{project, TaskListView};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Error surfaced by session operations.
#[derive(Debug)]
pub enum SessionError {
    Validation(TaskValidationError),
    Storage(StorageError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for SessionError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for SessionError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// One app run over a snapshot slot.
///
/// Persist failures surface after the in-memory mutation already happened;
/// the session reports them and keeps the mutated list, it does not roll
/// back.
pub struct TaskSession<S: SnapshotStorage> {
    store: TaskStore,
    storage: S,
    filter: Filter,
}

impl<S: SnapshotStorage> TaskSession<S> {
    /// Loads the snapshot and starts a session with the default filter.
    ///
    /// # Errors
    /// - Propagates storage errors for unreadable or invalid snapshots.
    pub fn open(storage: S) -> SessionResult<Self> {
        let tasks = storage.load()?;
        info!(
            "event=session_open module=session status=ok count={}",
            tasks.len()
        );
        Ok(Self {
            store: TaskStore::from_snapshot(tasks),
            storage,
            filter: Filter::default(),
        })
    }

    /// Adds a task and persists the snapshot.
    ///
    /// # Errors
    /// - Validation error on empty text; the list and slot are unchanged.
    /// - Storage error when the save fails.
    pub fn add(&mut self, text: &str) -> SessionResult<TaskId> {
        let id = self.store.add(text)?;
        self.persist()?;
        info!(
            "event=task_add module=session status=ok id={id} count={}",
            self.store.len()
        );
        Ok(id)
    }

    /// Deletes by id and persists when something was removed.
    ///
    /// Returns whether a task matched. A missing id is a no-op and skips the
    /// save.
    ///
    /// # Errors
    /// - Storage error when the save fails.
    pub fn delete(&mut self, id: TaskId) -> SessionResult<bool> {
        if !self.store.delete(id) {
            return Ok(false);
        }
        self.persist()?;
        info!(
            "event=task_delete module=session status=ok id={id} count={}",
            self.store.len()
        );
        Ok(true)
    }

    /// Toggles completion by id and persists when an id matched.
    ///
    /// # Errors
    /// - Storage error when the save fails.
    pub fn toggle(&mut self, id: TaskId) -> SessionResult<bool> {
        if !self.store.toggle(id) {
            return Ok(false);
        }
        self.persist()?;
        info!(
            "event=task_toggle module=session status=ok id={id} remaining={}",
            self.store.remaining_count()
        );
        Ok(true)
    }

    /// Removes all completed tasks and persists when any were removed.
    ///
    /// Returns how many tasks were cleared. Confirmation is the caller's job.
    ///
    /// # Errors
    /// - Storage error when the save fails.
    pub fn clear_completed(&mut self) -> SessionResult<usize> {
        let cleared = self.store.clear_completed();
        if cleared == 0 {
            return Ok(0);
        }
        self.persist()?;
        info!(
            "event=clear_completed module=session status=ok cleared={cleared} count={}",
            self.store.len()
        );
        Ok(cleared)
    }

    /// Switches the view predicate. Never persists.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Projects the current state. Pure and idempotent.
    pub fn view(&self) -> TaskListView {
        project(self.store.tasks(), self.filter)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    fn persist(&mut self) -> SessionResult<()> {
        self.storage.save(self.store.tasks())?;
        Ok(())
    }
}
