//! Snapshot storage contracts.
//!
//! # Responsibility
//! - Define the single-slot persistence seam used by the session.
//! - Reject invalid persisted state instead of silently repairing it.
//!
//! # Invariants
//! - A snapshot is the whole task list; saves always overwrite wholesale.
//! - Loaded snapshots must not contain duplicate task ids.
//! - Storage log events carry metadata only, never task text.

use crate::model::task::{Task, TaskId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by snapshot load/save paths.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    /// Snapshot bytes are not a valid JSON task array.
    Malformed(serde_json::Error),
    /// Snapshot contains the same task id more than once.
    DuplicateId(TaskId),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot io failure: {err}"),
            Self::Malformed(err) => write!(f, "malformed snapshot: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate task id in snapshot: {id}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// Single key-value slot holding the serialized task list.
///
/// `load` runs once at session start; `save` runs after every mutation and
/// replaces the slot wholesale.
pub trait SnapshotStorage {
    /// Reads the full snapshot. An absent slot loads as an empty list.
    ///
    /// # Errors
    /// - `StorageError::Malformed` or `StorageError::DuplicateId` when the
    ///   persisted state is invalid.
    /// - `StorageError::Io` on backend failures.
    fn load(&self) -> StorageResult<Vec<Task>>;

    /// Overwrites the snapshot with the given list.
    ///
    /// # Errors
    /// - `StorageError::Io` on backend failures.
    fn save(&mut self, tasks: &[Task]) -> StorageResult<()>;
}

/// Rejects snapshots that violate the unique-id invariant.
///
/// Text is deliberately not re-validated here; emptiness is enforced at
/// creation only.
pub(crate) fn check_unique_ids(tasks: &[Task]) -> StorageResult<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.id) {
            return Err(StorageError::DuplicateId(task.id));
        }
    }
    Ok(())
}
