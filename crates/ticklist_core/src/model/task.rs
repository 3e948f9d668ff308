//! Task record and filter types.
//!
//! # Responsibility
//! - Define the persisted task shape used by store, storage and view layers.
//! - Provide trim-based text validation for the add entry point.
//!
//! # Invariants
//! - `id` doubles as the creation timestamp in epoch milliseconds.
//! - `text` is stored trimmed and is non-empty at creation time.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task.
///
/// Holds the creation timestamp in Unix epoch milliseconds. The store bumps
/// colliding values so the id stays unique within one list.
pub type TaskId = i64;

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, derived from creation time.
    pub id: TaskId,
    /// Trimmed, non-empty at creation. Not re-validated after load.
    pub text: String,
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates an open task with caller-allocated id and creation time.
    ///
    /// Id allocation and text validation are the store's job; this
    /// constructor only shapes the record.
    pub fn new(id: TaskId, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
        }
    }

    /// Returns whether this task still counts toward the remaining total.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Validation error raised by the add entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text was empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// View predicate over completion state.
///
/// UI-session state only; never persisted with the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Returns whether `task` is visible under this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Parses user input case-insensitively. Returns `None` for unknown names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
