//! In-process snapshot backend.
//!
//! # Responsibility
//! - Provide a snapshot slot without touching the filesystem, for tests and
//!   ephemeral sessions.
//!
//! # Invariants
//! - Load applies the same snapshot validation as the file backend.

use super::{check_unique_ids, SnapshotStorage, StorageResult};
use crate::model::task::Task;

/// Snapshot slot held in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Vec<Task>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with tasks, as if a prior session saved them.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { slot: tasks }
    }

    /// Direct view of the slot contents, for assertions.
    pub fn snapshot(&self) -> &[Task] {
        &self.slot
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Vec<Task>> {
        check_unique_ids(&self.slot)?;
        Ok(self.slot.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        self.slot = tasks.to_vec();
        Ok(())
    }
}
