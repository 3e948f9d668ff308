//! Core domain logic for Ticklist.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod session;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Filter, Task, TaskId, TaskValidationError};
pub use session::{SessionError, SessionResult, TaskSession};
pub use storage::{
    JsonFileStorage, MemoryStorage, SnapshotStorage, StorageError, StorageResult,
};
pub use store::TaskStore;
pub use view::{project, TaskListView, TaskRowView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
