//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its creation-time validation.
//! - Define the view filter predicate shared by store and UI layers.
//!
//! # Invariants
//! - `Task::id` is unique among current tasks; the store owns id allocation.
//! - Task text is validated once at creation and never re-validated after.

pub mod task;
