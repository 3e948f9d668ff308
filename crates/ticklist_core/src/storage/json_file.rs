//! JSON file snapshot backend.
//!
//! # Responsibility
//! - Persist the task list as one JSON array in a single file.
//! - Keep saves atomic so a crash never leaves a half-written slot.
//!
//! # Invariants
//! - A missing file loads as an empty list; any other read failure surfaces.
//! - Saves write a sibling temp file first, then rename over the slot.

use super::{check_unique_ids, SnapshotStorage, StorageResult};
use crate::model::task::Task;
use log::{error, info};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Snapshot slot backed by one JSON file on disk.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path used for the write-then-rename save.
    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<Vec<Task>> {
        let started_at = Instant::now();

        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=snapshot_load module=storage status=ok mode=absent count=0 duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=snapshot_load module=storage status=error error_code=read_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        let tasks: Vec<Task> = match serde_json::from_slice(&bytes) {
            Ok(tasks) => tasks,
            Err(err) => {
                error!(
                    "event=snapshot_load module=storage status=error error_code=malformed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };
        check_unique_ids(&tasks)?;

        info!(
            "event=snapshot_load module=storage status=ok mode=file count={} duration_ms={}",
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        Ok(tasks)
    }

    fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        let started_at = Instant::now();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec(tasks)?;
        let temp_path = self.temp_path();
        let result = std::fs::write(&temp_path, &bytes)
            .and_then(|()| std::fs::rename(&temp_path, &self.path));

        match result {
            Ok(()) => {
                info!(
                    "event=snapshot_save module=storage status=ok count={} bytes={} duration_ms={}",
                    tasks.len(),
                    bytes.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=snapshot_save module=storage status=error error_code=write_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}
