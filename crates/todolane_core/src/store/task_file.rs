//! Task-list JSON file IO.
//!
//! # Responsibility
//! - Load and save the persisted task list as one JSON array file.
//!
//! # Invariants
//! - A missing file reads as an empty task list; any other IO failure
//!   propagates.
//! - Writes replace the whole file; there is no partial update.

use crate::model::task::Task;
use crate::store::{codec, StoreResult};
use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the task list from `path`.
///
/// A missing file is not an error: the data file starts out absent on first
/// run, so this returns an empty list and logs the fact.
pub fn read_tasks(path: &Path) -> StoreResult<Vec<Task>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=tasks_loaded module=store status=ok count=0 path={} reason=missing_file",
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let tasks = codec::tasks_from_json(&raw)?;
    info!(
        "event=tasks_loaded module=store status=ok count={} path={}",
        tasks.len(),
        path.display()
    );
    Ok(tasks)
}

/// Writes the task list to `path`, replacing any existing content.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> StoreResult<()> {
    let json = codec::tasks_to_json(tasks)?;
    fs::write(path, json)?;
    info!(
        "event=tasks_saved module=store status=ok count={} path={}",
        tasks.len(),
        path.display()
    );
    Ok(())
}
