//! Flat-file persistence for the task list.
//!
//! One task per line, UTF-8, newline-separated. The whole file is read on
//! every load and rewritten on every save; there is no locking, so
//! concurrent writers from separate processes race (last writer wins).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::task::Task;

/// Store bound to a single backing file.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full task list.
    ///
    /// Lines are whitespace-trimmed and empty lines dropped, which also
    /// swallows the empty element a trailing newline would otherwise
    /// produce. A missing file is an empty list, not an error; any other
    /// read failure propagates.
    pub fn load(&self) -> Result<Vec<Task>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no backing file, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()));
            }
        };
        let tasks: Vec<Task> = contents
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Task::parse_line)
            .collect();
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the backing file with the full list, one line per task,
    /// trailing newline included. Creates the file on first save.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let mut buf = tasks
            .iter()
            .map(Task::to_line)
            .collect::<Vec<_>>()
            .join("\n");
        buf.push('\n');
        fs::write(&self.path, buf).with_context(|| format!("write {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
