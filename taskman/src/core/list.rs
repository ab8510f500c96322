//! Pure transformations over the ordered task list.
//!
//! All mutating operations validate their 1-based index before touching the
//! list, so a rejected call leaves the list (and anything persisted from it)
//! untouched.

use std::fmt;

use crate::core::task::Task;

/// A 1-based index outside the valid `1..=len` range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexError {
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid task index. Please enter a valid index (1 to {}).",
            self.len
        )
    }
}

impl std::error::Error for IndexError {}

/// Append a pending task with `text` verbatim (blank text included).
pub fn add(tasks: &mut Vec<Task>, text: impl Into<String>) {
    tasks.push(Task::pending(text));
}

/// Mark the task at 1-based `index` completed. Idempotent on an
/// already-completed task.
pub fn mark_complete(tasks: &mut [Task], index: usize) -> Result<(), IndexError> {
    let slot = checked_slot(tasks.len(), index)?;
    tasks[slot].completed = true;
    Ok(())
}

/// Delete the task at 1-based `index`, shifting later tasks down by one.
pub fn remove(tasks: &mut Vec<Task>, index: usize) -> Result<Task, IndexError> {
    let slot = checked_slot(tasks.len(), index)?;
    Ok(tasks.remove(slot))
}

/// Render the list as 1-based numbered display lines.
pub fn render(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}", i + 1, task.to_line()))
        .collect()
}

/// Check a 1-based index against `len`, returning the 0-based slot.
pub fn checked_slot(len: usize, index: usize) -> Result<usize, IndexError> {
    if index < 1 || index > len {
        return Err(IndexError { len });
    }
    Ok(index - 1)
}
