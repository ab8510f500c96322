//! Interactive menu controller.
//!
//! Shows the five-entry menu, reads a choice, dispatches to an operation,
//! and loops until exit or end of input. Every operation loads the list
//! fresh from the store, applies a pure `core::list` transformation, and
//! saves before returning to the menu; nothing is saved when validation
//! rejects the input.

use anyhow::Result;
use tracing::debug;

use crate::core::input::{Choice, IndexInput, parse_choice, parse_index};
use crate::core::list::{self, IndexError};
use crate::core::task::Task;
use crate::io::console::Console;
use crate::io::store::TaskStore;

/// Attempts allowed per index prompt before giving up and returning to
/// the menu. Bounds what was an unbounded retry in earlier versions.
const MAX_INDEX_ATTEMPTS: u32 = 3;

const MENU: &[&str] = &[
    "",
    "Task Manager",
    "1. View Tasks",
    "2. Add Task",
    "3. Mark Task Complete",
    "4. Remove Task",
    "5. Exit",
];

/// Whether the session continues after an operation.
enum Flow {
    Continue,
    Quit,
}

/// What an index prompt produced.
enum IndexOutcome {
    /// A range-checked 1-based index.
    Chosen(usize),
    /// The user backed out (empty line) or exhausted their attempts.
    Cancelled,
    /// End of input mid-prompt.
    Quit,
}

/// Run the interactive session until the user exits or input ends.
///
/// I/O errors from the store or console propagate; the caller reports
/// them and terminates.
pub fn run<C: Console>(store: &TaskStore, console: &mut C) -> Result<()> {
    loop {
        for line in MENU {
            console.write_line(line)?;
        }
        console.write_line("Enter your choice:")?;
        let Some(line) = console.read_line()? else {
            break;
        };
        let choice = parse_choice(&line);
        debug!(?choice, "menu dispatch");
        match choice {
            Some(Choice::View) => view(store, console)?,
            Some(Choice::Add) => {
                if let Flow::Quit = add(store, console)? {
                    break;
                }
            }
            Some(Choice::Complete) => {
                if let Flow::Quit = mark_complete(store, console)? {
                    break;
                }
            }
            Some(Choice::Remove) => {
                if let Flow::Quit = remove(store, console)? {
                    break;
                }
            }
            Some(Choice::Exit) => {
                console.write_line("Exiting Task Manager...")?;
                break;
            }
            None => console.write_line("Invalid choice.")?,
        }
    }
    Ok(())
}

fn view<C: Console>(store: &TaskStore, console: &mut C) -> Result<()> {
    let tasks = store.load()?;
    display_tasks(&tasks, console)
}

fn add<C: Console>(store: &TaskStore, console: &mut C) -> Result<Flow> {
    console.write_line("Enter a new task:")?;
    let Some(text) = console.read_line()? else {
        return Ok(Flow::Quit);
    };
    let mut tasks = store.load()?;
    list::add(&mut tasks, text);
    store.save(&tasks)?;
    console.write_line("Task added successfully!")?;
    Ok(Flow::Continue)
}

fn mark_complete<C: Console>(store: &TaskStore, console: &mut C) -> Result<Flow> {
    let mut tasks = store.load()?;
    display_tasks(&tasks, console)?;
    let prompt = "Enter the index of the task to mark complete:";
    match prompt_index(console, prompt, tasks.len())? {
        IndexOutcome::Quit => Ok(Flow::Quit),
        IndexOutcome::Cancelled => Ok(Flow::Continue),
        IndexOutcome::Chosen(index) => {
            if let Err(err) = list::mark_complete(&mut tasks, index) {
                console.write_line(&err.to_string())?;
                return Ok(Flow::Continue);
            }
            store.save(&tasks)?;
            console.write_line("Task marked as completed.")?;
            Ok(Flow::Continue)
        }
    }
}

fn remove<C: Console>(store: &TaskStore, console: &mut C) -> Result<Flow> {
    let mut tasks = store.load()?;
    display_tasks(&tasks, console)?;
    let prompt = "Enter the index of the task to remove:";
    match prompt_index(console, prompt, tasks.len())? {
        IndexOutcome::Quit => Ok(Flow::Quit),
        IndexOutcome::Cancelled => Ok(Flow::Continue),
        IndexOutcome::Chosen(index) => {
            if let Err(err) = list::remove(&mut tasks, index) {
                console.write_line(&err.to_string())?;
                return Ok(Flow::Continue);
            }
            store.save(&tasks)?;
            console.write_line("Task removed successfully.")?;
            Ok(Flow::Continue)
        }
    }
}

fn display_tasks<C: Console>(tasks: &[Task], console: &mut C) -> Result<()> {
    if tasks.is_empty() {
        return console.write_line("No tasks found.");
    }
    console.write_line("")?;
    console.write_line("Your Tasks:")?;
    for line in list::render(tasks) {
        console.write_line(&line)?;
    }
    Ok(())
}

/// Prompt for a 1-based index against a list of length `len`.
///
/// Invalid or out-of-range answers reprint the range error and re-prompt,
/// up to [`MAX_INDEX_ATTEMPTS`]. An empty line cancels back to the menu.
fn prompt_index<C: Console>(console: &mut C, prompt: &str, len: usize) -> Result<IndexOutcome> {
    for _ in 0..MAX_INDEX_ATTEMPTS {
        console.write_line(prompt)?;
        let Some(line) = console.read_line()? else {
            return Ok(IndexOutcome::Quit);
        };
        match parse_index(&line) {
            IndexInput::Cancel => return Ok(IndexOutcome::Cancelled),
            IndexInput::Invalid => {
                console.write_line(&IndexError { len }.to_string())?;
            }
            IndexInput::Index(index) => match list::checked_slot(len, index) {
                Ok(_) => return Ok(IndexOutcome::Chosen(index)),
                Err(err) => console.write_line(&err.to_string())?,
            },
        }
    }
    console.write_line("Returning to menu.")?;
    Ok(IndexOutcome::Cancelled)
}
