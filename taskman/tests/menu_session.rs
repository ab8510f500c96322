//! Full menu sessions driven through the library with a scripted console.
//!
//! Each test scripts a complete stdin conversation and asserts on both the
//! captured output and the persisted file state afterwards.

use std::fs;

use taskman::core::task::Task;
use taskman::menu;
use taskman::test_support::{ScriptedConsole, temp_store};

/// Lines the scripted session printed between `Your Tasks:` and the next
/// menu header, i.e. the rendered task listing.
fn listed_tasks(console: &ScriptedConsole) -> Vec<Vec<String>> {
    let mut listings = Vec::new();
    let mut current: Option<Vec<String>> = None;
    for line in console.output() {
        if line == "Your Tasks:" {
            current = Some(Vec::new());
        } else if let Some(tasks) = current.as_mut() {
            if line.is_empty() || line == "Task Manager" {
                listings.push(current.take().expect("listing"));
            } else {
                tasks.push(line.clone());
            }
        }
    }
    if let Some(tasks) = current {
        listings.push(tasks);
    }
    listings
}

#[test]
fn add_view_complete_remove_session() {
    let (_temp, store) = temp_store().expect("store");
    let mut console = ScriptedConsole::new(&[
        "2", "buy milk", // add
        "2", "walk dog", // add
        "3", "1", // mark first complete
        "1", // view
        "4", "2", // remove second
        "1", // view
        "5", // exit
    ]);
    menu::run(&store, &mut console).expect("run");

    let listings = listed_tasks(&console);
    let last = listings.last().expect("at least one listing");
    assert_eq!(last, &vec!["1. [COMPLETED] buy milk".to_string()]);

    assert_eq!(
        store.load().expect("load"),
        vec![Task::completed("buy milk")]
    );
    assert!(console.wrote("Exiting Task Manager..."));
}

/// Viewing twice with no mutation in between lists identical output.
#[test]
fn view_is_idempotent_without_mutation() {
    let (_temp, store) = temp_store().expect("store");
    store
        .save(&[Task::pending("a"), Task::completed("b")])
        .expect("save");

    let mut console = ScriptedConsole::new(&["1", "1", "5"]);
    menu::run(&store, &mut console).expect("run");

    let listings = listed_tasks(&console);
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0], listings[1]);
    assert_eq!(listings[0], vec!["1. a", "2. [COMPLETED] b"]);
}

/// The persisted bytes survive a whole session of invalid attempts.
#[test]
fn failed_operations_leave_file_bytes_untouched() {
    let (_temp, store) = temp_store().expect("store");
    store
        .save(&[Task::pending("a"), Task::pending("b")])
        .expect("save");
    let before = fs::read_to_string(store.path()).expect("read");

    let mut console = ScriptedConsole::new(&[
        "3", "7", "", // out-of-range mark, then cancel
        "4", "nope", "", // non-numeric remove, then cancel
        "9", // invalid choice
        "5",
    ]);
    menu::run(&store, &mut console).expect("run");

    let after = fs::read_to_string(store.path()).expect("read");
    assert_eq!(before, after);
    assert!(console.wrote("Invalid task index. Please enter a valid index (1 to 2)."));
    assert!(console.wrote("Invalid choice."));
}

#[test]
fn marking_twice_does_not_stack_markers() {
    let (_temp, store) = temp_store().expect("store");
    store.save(&[Task::pending("a")]).expect("save");

    let mut console = ScriptedConsole::new(&["3", "1", "3", "1", "5"]);
    menu::run(&store, &mut console).expect("run");

    assert_eq!(
        fs::read_to_string(store.path()).expect("read"),
        "[COMPLETED] a\n"
    );
}

#[test]
fn blank_task_is_accepted_then_filtered_on_reload() {
    let (_temp, store) = temp_store().expect("store");
    let mut console = ScriptedConsole::new(&["2", "", "5"]);
    menu::run(&store, &mut console).expect("run");

    assert!(console.wrote("Task added successfully!"));
    assert_eq!(store.load().expect("load"), Vec::new());
}
