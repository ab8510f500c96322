//! Parsing of raw user input lines into menu choices and task indexes.

/// One of the five menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    View,
    Add,
    Complete,
    Remove,
    Exit,
}

/// Parse a menu selection. Whitespace is ignored; anything that is not
/// `1`..`5` is an invalid choice.
pub fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim() {
        "1" => Some(Choice::View),
        "2" => Some(Choice::Add),
        "3" => Some(Choice::Complete),
        "4" => Some(Choice::Remove),
        "5" => Some(Choice::Exit),
        _ => None,
    }
}

/// Result of parsing a task-index prompt answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexInput {
    /// Empty line: the user backs out to the menu.
    Cancel,
    /// Not a non-negative integer. Treated like an out-of-range index.
    Invalid,
    /// A parsed 1-based index, not yet range-checked.
    Index(usize),
}

pub fn parse_index(line: &str) -> IndexInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return IndexInput::Cancel;
    }
    match trimmed.parse::<usize>() {
        Ok(index) => IndexInput::Index(index),
        Err(_) => IndexInput::Invalid,
    }
}
