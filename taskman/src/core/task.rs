//! Task model and its one-line text format.

/// Prefix a stored line carries when its task is completed.
pub const COMPLETED_MARKER: &str = "[COMPLETED] ";

/// A single to-do item.
///
/// Completion is a flag on the struct, not part of the text. The stored and
/// displayed form derives the `[COMPLETED] ` prefix at serialization time,
/// so marking a task complete twice cannot stack markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn pending(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    pub fn completed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: true,
        }
    }

    /// Parse one stored line into a task.
    ///
    /// Consumes at most one marker prefix: a legacy double-marked line keeps
    /// the extra marker in its text, so `to_line` reproduces the input bytes.
    pub fn parse_line(line: &str) -> Self {
        match line.strip_prefix(COMPLETED_MARKER) {
            Some(rest) => Self::completed(rest),
            None => Self::pending(line),
        }
    }

    /// Serialized line form; also the displayed form.
    pub fn to_line(&self) -> String {
        if self.completed {
            format!("{}{}", COMPLETED_MARKER, self.text)
        } else {
            self.text.clone()
        }
    }
}
