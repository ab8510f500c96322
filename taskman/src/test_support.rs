//! Test-only helpers: a scripted console and temp-backed stores.

use std::collections::VecDeque;

use anyhow::{Context, Result};

use crate::io::console::Console;
use crate::io::store::TaskStore;

/// [`Console`] double fed from a fixed input script, capturing output.
///
/// `read_line` pops scripted lines in order and reports end of input once
/// the script is exhausted, which mirrors a user closing stdin.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|line| (*line).to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// Every line written so far, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// True if `needle` appeared as a full output line.
    pub fn wrote(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line == needle)
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

/// Create a store backed by `tasks.txt` inside a fresh temp directory.
///
/// The directory guard must be kept alive for the duration of the test.
pub fn temp_store() -> Result<(tempfile::TempDir, TaskStore)> {
    let temp = tempfile::tempdir().context("tempdir")?;
    let store = TaskStore::new(temp.path().join("tasks.txt"));
    Ok((temp, store))
}
