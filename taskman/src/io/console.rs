//! Line-oriented console abstraction.
//!
//! The controller is written against [`Console`] instead of touching the
//! real standard streams, so tests substitute scripted input and capture
//! output (see `test_support::ScriptedConsole`).

use std::io::{self, Write};

use anyhow::{Context, Result};

pub trait Console {
    /// Read one input line without its trailing newline.
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Write one output line, newline appended.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// [`Console`] over the process's real stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let bytes = io::stdin().read_line(&mut buf).context("read stdin")?;
        if bytes == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}").context("write stdout")?;
        Ok(())
    }
}
