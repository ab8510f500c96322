//! Deterministic, pure logic for the task list.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod input;
pub mod list;
pub mod task;
