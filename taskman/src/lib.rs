//! Interactive task list manager backed by a flat text file.
//!
//! The crate presents a numbered menu over stdin/stdout and persists tasks
//! one per line in a plain UTF-8 file, reloading the full list before each
//! operation and rewriting it after each mutation. The architecture enforces
//! a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (task model, list
//!   transformations, input parsing). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (flat-file store, console
//!   streams). Isolated behind small seams to enable scripting in tests.
//!
//! The [`menu`] module coordinates core logic with I/O to implement the
//! interactive controller.

pub mod core;
pub mod io;
pub mod logging;
pub mod menu;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
