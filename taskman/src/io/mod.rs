//! Side-effecting operations: the flat-file store and console streams.

pub mod console;
pub mod store;
