//! Captured variable snapshot and the record collection built from it.

pub mod loader;
pub mod types;

pub use loader::{CAPTURE_END, CAPTURE_START, SnapshotError, parse};
pub use types::{Definition, UNIT_TYPE, ValueKind, VariableRecord, VariableSet};
