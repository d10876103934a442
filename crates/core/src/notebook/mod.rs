//! Notebook documents: cell model and `.ipynb` parsing.

pub mod parser;
pub mod types;

pub use parser::{NotebookError, parse};
pub use types::{Cell, CellKind, Notebook};
