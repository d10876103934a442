//! The enrichment pipeline: snapshot records in, annotated records out.
//!
//! Stages run strictly in order, each over the whole collection:
//! expression extraction, matrix classification, value substitution and
//! table directive scanning.

pub mod classifier;
pub mod extractor;
pub mod substitution;
pub mod tables;

pub use classifier::{detect_matrices, matrix_latex};
pub use extractor::extract_expressions;
pub use substitution::{substitute, substitute_text, substitute_values};
pub use tables::find_table_commands;

use crate::config::ResolvedConfig;
use crate::notebook::Notebook;
use crate::snapshot::VariableSet;

/// Run every stage over `set` and return the enriched collection.
pub fn run(mut set: VariableSet, notebook: &Notebook, config: &ResolvedConfig) -> VariableSet {
    tracing::debug!(
        "Running pipeline over {} variables and {} cells",
        set.len(),
        notebook.cells.len()
    );
    extract_expressions(&mut set, notebook);
    detect_matrices(&mut set);
    substitute_values(&mut set);
    find_table_commands(&mut set, notebook, &config.tables);
    set
}
