//! Markdown report generation.

pub mod assembler;
pub mod render;

pub use assembler::assemble;
pub use render::{render_expression, render_matrix, render_record, render_table};

use crate::config::ResolvedConfig;
use crate::notebook::Notebook;
use crate::pipeline;
use crate::snapshot::VariableSet;

/// Output of one report run.
#[derive(Debug, Clone)]
pub struct Report {
    /// The enriched records, as persisted to the variables document.
    pub variables: VariableSet,
    /// The rendered Markdown document.
    pub markdown: String,
}

/// Run the pipeline over a snapshot and render the report.
pub fn generate(snapshot: VariableSet, notebook: &Notebook, config: &ResolvedConfig) -> Report {
    let variables = pipeline::run(snapshot, notebook, config);
    let markdown = assemble(&variables, notebook, &config.markers);
    Report { variables, markdown }
}
