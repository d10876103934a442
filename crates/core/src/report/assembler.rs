//! Report assembly: walk the notebook and interleave prose with rendered
//! variables.

use crate::config::MarkerConfig;
use crate::notebook::{CellKind, Notebook};
use crate::snapshot::VariableSet;

use super::render::render_record;

/// Build the Markdown report.
///
/// Prose cells are copied verbatim. Each code cell is replaced by the
/// renderings of the variables whose defining assignment it contains, in
/// source order. Raw cells and variables without a defining assignment do
/// not appear.
pub fn assemble(set: &VariableSet, notebook: &Notebook, markers: &MarkerConfig) -> String {
    let mut out = String::new();
    let mut rendered = 0;

    for (index, cell) in notebook.cells.iter().enumerate() {
        match cell.kind {
            CellKind::Markdown => {
                if cell.source.is_empty() {
                    continue;
                }
                out.push_str(&cell.source);
                if !cell.source.ends_with('\n') {
                    out.push('\n');
                }
                out.push('\n');
            }
            CellKind::Code => {
                for record in set.defined_in(index) {
                    out.push_str(&render_record(record, markers));
                    rendered += 1;
                }
            }
            CellKind::Raw => {}
        }
    }

    tracing::debug!("Rendered {} of {} variables", rendered, set.len());
    out
}
