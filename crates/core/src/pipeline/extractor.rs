//! Expression extraction: attach the right-hand side of each variable's
//! last top-level assignment.

use crate::notebook::Notebook;
use crate::snapshot::{Definition, VariableSet};
use crate::source::statements;

/// Scan code cells in document order and record, for every known variable,
/// the right-hand side of its last plain assignment.
///
/// Returns the number of records that received an expression.
pub fn extract_expressions(set: &mut VariableSet, notebook: &Notebook) -> usize {
    for (cell_index, cell) in notebook.code_cells() {
        for stmt in statements(&cell.source) {
            let Some(assign) = stmt.assignment() else {
                continue;
            };
            for target in &assign.targets {
                if let Some(record) = set.get_mut(target) {
                    record.expression = Some(assign.rhs.to_string());
                    record.definition =
                        Some(Definition { cell: cell_index, offset: assign.offset });
                }
            }
        }
    }

    let found = set.iter().filter(|r| r.expression.is_some()).count();
    tracing::debug!("Extracted expressions for {} of {} variables", found, set.len());
    found
}
