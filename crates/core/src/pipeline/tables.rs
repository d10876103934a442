//! Table directives: comments that name the rows of a list-valued variable.
//!
//! ```python
//! # @table: Span A, Span B, Span C
//! moments = [M_a, M_b, M_c]
//!
//! forces = [F1, F2]  # @table ["Left", "Right"]
//! ```
//!
//! A directive on its own line applies to the next assignment in the same
//! cell; any other statement in between cancels it. A trailing directive
//! applies to the assignment it follows.

use crate::config::TableConfig;
use crate::lists::{LABEL_STRATEGIES, parse_with};
use crate::notebook::Notebook;
use crate::snapshot::VariableSet;
use crate::source::{Token, statements};

/// Attach row labels from table directives to the variables they annotate.
///
/// Returns the number of records that carry table items afterwards.
pub fn find_table_commands(
    set: &mut VariableSet,
    notebook: &Notebook,
    config: &TableConfig,
) -> usize {
    let keyword = config.directive.trim();

    for (cell_index, cell) in notebook.code_cells() {
        let mut pending: Option<Vec<String>> = None;

        for stmt in statements(&cell.source) {
            let inline = stmt.comments().filter_map(|c| directive_labels(c, keyword)).last();

            match stmt.assignment() {
                Some(assign) => {
                    let Some(labels) = inline.or(pending.take()) else {
                        continue;
                    };
                    for target in &assign.targets {
                        match set.get_mut(target) {
                            Some(record) => record.table_items = Some(labels.clone()),
                            None => tracing::debug!(
                                "Table directive for unknown variable '{}' in cell {}",
                                target,
                                cell_index
                            ),
                        }
                    }
                }
                None if stmt.is_blank() => {
                    if inline.is_some() {
                        pending = inline;
                    }
                }
                None => pending = None,
            }
        }
    }

    let count = set.iter().filter(|r| r.table_items.is_some()).count();
    tracing::debug!("Found table directives for {} variables", count);
    count
}

/// Labels of a directive comment, or `None` when the comment is not a
/// well-formed directive.
fn directive_labels(comment: &Token<'_>, keyword: &str) -> Option<Vec<String>> {
    let body = comment.text.strip_prefix('#')?.trim_start();
    let rest = body.strip_prefix(keyword)?;
    if !(rest.is_empty() || rest.starts_with([' ', '\t', ':', '[', '('])) {
        return None;
    }
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(':').unwrap_or(rest).trim();

    let labels = parse_with(LABEL_STRATEGIES, rest).filter(|l| !l.is_empty());
    if labels.is_none() {
        tracing::warn!("Ignoring malformed table directive: {}", comment.text);
    }
    labels
}
