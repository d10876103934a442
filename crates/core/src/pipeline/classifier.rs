//! Matrix classification of serialized values.

use crate::lists::parse_loose_list;
use crate::snapshot::VariableSet;

/// Attach a `bmatrix` rendering to every record whose value is a
/// rectangular list of numeric lists. Unit quantities are never matrices.
///
/// Returns the number of records classified as matrices.
pub fn detect_matrices(set: &mut VariableSet) -> usize {
    let mut count = 0;
    for record in set.iter_mut() {
        if record.latex_value.is_some() || record.is_unit() {
            continue;
        }
        if let Some(latex) = matrix_latex(&record.value) {
            record.latex_value = Some(latex);
            count += 1;
        }
    }
    tracing::debug!("Classified {} variables as matrices", count);
    count
}

/// Render `value` as a LaTeX `bmatrix` if it is a matrix.
pub fn matrix_latex(value: &str) -> Option<String> {
    let rows = parse_matrix(value)?;
    let body = rows.iter().map(|row| row.join(" & ")).collect::<Vec<_>>().join(r" \\ ");
    Some(format!(r"\begin{{bmatrix}} {body} \end{{bmatrix}}"))
}

/// Parse a sequence of equally wide, non-empty sequences of numbers.
/// Anything else, including ragged or malformed nesting, is not a matrix.
fn parse_matrix(value: &str) -> Option<Vec<Vec<String>>> {
    if !value.trim_start().starts_with('[') {
        return None;
    }
    let rows = parse_loose_list(value)?;
    if rows.is_empty() {
        return None;
    }

    let mut parsed = Vec::with_capacity(rows.len());
    for row in &rows {
        if !row.starts_with('[') {
            return None;
        }
        let cells = parse_loose_list(row)?;
        if cells.is_empty() || cells.iter().any(|c| c.parse::<f64>().is_err()) {
            return None;
        }
        parsed.push(cells);
    }

    let width = parsed[0].len();
    parsed.iter().all(|r| r.len() == width).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{UNIT_TYPE, VariableRecord};

    #[test]
    fn test_matrix_latex() {
        assert_eq!(
            matrix_latex("[[1, 2], [3.5, -4e-3]]").as_deref(),
            Some(r"\begin{bmatrix} 1 & 2 \\ 3.5 & -4e-3 \end{bmatrix}")
        );
        assert_eq!(
            matrix_latex("[[7]]").as_deref(),
            Some(r"\begin{bmatrix} 7 \end{bmatrix}")
        );
    }

    #[test]
    fn test_non_matrices() {
        for value in [
            "5",
            "[1, 2, 3]",
            "[[1, 2], [3]]",
            "[[1, 'a']]",
            "[[]]",
            "[]",
            "[[1, 2], [3, 4]",
            "12.0 [m]",
            "[[1, 2], 3]",
        ] {
            assert_eq!(matrix_latex(value), None, "{value}");
        }
    }

    #[test]
    fn test_detect_skips_units() {
        let mut set: VariableSet = [
            VariableRecord::new("M", "[[1, 0], [0, 1]]", "ndarray"),
            VariableRecord::new("U", "[[1, 0], [0, 1]]", UNIT_TYPE),
            VariableRecord::new("s", "3", "int"),
        ]
        .into_iter()
        .collect();
        assert_eq!(detect_matrices(&mut set), 1);
        assert!(set.get("M").unwrap().latex_value.is_some());
        assert!(set.get("U").unwrap().latex_value.is_none());
        assert!(set.get("s").unwrap().latex_value.is_none());
    }
}
