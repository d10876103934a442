//! Jupyter `.ipynb` parsing.

use serde::Deserialize;
use thiserror::Error;

use super::types::{Cell, CellKind, Notebook};

/// Errors that can occur while reading a notebook document.
#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("invalid notebook JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct RawNotebook {
    cells: Vec<RawCell>,
}

#[derive(Deserialize)]
struct RawCell {
    cell_type: CellKind,
    #[serde(default)]
    source: RawSource,
}

/// `source` is stored either as one string or as a list of lines that
/// already carry their own line endings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSource {
    Text(String),
    Lines(Vec<String>),
}

impl Default for RawSource {
    fn default() -> Self {
        RawSource::Text(String::new())
    }
}

impl From<RawSource> for String {
    fn from(src: RawSource) -> Self {
        match src {
            RawSource::Text(s) => s,
            RawSource::Lines(lines) => lines.concat(),
        }
    }
}

/// Parse an `.ipynb` document into an ordered list of cells.
pub fn parse(content: &str) -> Result<Notebook, NotebookError> {
    let raw: RawNotebook = serde_json::from_str(content)?;
    let cells = raw
        .cells
        .into_iter()
        .map(|c| Cell { kind: c.cell_type, source: c.source.into() })
        .collect();
    Ok(Notebook { cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_list_source() {
        let content = r##"{
  "cells": [
    {"cell_type": "markdown", "metadata": {}, "source": ["# Title\n", "Some text"]},
    {"cell_type": "code", "execution_count": 1, "metadata": {}, "outputs": [],
     "source": ["x = 2 + 3\n", "y = x * 2"]}
  ],
  "metadata": {},
  "nbformat": 4,
  "nbformat_minor": 5
}"##;
        let nb = parse(content).unwrap();
        assert_eq!(nb.cells.len(), 2);
        assert_eq!(nb.cells[0].kind, CellKind::Markdown);
        assert_eq!(nb.cells[0].source, "# Title\nSome text");
        assert_eq!(nb.cells[1].source, "x = 2 + 3\ny = x * 2");
    }

    #[test]
    fn test_parse_string_source_and_raw_cells() {
        let content = r#"{"cells": [
            {"cell_type": "raw", "source": "ignored"},
            {"cell_type": "code", "source": "a = 1"},
            {"cell_type": "code"}
        ]}"#;
        let nb = parse(content).unwrap();
        assert_eq!(nb.cells[0].kind, CellKind::Raw);
        assert_eq!(nb.cells[1].source, "a = 1");
        assert_eq!(nb.cells[2].source, "");
        assert_eq!(nb.code_cells().map(|(i, _)| i).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_unknown_cell_type_is_raw() {
        let nb = parse(r#"{"cells": [{"cell_type": "heading", "source": "x"}]}"#).unwrap();
        assert_eq!(nb.cells[0].kind, CellKind::Raw);
    }

    #[test]
    fn test_missing_cells_is_error() {
        assert!(matches!(parse(r#"{"metadata": {}}"#), Err(NotebookError::InvalidJson(_))));
        assert!(parse("not json").is_err());
    }
}
