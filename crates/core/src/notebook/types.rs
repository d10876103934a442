//! Notebook cell model.

use serde::Deserialize;

/// Kind of a notebook cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Prose cell, copied into the report verbatim.
    Markdown,
    /// Source cell, scanned for assignments and directives.
    Code,
    /// Raw cell, ignored by the report.
    #[serde(other)]
    Raw,
}

/// A single notebook cell with its raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub source: String,
}

impl Cell {
    pub fn code(source: impl Into<String>) -> Self {
        Self { kind: CellKind::Code, source: source.into() }
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        Self { kind: CellKind::Markdown, source: source.into() }
    }

    pub fn is_code(&self) -> bool {
        self.kind == CellKind::Code
    }
}

/// An ordered list of cells, as delivered by the notebook store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Code cells paired with their index in document order.
    pub fn code_cells(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().enumerate().filter(|(_, c)| c.is_code())
    }
}
