//! Per-variable records and the collection the pipeline enriches.

use std::collections::BTreeMap;

use serde::Serialize;

/// Type name the capture step assigns to structured unit quantities.
pub const UNIT_TYPE: &str = "Unit";

/// Where the defining (last) assignment of a variable was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Definition {
    /// Index of the cell in the notebook.
    pub cell: usize,
    /// Byte offset of the assignment statement within the cell source.
    pub offset: usize,
}

/// How a record is rendered in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Matrix,
    Table,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Scalar => "scalar",
            ValueKind::Matrix => "matrix",
            ValueKind::Table => "table",
        }
    }
}

/// One captured variable plus the annotations added by the pipeline stages.
///
/// Annotations are additive: a stage only ever sets an absent field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableRecord {
    #[serde(skip)]
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced: Option<String>,
    #[serde(rename = "latexValue", skip_serializing_if = "Option::is_none")]
    pub latex_value: Option<String>,
    #[serde(rename = "tableItems", skip_serializing_if = "Option::is_none")]
    pub table_items: Option<Vec<String>>,
    #[serde(skip)]
    pub definition: Option<Definition>,
}

impl VariableRecord {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            type_name: type_name.into(),
            expression: None,
            replaced: None,
            latex_value: None,
            table_items: None,
            definition: None,
        }
    }

    pub fn is_unit(&self) -> bool {
        self.type_name == UNIT_TYPE
    }

    /// Table directives take precedence over matrix classification.
    pub fn kind(&self) -> ValueKind {
        if self.table_items.is_some() {
            ValueKind::Table
        } else if self.latex_value.is_some() {
            ValueKind::Matrix
        } else {
            ValueKind::Scalar
        }
    }
}

/// The record collection for one report run, keyed and ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableSet {
    records: BTreeMap<String, VariableRecord>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous record with the same name.
    pub fn insert(&mut self, record: VariableRecord) -> Option<VariableRecord> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn get(&self, name: &str) -> Option<&VariableRecord> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut VariableRecord> {
        self.records.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariableRecord> {
        self.records.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut VariableRecord> {
        self.records.values_mut()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records defined in `cell`, in source order.
    pub fn defined_in(&self, cell: usize) -> Vec<&VariableRecord> {
        let mut found: Vec<&VariableRecord> = self
            .iter()
            .filter(|r| r.definition.is_some_and(|d| d.cell == cell))
            .collect();
        found.sort_by_key(|r| r.definition);
        found
    }

    /// Serialize as the persisted `name -> {value, type, ...}` document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<VariableRecord> for VariableSet {
    fn from_iter<I: IntoIterator<Item = VariableRecord>>(iter: I) -> Self {
        let mut set = VariableSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}
