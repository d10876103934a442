//! Inspection of enriched variables.

use pyreport_core::pipeline;
use pyreport_core::snapshot::{VariableRecord, VariableSet};
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};

use crate::InspectArgs;

/// Longest expression text shown in a table cell before truncation.
const MAX_CELL_WIDTH: usize = 48;

/// Row for the variables table.
#[derive(Tabled)]
struct VariableRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    type_name: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Expression")]
    expression: String,
    #[tabled(rename = "Replaced")]
    replaced: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&VariableRecord> for VariableRow {
    fn from(record: &VariableRecord) -> Self {
        Self {
            name: record.name.clone(),
            type_name: record.type_name.clone(),
            kind: record.kind().as_str(),
            expression: record.expression.as_deref().map(truncate).unwrap_or_else(|| "-".into()),
            replaced: record.replaced.as_deref().map(truncate).unwrap_or_else(|| "-".into()),
            value: truncate(&record.value),
        }
    }
}

/// Run the inspect command.
pub fn run(config: Option<&Path>, verbosity: i16, args: &InspectArgs) {
    let cfg = super::load_config(config, verbosity);
    let (nb, vars) = super::load_inputs(&args.notebook, &args.snapshot);

    let enriched = pipeline::run(vars, &nb, &cfg);

    if args.json {
        match enriched.to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize variables: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_table(&enriched);
    }
}

fn print_table(vars: &VariableSet) {
    if vars.is_empty() {
        println!("(no variables in snapshot)");
        return;
    }

    let rows: Vec<VariableRow> = vars.iter().map(VariableRow::from).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();

    println!("{}", table);
    let defined = vars.iter().filter(|r| r.definition.is_some()).count();
    println!("\nTotal: {} variables ({} defined in the notebook)", vars.len(), defined);
}

fn truncate(text: &str) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= MAX_CELL_WIDTH {
        return single_line;
    }
    let cut: String = single_line.chars().take(MAX_CELL_WIDTH - 3).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("np.array([1,\n   2])"), "np.array([1, 2])");
        let long = "x".repeat(60);
        let out = truncate(&long);
        assert_eq!(out.chars().count(), MAX_CELL_WIDTH);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_row_for_bare_record() {
        let row = VariableRow::from(&VariableRecord::new("n", "3", "int"));
        assert_eq!(row.kind, "scalar");
        assert_eq!(row.expression, "-");
        assert_eq!(row.replaced, "-");
    }
}
