//! Per-record renderers: scalar equations, matrices and tables.

use crate::config::MarkerConfig;
use crate::latex::format_to_latex;
use crate::lists::parse_entries;
use crate::snapshot::{ValueKind, VariableRecord};
use crate::source::{TokenKind, tokenize};

/// Render one record with the renderer its classification selects.
pub fn render_record(record: &VariableRecord, markers: &MarkerConfig) -> String {
    match record.kind() {
        ValueKind::Table => render_table(record),
        ValueKind::Matrix => render_matrix(record),
        ValueKind::Scalar => render_expression(record, markers),
    }
}

/// Inline equation `$ name = expression = replaced = value $`, with terms
/// that add nothing dropped.
pub fn render_expression(record: &VariableRecord, markers: &MarkerConfig) -> String {
    let name = format_to_latex(&record.name);
    let value = format_to_latex(&record.value);

    let raw_expr = strip_marker(record.expression.as_deref(), &markers.true_value_suffix);
    let raw_repl = strip_marker(record.replaced.as_deref(), &markers.true_value_suffix);

    if is_unit_declaration(&raw_expr, &markers.unit_constructors) {
        return inline_equation(&[&name, &value]);
    }

    let value_term = strip_empty_brackets(&value);
    let expr = format_to_latex(&raw_expr);
    let repl = format_to_latex(&raw_repl);

    if collapse_ws(&expr) == collapse_ws(&repl) {
        let expr_term = chain_term(&raw_expr, markers);
        if expr_term.trim().is_empty() || collapse_ws(&expr_term) == collapse_ws(&value_term) {
            return inline_equation(&[&name, &value_term]);
        }
        return inline_equation(&[&name, &expr_term, &value_term]);
    }

    inline_equation(&[
        &name,
        &chain_term(&raw_expr, markers),
        &chain_term(&raw_repl, markers),
        &value_term,
    ])
}

/// Display equation for a matrix-valued record. Expression and replaced
/// form are emitted as written; the replaced form and the matrix are only
/// shown when they differ (ignoring whitespace) from every term shown before
/// or after them.
pub fn render_matrix(record: &VariableRecord) -> String {
    let expr = record.expression.as_deref().filter(|s| !s.is_empty());
    let repl = record.replaced.as_deref().filter(|s| !s.is_empty());
    let latex = record.latex_value.as_deref().filter(|s| !s.is_empty());

    let clean = |s: Option<&str>| s.map(collapse_ws).unwrap_or_default();
    let (c_expr, c_repl, c_latex) = (clean(expr), clean(repl), clean(latex));

    let mut terms = vec![format_to_latex(&record.name)];
    if let Some(e) = expr {
        terms.push(e.to_string());
    }
    if let Some(r) = repl.filter(|_| c_repl != c_expr && c_repl != c_latex) {
        terms.push(r.to_string());
    }
    if let Some(l) = latex.filter(|_| c_latex != c_expr && c_latex != c_repl) {
        terms.push(l.to_string());
    }

    format!("$$ {} $$\n\n", terms.join(" = "))
}

/// Heading plus an Item/Expression/Replaced/Value table with one row per
/// table item. Entries missing from a parsed list render as empty cells.
pub fn render_table(record: &VariableRecord) -> String {
    let items = record.table_items.as_deref().unwrap_or_default();
    let values = parse_entries(&record.value);
    let expressions = record.expression.as_deref().map(parse_entries).unwrap_or_default();
    let replaced = record.replaced.as_deref().map(parse_entries).unwrap_or_default();

    let mut out = format!(
        "#### ${}$\n\n| Item | Expression | Replaced | Value |\n|---|---|---|---|\n",
        format_to_latex(&record.name)
    );
    for i in 0..items.len() {
        let cell = |list: &[String]| list.get(i).map(|s| table_cell(s)).unwrap_or_default();
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            cell(items),
            cell(&expressions),
            cell(&replaced),
            cell(&values)
        ));
    }
    out.push('\n');
    out
}

fn inline_equation(terms: &[&str]) -> String {
    format!("$ {} $\n\n", terms.join(" = "))
}

/// Expression or replaced term of a chain: auto-scale calls and empty
/// unit brackets are noise in a rendered equation.
fn chain_term(raw: &str, markers: &MarkerConfig) -> String {
    let without_scale = strip_marker(Some(raw), &markers.auto_scale_call);
    strip_empty_brackets(&format_to_latex(&without_scale))
}

fn table_cell(raw: &str) -> String {
    format_to_latex(raw).replace('|', r"\|").replace(['\r', '\n'], " ")
}

fn strip_marker(text: Option<&str>, marker: &str) -> String {
    let text = text.unwrap_or_default();
    if marker.is_empty() { text.to_string() } else { text.replace(marker, "") }
}

fn strip_empty_brackets(text: &str) -> String {
    text.replace("[]", "").trim_end().to_string()
}

/// Whether `expression` calls one of the unit constructors.
fn is_unit_declaration(expression: &str, constructors: &[String]) -> bool {
    let tokens = tokenize(expression);
    let significant: Vec<_> = tokens.iter().filter(|t| t.is_significant()).collect();
    significant.windows(2).any(|pair| {
        pair[0].kind == TokenKind::Ident
            && pair[1].is_op("(")
            && constructors.iter().any(|c| c == pair[0].text)
    })
}

/// Text with all whitespace removed, for "same term" comparisons.
pub fn collapse_ws(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
