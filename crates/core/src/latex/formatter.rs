//! Text-to-LaTeX formatting pipeline.
//!
//! [`format_to_latex`] applies four pure rewrites in a fixed order:
//!
//! 1. [`simplify_units`]: bracketed unit blocks collapse repeated factors.
//!    Runs first so unit tokens are not braced twice by later steps.
//! 2. [`normalize_exponents`]: `**` becomes `^` and exponent runs are braced.
//! 3. [`escape_symbols`]: known symbolic names gain a backslash. Runs after
//!    exponent handling so exponents are not read as names.
//! 4. [`brace_subscripts`]: `_token` becomes `_{token}` everywhere.
//!
//! Every step is total and leaves its own output unchanged when applied again.

use std::sync::LazyLock;

use regex::Regex;

use super::symbols::escape_symbols;
use super::units::simplify_units;

static EXPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^([a-zA-Z0-9.\-]+)").unwrap());

static SUBSCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([a-zA-Z0-9]+)").unwrap());

/// Format arbitrary expression or value text as a LaTeX math fragment.
pub fn format_to_latex(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let processed = simplify_units(input);
    let processed = normalize_exponents(&processed);
    let processed = escape_symbols(&processed);
    brace_subscripts(&processed)
}

/// Replace `**` with `^` and brace the exponent run that follows `^`.
///
/// Post: no `**` remains and no `^` is directly followed by a letter, digit,
/// dot or minus.
pub fn normalize_exponents(input: &str) -> String {
    let replaced = input.replace("**", "^");
    EXPONENT_RE.replace_all(&replaced, "^{${1}}").into_owned()
}

/// Brace alphanumeric subscripts: `F_x1` -> `F_{x1}`.
pub fn brace_subscripts(input: &str) -> String {
    SUBSCRIPT_RE.replace_all(input, "_{${1}}").into_owned()
}
