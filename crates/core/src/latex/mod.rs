//! Unit simplification and LaTeX escaping for rendered report text.

pub mod formatter;
pub mod symbols;
pub mod units;

pub use formatter::{brace_subscripts, format_to_latex, normalize_exponents};
pub use symbols::{SYMBOLS, SymbolTable, escape_symbols};
pub use units::{simplify_unit_block, simplify_units};
