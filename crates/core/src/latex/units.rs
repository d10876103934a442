//! Unit block simplification: `[m*m/s]` -> `[m^{2} / s]`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::formatter::brace_subscripts;

static UNIT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// Separator placed between distinct unit factors.
pub const FACTOR_SEPARATOR: &str = r" \cdot ";

/// Collapse one `*`-separated factor list.
///
/// Repeated factors become a single factor with a braced exponent; factors
/// keep the order of their first occurrence.
pub fn simplify_unit_block(text: &str) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for token in text.split('*').map(str::trim).filter(|t| !t.is_empty()) {
        match counts.iter_mut().find(|(seen, _)| *seen == token) {
            Some((_, n)) => *n += 1,
            None => counts.push((token, 1)),
        }
    }

    counts
        .into_iter()
        .map(|(unit, count)| {
            let unit = brace_subscripts(unit);
            if count > 1 { format!("{unit}^{{{count}}}") } else { unit }
        })
        .collect::<Vec<_>>()
        .join(FACTOR_SEPARATOR)
}

/// Simplify every bracketed unit block in `input`.
///
/// A block containing `/` is split once into numerator and denominator;
/// an empty numerator becomes `1`.
pub fn simplify_units(input: &str) -> String {
    UNIT_BLOCK_RE
        .replace_all(input, |caps: &Captures<'_>| {
            let content = &caps[1];
            match content.split_once('/') {
                Some((top, bottom)) => {
                    let top = simplify_unit_block(top);
                    let top = if top.is_empty() { "1".to_string() } else { top };
                    format!("[{} / {}]", top, simplify_unit_block(bottom))
                }
                None => format!("[{}]", simplify_unit_block(content)),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_factors_collapse() {
        assert_eq!(simplify_unit_block("m*m"), "m^{2}");
        assert_eq!(simplify_unit_block("kg * m * kg * m * m"), r"kg^{2} \cdot m^{3}");
    }

    #[test]
    fn test_empty_tokens_dropped() {
        assert_eq!(simplify_unit_block(" * m ** "), "m");
        assert_eq!(simplify_unit_block(""), "");
    }

    #[test]
    fn test_subscripted_unit() {
        assert_eq!(simplify_unit_block("N_m*N_m"), "N_{m}^{2}");
    }

    #[test]
    fn test_fraction_blocks() {
        assert_eq!(simplify_units("[m/s]"), "[m / s]");
        assert_eq!(simplify_units("[ /s]"), "[1 / s]");
        assert_eq!(simplify_units("[kg*m/s*s]"), r"[kg \cdot m / s^{2}]");
    }

    #[test]
    fn test_only_bracketed_text_changes() {
        assert_eq!(simplify_units("5 * 3 [m*m] + x*x"), "5 * 3 [m^{2}] + x*x");
        assert_eq!(simplify_units("12.5 []"), "12.5 []");
    }
}
