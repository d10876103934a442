//! Escaping of known symbolic names (`alpha` -> `\alpha`).

use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Greek letters and calculus symbols, paired with their LaTeX command.
const KNOWN_SYMBOLS: &[(&str, &str)] = &[
    ("alpha", "alpha"),
    ("beta", "beta"),
    ("gamma", "gamma"),
    ("delta", "delta"),
    ("epsilon", "epsilon"),
    ("zeta", "zeta"),
    ("eta", "eta"),
    ("theta", "theta"),
    ("iota", "iota"),
    ("kappa", "kappa"),
    ("lambda", "lambda"),
    ("mu", "mu"),
    ("nu", "nu"),
    ("xi", "xi"),
    ("omicron", "omicron"),
    ("pi", "pi"),
    ("rho", "rho"),
    ("sigma", "sigma"),
    ("tau", "tau"),
    ("upsilon", "upsilon"),
    ("phi", "phi"),
    ("chi", "chi"),
    ("psi", "psi"),
    ("omega", "omega"),
    ("Delta", "Delta"),
    ("Gamma", "Gamma"),
    ("Theta", "Theta"),
    ("Lambda", "Lambda"),
    ("Xi", "Xi"),
    ("Pi", "Pi"),
    ("Sigma", "Sigma"),
    ("Phi", "Phi"),
    ("Psi", "Psi"),
    ("Omega", "Omega"),
    ("nabla", "nabla"),
    ("partial", "partial"),
    ("infinity", "infty"),
];

/// The built-in symbol table, ordered once at first use.
pub static SYMBOLS: LazyLock<SymbolTable> =
    LazyLock::new(|| SymbolTable::new(KNOWN_SYMBOLS.iter().copied()));

/// An immutable, longest-first ordered set of symbolic names.
#[derive(Debug)]
pub struct SymbolTable {
    entries: Vec<(String, String)>,
    pattern: Option<Regex>,
}

impl SymbolTable {
    /// Build a table from `(name, command)` pairs.
    ///
    /// Names are ordered longest-first (stable for equal lengths) so that an
    /// alternation never lets a short name claim part of a longer one.
    pub fn new<'a>(symbols: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut entries: Vec<(String, String)> = symbols
            .into_iter()
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, cmd)| (name.to_string(), cmd.to_string()))
            .collect();
        entries.sort_by_key(|(name, _)| Reverse(name.len()));

        let pattern = if entries.is_empty() {
            None
        } else {
            let alternation = entries
                .iter()
                .map(|(name, _)| regex::escape(name))
                .collect::<Vec<_>>()
                .join("|");
            // Already escaped names and braced subscripts (`x_{alpha}`) are
            // captured by the optional prefix and left alone.
            Some(
                Regex::new(&format!(r"(\\|_\{{)?\b({alternation})\b"))
                    .expect("escaped symbol names form a valid pattern"),
            )
        };

        Self { entries, pattern }
    }

    /// Names in matching order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    fn command<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map_or(name, |(_, cmd)| cmd.as_str())
    }

    /// Replace every whole-word occurrence of a known name with `\command`.
    ///
    /// Occurrences already preceded by a backslash or opening a braced
    /// subscript are kept as they are, so escaping formatted text again
    /// changes nothing.
    pub fn escape(&self, input: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return input.to_string();
        };
        pattern
            .replace_all(input, |caps: &Captures<'_>| {
                if caps.get(1).is_some() {
                    caps[0].to_string()
                } else {
                    format!(r"\{}", self.command(&caps[2]))
                }
            })
            .into_owned()
    }
}

/// Escape known symbols using the built-in table.
pub fn escape_symbols(input: &str) -> String {
    SYMBOLS.escape(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_longest_first() {
        let names: Vec<_> = SYMBOLS.names().collect();
        assert_eq!(names.first(), Some(&"infinity"));
        assert!(names.windows(2).all(|w| w[0].len() >= w[1].len()));
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(escape_symbols("theta + beta"), r"\theta + \beta");
        assert_eq!(escape_symbols("alphabet"), "alphabet");
        assert_eq!(escape_symbols("2*pi*r"), r"2*\pi*r");
        assert_eq!(escape_symbols("infinity"), r"\infty");
    }

    #[test]
    fn test_subscripted_names_are_not_whole_words() {
        assert_eq!(escape_symbols("sigma_max"), "sigma_max");
        assert_eq!(escape_symbols("x_alpha"), "x_alpha");
        assert_eq!(escape_symbols("alpha_{beta}"), "alpha_{beta}");
        assert_eq!(escape_symbols("d_{alpha} + beta"), r"d_{alpha} + \beta");
    }

    #[test]
    fn test_already_escaped_untouched() {
        assert_eq!(escape_symbols(r"\alpha + mu"), r"\alpha + \mu");
    }

    #[test]
    fn test_overlapping_names_prefer_longest() {
        let table = SymbolTable::new([("a", "a"), ("a b", "ab"), ("abc", "abc")]);
        assert_eq!(table.escape("abc a"), r"\abc \a");
        assert_eq!(table.escape("a b"), r"\ab");
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = SymbolTable::new(std::iter::empty::<(&str, &str)>());
        assert_eq!(table.escape("alpha"), "alpha");
    }
}
