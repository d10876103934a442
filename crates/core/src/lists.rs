//! Parsing list-like text into ordered entries.
//!
//! Parsing is an ordered chain of strategies. Each strategy either produces
//! the entries or declines; the first one that succeeds wins.

use serde_json::Value;

/// A single parsing strategy; `None` means "not my format".
pub type ListStrategy = fn(&str) -> Option<Vec<String>>;

/// Strategies for serialized values, expressions and replaced forms.
pub const ENTRY_STRATEGIES: &[ListStrategy] = &[parse_json_list, parse_loose_list];

/// Strategies for table directive labels, which may also be a bare
/// comma-separated list.
pub const LABEL_STRATEGIES: &[ListStrategy] =
    &[parse_json_list, parse_loose_list, parse_comma_list];

/// Run `strategies` in order and return the first success.
pub fn parse_with(strategies: &[ListStrategy], text: &str) -> Option<Vec<String>> {
    strategies.iter().find_map(|strategy| strategy(text))
}

/// Parse `text` as a list of entries, falling back to a one-element list
/// holding the whole text.
pub fn parse_entries(text: &str) -> Vec<String> {
    parse_with(ENTRY_STRATEGIES, text).unwrap_or_else(|| vec![text.to_string()])
}

/// Strict JSON array. Non-string items keep their JSON text.
pub fn parse_json_list(text: &str) -> Option<Vec<String>> {
    let items: Vec<Value> = serde_json::from_str(text.trim()).ok()?;
    Some(
        items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
    )
}

/// Bracketed list written loosely, e.g. a Python repr such as
/// `['a', 2.5, [1, 2], f(x, y)]` or `(1, 2)`.
///
/// Entries are split on top-level commas; nested brackets and quoted text
/// are kept intact and one layer of quotes is removed from string entries.
pub fn parse_loose_list(text: &str) -> Option<Vec<String>> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .or_else(|| trimmed.strip_prefix('(').and_then(|t| t.strip_suffix(')')))?;

    let parts = split_top_level(inner)?;
    let mut entries: Vec<String> = parts.iter().map(|p| unquote(p.trim()).to_string()).collect();
    if entries.last().is_some_and(String::is_empty) {
        entries.pop();
    }
    Some(entries)
}

/// Comma-separated labels without enclosing brackets.
pub fn parse_comma_list(text: &str) -> Option<Vec<String>> {
    let parts = split_top_level(text)?;
    let entries: Vec<String> = parts
        .iter()
        .map(|p| unquote(p.trim()).to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if entries.is_empty() { None } else { Some(entries) }
}

/// Split on commas outside brackets and quotes. Returns `None` when the
/// brackets are unbalanced.
fn split_top_level(text: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    parts.push(&text[start..]);
    Some(parts)
}

fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}
