//! Substitution of nested variable references by their values.

use std::collections::HashMap;

use crate::snapshot::{VariableRecord, VariableSet};
use crate::source::{Token, TokenKind, tokenize};

/// Compute `replaced` for every record with an expression.
///
/// Substituted text is always another record's `value`, never its
/// `replaced`, so no expansion chain can form and cycles terminate.
/// Returns the number of records whose replaced form differs from the
/// expression.
pub fn substitute_values(set: &mut VariableSet) -> usize {
    let values: HashMap<&str, &str> =
        set.iter().map(|r| (r.name.as_str(), r.value.as_str())).collect();

    let computed: Vec<(String, String)> = set
        .iter()
        .filter(|r| r.replaced.is_none())
        .filter_map(|r| {
            let expression = r.expression.as_deref()?;
            let replaced =
                substitute_text(expression, &r.name, |name| values.get(name).copied());
            Some((r.name.clone(), replaced))
        })
        .collect();

    let mut changed = 0;
    for (name, replaced) in computed {
        if let Some(record) = set.get_mut(&name) {
            if record.expression.as_deref() != Some(replaced.as_str()) {
                changed += 1;
            }
            record.replaced = Some(replaced);
        }
    }
    tracing::debug!("Substituted nested references in {} expressions", changed);
    changed
}

/// Substituted form of one record against the whole collection.
pub fn substitute(record: &VariableRecord, all: &VariableSet) -> Option<String> {
    let expression = record.expression.as_deref()?;
    Some(substitute_text(expression, &record.name, |name| {
        all.get(name).map(|r| r.value.as_str())
    }))
}

/// Replace identifiers that name other variables with their values.
///
/// Left untouched: the record's own name, attribute names (`obj.name`),
/// keyword argument names (`f(name=...)`), lambda parameters and their uses
/// in the lambda body, and anything inside strings or comments.
pub fn substitute_text<'v>(
    expression: &str,
    own_name: &str,
    lookup: impl Fn(&str) -> Option<&'v str>,
) -> String {
    let tokens = tokenize(expression);
    let mut out = String::with_capacity(expression.len());
    let mut depth = 0usize;
    let mut prev: Option<&Token<'_>> = None;
    let mut lambdas: Vec<LambdaScope<'_>> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Op => match token.text {
                "(" | "[" | "{" => depth += 1,
                ")" | "]" | "}" => {
                    depth = depth.saturating_sub(1);
                    lambdas.retain(|l| l.depth <= depth);
                }
                ":" => {
                    if let Some(l) = lambdas.last_mut().filter(|l| l.in_header && l.depth == depth)
                    {
                        l.in_header = false;
                    }
                }
                // A comma at the lambda's own depth ends its body.
                "," => lambdas.retain(|l| l.in_header || l.depth != depth),
                _ => {}
            },
            TokenKind::Ident if token.text == "lambda" => {
                lambdas.push(LambdaScope { depth, params: Vec::new(), in_header: true });
            }
            TokenKind::Ident if token.text != own_name => {
                let is_param = lambdas.last().is_some_and(|l| l.in_header && l.depth == depth)
                    && prev.is_some_and(|p| matches!(p.text, "lambda" | "," | "*" | "**"));
                if is_param {
                    if let Some(l) = lambdas.last_mut() {
                        l.params.push(token.text);
                    }
                }
                let is_bound = is_param
                    || lambdas.iter().any(|l| !l.in_header && l.params.contains(&token.text));
                let is_attribute = prev.is_some_and(|p| p.is_op("."));
                let is_keyword_arg = depth > 0
                    && next_significant(&tokens, i).is_some_and(|n| n.is_op("="));
                if !is_bound && !is_attribute && !is_keyword_arg {
                    if let Some(value) = lookup(token.text) {
                        out.push_str(value);
                        prev = Some(token);
                        continue;
                    }
                }
            }
            _ => {}
        }
        out.push_str(token.text);
        if token.is_significant() {
            prev = Some(token);
        }
    }
    out
}

/// Parameters bound by a `lambda` opened at `depth`. `in_header` holds
/// until the `:` that starts its body.
struct LambdaScope<'a> {
    depth: usize,
    params: Vec<&'a str>,
    in_header: bool,
}

fn next_significant<'t, 'a>(tokens: &'t [Token<'a>], i: usize) -> Option<&'t Token<'a>> {
    tokens[i + 1..].iter().find(|t| t.is_significant())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(entries: &[(&str, &str, Option<&str>)]) -> VariableSet {
        entries
            .iter()
            .map(|(name, value, expr)| {
                let mut r = VariableRecord::new(*name, *value, "float");
                r.expression = expr.map(str::to_string);
                r
            })
            .collect()
    }

    #[test]
    fn test_substitutes_known_names() {
        let mut set = collection(&[
            ("a", "2.0", Some("2.0")),
            ("b", "3.5 [m]", None),
            ("c", "7.0", Some("a * b + sqrt(a)")),
        ]);
        substitute_values(&mut set);
        assert_eq!(set.get("c").unwrap().replaced.as_deref(), Some("2.0 * 3.5 [m] + sqrt(2.0)"));
        assert_eq!(set.get("a").unwrap().replaced.as_deref(), Some("2.0"));
        assert_eq!(set.get("b").unwrap().replaced, None);
    }

    #[test]
    fn test_self_reference_left_unexpanded() {
        let mut set = collection(&[("x", "6", Some("x + 1")), ("y", "2", Some("x * y"))]);
        substitute_values(&mut set);
        assert_eq!(set.get("x").unwrap().replaced.as_deref(), Some("x + 1"));
        assert_eq!(set.get("y").unwrap().replaced.as_deref(), Some("6 * y"));
    }

    #[test]
    fn test_mutual_references_terminate() {
        let set = collection(&[("p", "1", Some("q + 1")), ("q", "2", Some("p - 1"))]);
        assert_eq!(substitute(set.get("p").unwrap(), &set).as_deref(), Some("2 + 1"));
        assert_eq!(substitute(set.get("q").unwrap(), &set).as_deref(), Some("1 - 1"));
    }

    #[test]
    fn test_strings_attributes_and_keywords_untouched() {
        let set = collection(&[
            ("L", "4.0", None),
            ("n", "3", None),
            ("r", "0", Some("f('L', n=L, obj.L) + np.n # L")),
        ]);
        assert_eq!(
            substitute(set.get("r").unwrap(), &set).as_deref(),
            Some("f('L', n=4.0, obj.L) + np.n # L")
        );
    }

    #[test]
    fn test_lambda_parameters_untouched() {
        let set = collection(&[
            ("t", "9", None),
            ("a", "2", None),
            ("g", "0", Some("lambda t=1: t * 2")),
            ("h", "0", Some("map(lambda t, *r: t + a, [t, {1: a}])")),
            ("d", "0", Some("lambda x=t: x + t")),
        ]);
        let sub = |name: &str| substitute(set.get(name).unwrap(), &set);
        assert_eq!(sub("g").as_deref(), Some("lambda t=1: t * 2"));
        assert_eq!(sub("h").as_deref(), Some("map(lambda t, *r: t + 2, [9, {1: 2}])"));
        assert_eq!(sub("d").as_deref(), Some("lambda x=9: x + 9"));
    }

    #[test]
    fn test_absent_expression_gives_absent_replaced() {
        let set = collection(&[("k", "1", None)]);
        assert_eq!(substitute(set.get("k").unwrap(), &set), None);
    }
}
