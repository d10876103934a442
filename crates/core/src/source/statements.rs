//! Logical statements and simple assignments over lexed source.

use super::lexer::{Token, TokenKind, tokenize};

/// One logical statement: a depth-0 line (brackets may span physical lines)
/// or a `;`-separated part of one.
#[derive(Debug, Clone)]
pub struct Statement<'a> {
    src: &'a str,
    /// Every token of the statement, trivia included, without the
    /// terminating newline or `;`.
    pub tokens: Vec<Token<'a>>,
    /// Whether the logical line starts at column 0.
    pub top_level: bool,
}

/// An assignment of one right-hand side to one or more plain names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub targets: Vec<&'a str>,
    /// Right-hand side exactly as written, without a trailing comment.
    pub rhs: &'a str,
    /// Byte offset of the statement in the source.
    pub offset: usize,
}

impl<'a> Statement<'a> {
    pub fn significant(&self) -> impl Iterator<Item = &Token<'a>> {
        self.tokens.iter().filter(|t| t.is_significant())
    }

    pub fn comments(&self) -> impl Iterator<Item = &Token<'a>> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Comment)
    }

    pub fn is_blank(&self) -> bool {
        self.significant().next().is_none()
    }

    /// Match `name = [name = ...] rhs` at top level.
    ///
    /// Targets must be bare identifiers; augmented, annotated, tuple,
    /// attribute and subscript targets do not match.
    pub fn assignment(&self) -> Option<Assignment<'a>> {
        if !self.top_level {
            return None;
        }
        let sig: Vec<&Token<'a>> = self.significant().collect();

        let mut targets = Vec::new();
        let mut i = 0;
        while i + 1 < sig.len() && sig[i].kind == TokenKind::Ident && sig[i + 1].is_op("=") {
            targets.push(sig[i].text);
            i += 2;
        }

        let rhs = &sig[i..];
        let (first, last) = (rhs.first()?, rhs.last()?);
        if targets.is_empty() {
            return None;
        }

        Some(Assignment {
            targets,
            rhs: &self.src[first.span.start..last.span.end],
            offset: sig[0].span.start,
        })
    }
}

/// Split `src` into logical statements.
pub fn statements(src: &str) -> Vec<Statement<'_>> {
    let mut out = Vec::new();
    let mut current: Vec<Token<'_>> = Vec::new();
    let mut depth = 0usize;
    let mut line_top_level = true;
    let mut at_line_start = true;

    for token in tokenize(src) {
        if at_line_start {
            line_top_level = token.kind != TokenKind::Whitespace;
            at_line_start = false;
        }

        match token.kind {
            TokenKind::Newline if depth == 0 => {
                flush(src, &mut current, line_top_level, &mut out);
                at_line_start = true;
            }
            TokenKind::Op if depth == 0 && token.text == ";" => {
                // `if c: a = 1; b = 2` keeps `b = 2` inside the block body.
                let header = opens_block(&current);
                flush(src, &mut current, line_top_level, &mut out);
                if header {
                    line_top_level = false;
                }
            }
            TokenKind::Op => {
                match token.text {
                    "(" | "[" | "{" => depth += 1,
                    ")" | "]" | "}" => depth = depth.saturating_sub(1),
                    _ => {}
                }
                current.push(token);
            }
            _ => current.push(token),
        }
    }
    flush(src, &mut current, line_top_level, &mut out);

    out
}

/// Keywords that open a block whose body may follow on the same line.
const BLOCK_KEYWORDS: &[&str] = &[
    "if", "elif", "else", "for", "while", "with", "def", "class", "try", "except", "finally",
    "async",
];

fn opens_block(tokens: &[Token<'_>]) -> bool {
    tokens
        .iter()
        .find(|t| t.is_significant())
        .is_some_and(|t| t.kind == TokenKind::Ident && BLOCK_KEYWORDS.contains(&t.text))
}

fn flush<'a>(
    src: &'a str,
    current: &mut Vec<Token<'a>>,
    top_level: bool,
    out: &mut Vec<Statement<'a>>,
) {
    if current.iter().any(|t| t.kind != TokenKind::Whitespace) {
        out.push(Statement { src, tokens: std::mem::take(current), top_level });
    } else {
        current.clear();
    }
}
