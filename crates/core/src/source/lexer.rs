//! A tolerant lexer for notebook code cells.
//!
//! The lexer never fails: anything it does not recognise becomes a
//! one-character [`TokenKind::Op`]. Spans are byte ranges into the input, so
//! callers can slice the original text verbatim.

use std::ops::Range;

use chumsky::prelude::*;

/// Classification of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Number,
    Str,
    Comment,
    Op,
    Newline,
    Whitespace,
}

/// A token borrowing its text from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

impl Token<'_> {
    /// Tokens that carry meaning (not whitespace, comments or line breaks).
    pub fn is_significant(&self) -> bool {
        !matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment | TokenKind::Newline)
    }

    pub fn is_op(&self, op: &str) -> bool {
        self.kind == TokenKind::Op && self.text == op
    }
}

/// Multi-character operators, longest first.
const OPERATORS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "...", "**", "//", "==", "!=", "<=", ">=", "->", ":=",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "@=", "<<", ">>",
];

/// Split `src` into tokens covering every byte of the input.
pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    // chumsky spans count chars; map them back to byte offsets.
    let offsets: Vec<usize> =
        src.char_indices().map(|(i, _)| i).chain(std::iter::once(src.len())).collect();
    let chars = offsets.len() - 1;

    let (lexed, errors) = lexer().parse_recovery(src);
    let lexed = lexed.unwrap_or_else(|| {
        tracing::warn!(errors = errors.len(), "lexer gave up, keeping cell as one token");
        vec![(TokenKind::Op, 0..chars)]
    });

    lexed
        .into_iter()
        .filter(|(_, span)| span.start < span.end)
        .map(|(kind, span)| {
            let bytes = offsets[span.start]..offsets[span.end];
            Token { kind, text: &src[bytes.clone()], span: bytes }
        })
        .collect()
}

fn lexer() -> impl Parser<char, Vec<(TokenKind, Range<usize>)>, Error = Simple<char>> {
    let line_break = just("\r\n").or(just("\n"));

    let newline = line_break.clone().to(TokenKind::Newline);
    let continuation = just('\\').then(line_break).to(TokenKind::Whitespace);
    let whitespace = filter(|c: &char| matches!(*c, ' ' | '\t' | '\x0c'))
        .repeated()
        .at_least(1)
        .to(TokenKind::Whitespace);
    // A `\r` directly before `\n` is taken by `newline` first.
    let lone_cr = just('\r').to(TokenKind::Whitespace);

    let comment = just('#')
        .then(filter(|c: &char| *c != '\n' && *c != '\r').repeated())
        .to(TokenKind::Comment);

    let string = filter(|c: &char| matches!(c.to_ascii_lowercase(), 'r' | 'b' | 'f' | 'u'))
        .repeated()
        .at_most(2)
        .then(quoted('"').or(quoted('\'')))
        .to(TokenKind::Str);

    let digit = || filter(|c: &char| c.is_ascii_digit());
    let hex = just('0')
        .then(one_of("xX"))
        .then(filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_').repeated())
        .ignored();
    let exponent = one_of("eE").then(one_of("+-")).then(digit()).ignored();
    let decimal = digit()
        .ignored()
        .or(just('.').then(digit()).ignored())
        .then(
            exponent
                .or(filter(|c: &char| c.is_ascii_alphanumeric() || matches!(*c, '_' | '.'))
                    .ignored())
                .repeated(),
        )
        .ignored();
    let number = hex.or(decimal).to(TokenKind::Number);

    let ident = filter(|c: &char| c.is_alphabetic() || *c == '_')
        .then(filter(|c: &char| c.is_alphanumeric() || *c == '_').repeated())
        .to(TokenKind::Ident);

    let operator =
        choice::<_, Simple<char>>(OPERATORS.iter().map(|op| just(*op)).collect::<Vec<_>>())
            .to(TokenKind::Op);

    choice::<_, Simple<char>>((
        newline,
        continuation,
        whitespace,
        lone_cr,
        comment,
        string,
        number,
        ident,
        operator,
        any().to(TokenKind::Op),
    ))
    .map_with_span(|kind, span| (kind, span))
    .repeated()
    .then_ignore(end())
}

/// A string body opened by `q`, triple-quoted or not. Unterminated
/// single-quoted strings end at the line break; unterminated triple-quoted
/// strings run to the end of input.
fn quoted(q: char) -> impl Parser<char, (), Error = Simple<char>> + Clone {
    let triple: String = std::iter::repeat_n(q, 3).collect();
    let escape = just('\\').then(any()).ignored();

    let long = just(triple.clone())
        .then(escape.clone().or(just(triple.clone()).not().ignored()).repeated())
        .then(just(triple).ignored().or(end()))
        .ignored();
    let short = just(q)
        .then(escape.or(filter(move |c: &char| *c != q && *c != '\n').ignored()).repeated())
        .then(just(q).or_not())
        .ignored();

    long.or(short)
}
