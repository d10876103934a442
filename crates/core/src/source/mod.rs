//! Lexing and statement matching for notebook code cells.

pub mod lexer;
pub mod statements;

pub use lexer::{Token, TokenKind, tokenize};
pub use statements::{Assignment, Statement, statements};
