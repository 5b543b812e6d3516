//! Lexer for Ying source
//!
//! A single logos pass classifies the input; whitespace never reaches the
//! grammar. Tokens are paired with their byte range in the source so that
//! syntax errors can point back into the original text.
//!
//! Comparison operators made of two characters (`==`, `!=`, `>=`, `<=`) are
//! not tokens of their own. The grammar assembles them from the single
//! character tokens, which keeps `<` and `>` usable as type-argument
//! delimiters.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::{RawToken, Token};

use std::ops::Range;

/// Lexing function that preserves source spans for the parser.
pub fn lex_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let tokens = tokenize_with_spans(source);
    tracing::trace!(
        bytes = source.len(),
        tokens = tokens.len(),
        "lexed source"
    );
    tokens
}
