//! Tokenization of Ying source into grammar tokens with byte spans

use logos::Logos;
use std::ops::Range;

use crate::ying::lexer::tokens::{RawToken, Token};

/// Tokenize a string, keeping every token's byte range.
///
/// Whitespace is dropped. A run of input no pattern accepts is kept as a
/// [`Token::Unknown`] so the grammar can report it.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        let token = match result {
            Ok(raw) => Token::from_raw(raw, slice),
            Err(()) => Token::Unknown(slice.to_string()),
        };
        tokens.push((token, span));
    }

    tokens
}

/// Tokenize a string, dropping the spans.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}
