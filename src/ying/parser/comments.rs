//! Comment grammar

use chumsky::prelude::*;
use chumsky::Error;

use crate::ying::ast::{Comment, LineComment, MultiLineComment};
use crate::ying::lexer::Token;
use crate::ying::parser::error::SyntaxError;

pub fn line_comment() -> impl Parser<Token, LineComment, Error = SyntaxError> + Clone {
    filter_map(|span, token: Token| match token {
        Token::LineComment(raw) => Ok(LineComment::new(raw)),
        other => Err(SyntaxError::expected_input_found(span, None, Some(other))),
    })
    .labelled("line comment")
}

pub fn multi_line_comment() -> impl Parser<Token, MultiLineComment, Error = SyntaxError> + Clone {
    filter_map(|span, token: Token| match token {
        Token::MultiLineComment(raw) => Ok(MultiLineComment::from_lexeme(&raw)),
        other => Err(SyntaxError::expected_input_found(span, None, Some(other))),
    })
    .labelled("multi-line comment")
}

/// A multi-line comment opened with `/**`.
pub fn documentation_comment() -> impl Parser<Token, MultiLineComment, Error = SyntaxError> + Clone
{
    filter_map(|span, token: Token| {
        let comment = match &token {
            Token::MultiLineComment(raw) => Some(MultiLineComment::from_lexeme(raw)),
            _ => None,
        };
        comment
            .filter(MultiLineComment::is_documentation)
            .ok_or_else(|| SyntaxError::expected_input_found(span, None, Some(token)))
    })
    .labelled("documentation comment")
}

pub fn comment() -> impl Parser<Token, Comment, Error = SyntaxError> + Clone {
    line_comment()
        .map(Comment::Line)
        .or(multi_line_comment().map(Comment::MultiLine))
}
