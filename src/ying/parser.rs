//! Parser module for Ying source
//!
//! The grammar is a set of chumsky rules over the token stream produced by
//! [`crate::ying::lexer`]. Rules are plain functions that build a fresh parser
//! on every call; recursive rules tie their knot with `recursive` at
//! construction time, so no parser state is shared between calls.
//!
//! The `parse_*` functions are the entry points: each one lexes the source,
//! requires the rule to consume all of it, and reports the furthest failure as
//! a [`SyntaxError`]. [`parse_with`] and [`parse_prefix`] run any other exposed
//! rule.

pub mod combinators;
pub mod comments;
pub mod data_types;
pub mod error;
pub mod expressions;
pub mod program;
pub mod statements;

use chumsky::prelude::*;
use chumsky::Stream;
use std::ops::Range;

use crate::ying::ast::{Comment, ComplexDataType, Expression, Program, Statement};
use crate::ying::lexer::{lex_with_spans, Token};

pub use error::SyntaxError;

/// Type alias for the result of a full parse
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Run `rule` over the whole of `source`.
pub fn parse_with<T, P>(rule: P, source: &str) -> ParseResult<T>
where
    P: Parser<Token, T, Error = SyntaxError>,
{
    rule.then_ignore(end())
        .parse(token_stream(source))
        .map_err(|errors| furthest_error(errors, source))
}

/// Run `rule` over a prefix of `source`.
///
/// Returns the value and the byte offset right after the last token the rule
/// consumed. Input after that offset is left alone. A rule that matches
/// nothing reports the start of the first token.
pub fn parse_prefix<T, P>(rule: P, source: &str) -> ParseResult<(T, usize)>
where
    P: Parser<Token, T, Error = SyntaxError>,
{
    rule.map_with_span(|value, span: Range<usize>| (value, span))
        .then(empty().map_with_span(|(), span: Range<usize>| span.start))
        .map(|((value, consumed), next)| {
            // An empty match spans the next token, so nothing was consumed.
            let end = if consumed.start == next {
                next
            } else {
                consumed.end
            };
            (value, end)
        })
        .parse(token_stream(source))
        .map_err(|errors| furthest_error(errors, source))
}

pub fn parse_comment(source: &str) -> ParseResult<Comment> {
    tracing::debug!(bytes = source.len(), "parsing comment");
    parse_with(comments::comment(), source)
}

pub fn parse_data_type(source: &str) -> ParseResult<ComplexDataType> {
    tracing::debug!(bytes = source.len(), "parsing data type");
    parse_with(data_types::data_type(), source)
}

pub fn parse_expression(source: &str) -> ParseResult<Expression> {
    tracing::debug!(bytes = source.len(), "parsing expression");
    parse_with(expressions::expression(), source)
}

pub fn parse_statement(source: &str) -> ParseResult<Statement> {
    tracing::debug!(bytes = source.len(), "parsing statement");
    parse_with(statements::statement(), source)
}

/// Parse a whole compilation unit.
pub fn parse_program(source: &str) -> ParseResult<Program> {
    tracing::debug!(bytes = source.len(), "parsing program");
    let program = parse_with(program::program(), source)?;
    tracing::debug!(items = program.items.len(), "parsed program");
    Ok(program)
}

fn token_stream(
    source: &str,
) -> Stream<'static, Token, Range<usize>, std::vec::IntoIter<(Token, Range<usize>)>> {
    let end_of_input = source.len()..source.len();
    Stream::from_iter(end_of_input, lex_with_spans(source).into_iter())
}

fn furthest_error(errors: Vec<SyntaxError>, source: &str) -> SyntaxError {
    SyntaxError::furthest(errors)
        .unwrap_or_else(|| SyntaxError::new(source.len(), ["end of input"], None))
}
