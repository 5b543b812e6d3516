//! Data type grammar
//!
//! The grammar is layered so that each rule yields its longest match:
//!
//! ```text
//! operand      = parenthesized | raw
//! intersection = operand ("&" operand)*
//! union        = intersection ("|" intersection)*
//! data_type    = union
//! ```
//!
//! Intersection therefore binds tighter than union, and a level with a single
//! member returns that member bare. `raw_data_type` ties its own knot because
//! `extends` constraints inside its type arguments refer back to it.

use chumsky::prelude::*;

use crate::ying::ast::{
    ComplexDataType, DataType, IntersectionDataType, ParenthesizedDataType, TypeArgument,
    UnionDataType,
};
use crate::ying::lexer::Token;
use crate::ying::parser::combinators::{identifier, token};
use crate::ying::parser::error::SyntaxError;

/// Full data type expression.
pub fn data_type() -> impl Parser<Token, ComplexDataType, Error = SyntaxError> + Clone {
    recursive(|data_type| union_level(data_type))
}

/// `Name` or `Name<T, U extends Base>`.
pub fn raw_data_type() -> impl Parser<Token, DataType, Error = SyntaxError> + Clone {
    raw_data_type_with(data_type())
}

pub fn type_argument() -> impl Parser<Token, TypeArgument, Error = SyntaxError> + Clone {
    type_argument_with(raw_data_type(), data_type())
}

/// `<T, U>` as written after a struct, interface or member name.
pub fn type_arguments() -> impl Parser<Token, Vec<TypeArgument>, Error = SyntaxError> + Clone {
    type_arguments_with(type_argument())
}

pub fn parenthesized_data_type(
) -> impl Parser<Token, ParenthesizedDataType, Error = SyntaxError> + Clone {
    parenthesized_with(data_type())
}

/// Two or more operands joined by `&`.
pub fn intersection_data_type(
) -> impl Parser<Token, IntersectionDataType, Error = SyntaxError> + Clone {
    let member = operand(data_type());

    member
        .clone()
        .chain(token(Token::Ampersand).ignore_then(member).repeated().at_least(1))
        .map(IntersectionDataType::new)
}

/// Two or more intersection-level members joined by `|`.
pub fn union_data_type() -> impl Parser<Token, UnionDataType, Error = SyntaxError> + Clone {
    let member = intersection_level(data_type());

    member
        .clone()
        .chain(token(Token::Pipe).ignore_then(member).repeated().at_least(1))
        .map(UnionDataType::new)
}

pub(crate) fn raw_data_type_with<P>(
    data_type: P,
) -> impl Parser<Token, DataType, Error = SyntaxError> + Clone
where
    P: Parser<Token, ComplexDataType, Error = SyntaxError> + Clone + 'static,
{
    recursive(|raw| {
        identifier()
            .then(type_arguments_with(type_argument_with(raw, data_type)).or_not())
            .map(|(name, type_arguments)| {
                DataType::with_type_arguments(name, type_arguments.unwrap_or_default())
            })
    })
}

pub(crate) fn type_argument_with<R, P>(
    raw: R,
    data_type: P,
) -> impl Parser<Token, TypeArgument, Error = SyntaxError> + Clone
where
    R: Parser<Token, DataType, Error = SyntaxError> + Clone,
    P: Parser<Token, ComplexDataType, Error = SyntaxError> + Clone,
{
    identifier()
        .then(token(Token::Extends).ignore_then(raw).or_not())
        .then(token(Token::Implements).ignore_then(data_type).or_not())
        .map(
            |((name, class_constraint), interface_constraint)| TypeArgument {
                name,
                class_constraint,
                interface_constraint,
            },
        )
}

/// A `<...>` list; a trailing comma is accepted.
pub(crate) fn type_arguments_with<A>(
    argument: A,
) -> impl Parser<Token, Vec<TypeArgument>, Error = SyntaxError> + Clone
where
    A: Parser<Token, TypeArgument, Error = SyntaxError> + Clone,
{
    argument
        .separated_by(token(Token::Comma))
        .allow_trailing()
        .delimited_by(token(Token::LessThan), token(Token::GreaterThan))
}

fn parenthesized_with<P>(
    data_type: P,
) -> impl Parser<Token, ParenthesizedDataType, Error = SyntaxError> + Clone
where
    P: Parser<Token, ComplexDataType, Error = SyntaxError> + Clone,
{
    data_type
        .delimited_by(token(Token::LeftParen), token(Token::RightParen))
        .map(ParenthesizedDataType::new)
}

fn operand<P>(data_type: P) -> impl Parser<Token, ComplexDataType, Error = SyntaxError> + Clone
where
    P: Parser<Token, ComplexDataType, Error = SyntaxError> + Clone + 'static,
{
    parenthesized_with(data_type.clone())
        .map(ComplexDataType::Parenthesized)
        .or(raw_data_type_with(data_type).map(ComplexDataType::Raw))
        .boxed()
}

fn intersection_level<P>(
    data_type: P,
) -> impl Parser<Token, ComplexDataType, Error = SyntaxError> + Clone
where
    P: Parser<Token, ComplexDataType, Error = SyntaxError> + Clone + 'static,
{
    let operand = operand(data_type);

    operand
        .clone()
        .then(token(Token::Ampersand).ignore_then(operand).repeated())
        .map(|(first, rest)| ComplexDataType::intersection_of(first, rest))
        .boxed()
}

fn union_level<P>(data_type: P) -> impl Parser<Token, ComplexDataType, Error = SyntaxError> + Clone
where
    P: Parser<Token, ComplexDataType, Error = SyntaxError> + Clone + 'static,
{
    let member = intersection_level(data_type);

    member
        .clone()
        .then(token(Token::Pipe).ignore_then(member).repeated())
        .map(|(first, rest)| ComplexDataType::union_of(first, rest))
        .boxed()
}
