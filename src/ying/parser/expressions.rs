//! Expression grammar
//!
//! Precedence, tightest first: unit, unary, multiplicative (`* / %`),
//! additive (`+ -`), comparative (`== != >= <= > <`). Every binary level folds
//! to the left.

use chumsky::prelude::*;

use crate::ying::ast::{AccessPathElement, BinaryOperator, Expression};
use crate::ying::lexer::Token;
use crate::ying::parser::combinators::{
    additive_operator, comparison_operator, identifier, integer_literal, literal,
    multiplicative_operator, string_literal, token, unary_operator,
};
use crate::ying::parser::error::SyntaxError;

pub fn expression() -> impl Parser<Token, Expression, Error = SyntaxError> + Clone {
    recursive(|expression| comparative_with(expression))
}

/// Literal, identifier, access chain or parenthesized expression.
pub fn unit() -> impl Parser<Token, Expression, Error = SyntaxError> + Clone {
    unit_with(expression())
}

pub fn unary_expression() -> impl Parser<Token, Expression, Error = SyntaxError> + Clone {
    unary_with(expression())
}

pub fn multiplicative_expression() -> impl Parser<Token, Expression, Error = SyntaxError> + Clone {
    multiplicative_with(expression())
}

pub fn additive_expression() -> impl Parser<Token, Expression, Error = SyntaxError> + Clone {
    additive_with(expression())
}

pub fn comparative_expression() -> impl Parser<Token, Expression, Error = SyntaxError> + Clone {
    comparative_with(expression())
}

/// An identifier followed by any number of `.name`, `[0]` or `["name"]` steps.
///
/// Without steps this is a plain identifier expression.
pub fn access_chain() -> impl Parser<Token, Expression, Error = SyntaxError> + Clone {
    let property = token(Token::Dot)
        .ignore_then(identifier())
        .map(AccessPathElement::property);

    let key = integer_literal()
        .map(|index| AccessPathElement::array(index.value))
        .or(string_literal().map(|key| AccessPathElement::property(key.value)))
        .delimited_by(token(Token::LeftBracket), token(Token::RightBracket));

    identifier()
        .then(property.or(key).repeated())
        .map(|(base, path)| Expression::access(base, path))
}

fn unit_with<P>(expression: P) -> impl Parser<Token, Expression, Error = SyntaxError> + Clone
where
    P: Parser<Token, Expression, Error = SyntaxError> + Clone + 'static,
{
    choice((
        literal().map(Expression::Literal),
        access_chain(),
        expression.delimited_by(token(Token::LeftParen), token(Token::RightParen)),
    ))
    .boxed()
}

fn unary_with<P>(expression: P) -> impl Parser<Token, Expression, Error = SyntaxError> + Clone
where
    P: Parser<Token, Expression, Error = SyntaxError> + Clone + 'static,
{
    unary_operator()
        .or_not()
        .then(unit_with(expression))
        .map(|(presign, operand)| match presign {
            Some(presign) => Expression::unary(presign, operand),
            None => operand,
        })
        .boxed()
}

/// `operand (operator operand)*`, folded to the left.
fn binary_level<O, Op>(
    operand: O,
    operator: Op,
) -> impl Parser<Token, Expression, Error = SyntaxError> + Clone
where
    O: Parser<Token, Expression, Error = SyntaxError> + Clone + 'static,
    Op: Parser<Token, BinaryOperator, Error = SyntaxError> + Clone + 'static,
{
    operand
        .clone()
        .then(operator.then(operand).repeated())
        .foldl(|lhs, (operator, rhs)| Expression::binary(lhs, operator, rhs))
        .boxed()
}

fn multiplicative_with<P>(expression: P) -> impl Parser<Token, Expression, Error = SyntaxError> + Clone
where
    P: Parser<Token, Expression, Error = SyntaxError> + Clone + 'static,
{
    binary_level(unary_with(expression), multiplicative_operator())
}

fn additive_with<P>(expression: P) -> impl Parser<Token, Expression, Error = SyntaxError> + Clone
where
    P: Parser<Token, Expression, Error = SyntaxError> + Clone + 'static,
{
    binary_level(multiplicative_with(expression), additive_operator())
}

fn comparative_with<P>(expression: P) -> impl Parser<Token, Expression, Error = SyntaxError> + Clone
where
    P: Parser<Token, Expression, Error = SyntaxError> + Clone + 'static,
{
    binary_level(additive_with(expression), comparison_operator())
}
