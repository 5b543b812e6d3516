//! Lexical primitives for the Ying grammar
//!
//! Every function here builds a small parser over the token stream. Leaf
//! primitives are labelled, so a failure without progress reports a readable
//! expectation (`identifier`, `integer literal`, ...) instead of the raw token
//! set.

use chumsky::prelude::*;
use chumsky::Error;

use crate::ying::ast::{
    BinaryOperator, BooleanLiteral, CharLiteral, FloatLiteral, IntegerLiteral, Literal,
    StringLiteral, UnaryOperator,
};
use crate::ying::lexer::Token;
use crate::ying::parser::error::SyntaxError;

/// Any identifier-shaped word.
///
/// Keywords and `true`/`false` have tokens of their own but still match the
/// identifier pattern, so they are accepted here and yield their spelling.
pub fn identifier() -> impl Parser<Token, String, Error = SyntaxError> + Clone {
    filter_map(|span, token: Token| match token {
        Token::Identifier(name) => Ok(name),
        other => match other.keyword_text() {
            Some(text) => Ok(text.to_string()),
            None => Err(SyntaxError::expected_input_found(span, None, Some(other))),
        },
    })
    .labelled("identifier")
}

pub fn string_literal() -> impl Parser<Token, StringLiteral, Error = SyntaxError> + Clone {
    filter_map(|span, token: Token| match token {
        Token::String(raw) => Ok(StringLiteral::from_lexeme(&raw)),
        other => Err(SyntaxError::expected_input_found(span, None, Some(other))),
    })
    .labelled("string literal")
}

pub fn char_literal() -> impl Parser<Token, CharLiteral, Error = SyntaxError> + Clone {
    filter_map(|span, token: Token| match token {
        Token::Char(raw) => Ok(CharLiteral::from_lexeme(&raw)),
        other => Err(SyntaxError::expected_input_found(span, None, Some(other))),
    })
    .labelled("character literal")
}

pub fn boolean_literal() -> impl Parser<Token, BooleanLiteral, Error = SyntaxError> + Clone {
    just(Token::True)
        .to(BooleanLiteral::new(true))
        .or(just(Token::False).to(BooleanLiteral::new(false)))
        .labelled("boolean literal")
}

/// Decimal, `0x` hexadecimal or `0o` octal integer.
///
/// A lexeme whose value does not fit into 64 bits is rejected like any other
/// non-integer token.
pub fn integer_literal() -> impl Parser<Token, IntegerLiteral, Error = SyntaxError> + Clone {
    filter_map(|span, token: Token| {
        let value = match &token {
            Token::Integer(raw) => IntegerLiteral::from_lexeme(raw).ok(),
            _ => None,
        };
        value.ok_or_else(|| SyntaxError::expected_input_found(span, None, Some(token)))
    })
    .labelled("integer literal")
}

pub fn float_literal() -> impl Parser<Token, FloatLiteral, Error = SyntaxError> + Clone {
    filter_map(|span, token: Token| {
        let value = match &token {
            Token::Float(raw) => FloatLiteral::from_lexeme(raw).ok(),
            _ => None,
        };
        value.ok_or_else(|| SyntaxError::expected_input_found(span, None, Some(token)))
    })
    .labelled("float literal")
}

/// Float before integer: the lexer already keeps `1.5` in one token, the
/// order only decides which expectation comes first.
pub fn number_literal() -> impl Parser<Token, Literal, Error = SyntaxError> + Clone {
    float_literal()
        .map(Literal::Float)
        .or(integer_literal().map(Literal::Integer))
}

pub fn literal() -> impl Parser<Token, Literal, Error = SyntaxError> + Clone {
    choice((
        string_literal().map(Literal::String),
        char_literal().map(Literal::Char),
        boolean_literal().map(Literal::Boolean),
        number_literal(),
    ))
}

/// Match one keyword or punctuation token.
pub fn token(expected: Token) -> impl Parser<Token, (), Error = SyntaxError> + Clone {
    just(expected).ignored()
}

pub fn unary_operator() -> impl Parser<Token, UnaryOperator, Error = SyntaxError> + Clone {
    choice((
        just(Token::Plus).to(UnaryOperator::Plus),
        just(Token::Minus).to(UnaryOperator::Minus),
        just(Token::Bang).to(UnaryOperator::Not),
    ))
}

pub fn multiplicative_operator() -> impl Parser<Token, BinaryOperator, Error = SyntaxError> + Clone
{
    choice((
        just(Token::Star).to(BinaryOperator::Multiply),
        just(Token::Slash).to(BinaryOperator::Divide),
        just(Token::Percent).to(BinaryOperator::Modulo),
    ))
}

pub fn additive_operator() -> impl Parser<Token, BinaryOperator, Error = SyntaxError> + Clone {
    choice((
        just(Token::Plus).to(BinaryOperator::Add),
        just(Token::Minus).to(BinaryOperator::Subtract),
    ))
}

/// `==`, `!=`, `>=`, `<=`, `>` or `<`.
///
/// The two-character operators are two adjacent tokens, tried before the
/// single-character ones.
pub fn comparison_operator() -> impl Parser<Token, BinaryOperator, Error = SyntaxError> + Clone {
    let pair = |first: Token, operator: BinaryOperator| {
        just::<Token, Token, SyntaxError>(first)
            .then(just(Token::Equals))
            .to(operator)
    };

    choice((
        pair(Token::Equals, BinaryOperator::Equal),
        pair(Token::Bang, BinaryOperator::NotEqual),
        pair(Token::GreaterThan, BinaryOperator::GreaterThanOrEqual),
        pair(Token::LessThan, BinaryOperator::LessThanOrEqual),
        just(Token::GreaterThan).to(BinaryOperator::GreaterThan),
        just(Token::LessThan).to(BinaryOperator::LessThan),
    ))
}
