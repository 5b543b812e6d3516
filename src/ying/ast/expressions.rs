//! Expression nodes
//!
//! Binary expressions always hold exactly two operands; chains of operators of
//! the same precedence nest to the left, so `3 - 2 - 1` is
//! `Binary(Binary(3, -, 2), -, 1)`. Parentheses in expressions only steer the
//! shape of the tree and leave no node behind.

use serde::Serialize;
use std::fmt;

use super::literals::{IntegerLiteral, Literal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "!")]
    Not,
}

impl UnaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Modulo,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<=")]
    LessThanOrEqual,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::LessThanOrEqual => "<=",
        }
    }

    /// Binding strength, higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 3,
            BinaryOperator::Add | BinaryOperator::Subtract => 2,
            BinaryOperator::Equal
            | BinaryOperator::NotEqual
            | BinaryOperator::GreaterThan
            | BinaryOperator::LessThan
            | BinaryOperator::GreaterThanOrEqual
            | BinaryOperator::LessThanOrEqual => 1,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpression {
    pub presign: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    pub lhs: Box<Expression>,
    pub operator: BinaryOperator,
    pub rhs: Box<Expression>,
}

/// `.name` or `["name"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyAccessExpression {
    pub name: String,
}

impl PropertyAccessExpression {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// `[0]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArrayAccessExpression {
    pub index: u64,
}

impl ArrayAccessExpression {
    pub fn new(index: u64) -> Self {
        Self { index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AccessPathElement {
    Property(PropertyAccessExpression),
    Array(ArrayAccessExpression),
}

impl AccessPathElement {
    pub fn property(name: impl Into<String>) -> Self {
        AccessPathElement::Property(PropertyAccessExpression::new(name))
    }

    pub fn array(index: u64) -> Self {
        AccessPathElement::Array(ArrayAccessExpression::new(index))
    }
}

/// `users[0].created_applications[0]`: a base identifier and one or more steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedAccessExpression {
    pub base_identifier: String,
    pub path: Vec<AccessPathElement>,
}

impl NestedAccessExpression {
    pub fn new(base_identifier: impl Into<String>, path: Vec<AccessPathElement>) -> Self {
        Self {
            base_identifier: base_identifier.into(),
            path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    Literal(Literal),
    Identifier(String),
    NestedAccess(NestedAccessExpression),
    Unary(UnaryExpression),
    Binary(BinaryExpression),
}

impl Expression {
    pub fn integer(value: u64) -> Self {
        Expression::Literal(Literal::Integer(IntegerLiteral::new(value)))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn unary(presign: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary(UnaryExpression {
            presign,
            operand: Box::new(operand),
        })
    }

    pub fn binary(lhs: Expression, operator: BinaryOperator, rhs: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            lhs: Box::new(lhs),
            operator,
            rhs: Box::new(rhs),
        })
    }

    /// An identifier when `path` is empty, a nested access chain otherwise.
    pub fn access(base_identifier: String, path: Vec<AccessPathElement>) -> Self {
        if path.is_empty() {
            Expression::Identifier(base_identifier)
        } else {
            Expression::NestedAccess(NestedAccessExpression::new(base_identifier, path))
        }
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}
