//! Literal nodes and the builders that turn raw lexemes into them
//!
//! The lexer hands literals over exactly as written. The builders here strip
//! delimiters and digit separators and convert numbers; they do not unescape
//! string or char contents, escape sequences stay verbatim for later stages.

use serde::Serialize;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// `"unit \" test"` becomes `unit \" test`.
    pub fn from_lexeme(raw: &str) -> Self {
        Self::new(strip_delimiters(raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharLiteral {
    pub value: String,
}

impl CharLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn from_lexeme(raw: &str) -> Self {
        Self::new(strip_delimiters(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BooleanLiteral {
    pub value: bool,
}

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegerLiteral {
    pub value: u64,
}

impl IntegerLiteral {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Convert a decimal, `0x` hexadecimal or `0o` octal lexeme.
    ///
    /// Underscores are digit separators and are dropped before conversion.
    /// Fails when the value does not fit into 64 bits.
    pub fn from_lexeme(raw: &str) -> Result<Self, ParseIntError> {
        let digits = without_separators(raw);
        let (radix, body) = if let Some(hex) = digits.strip_prefix("0x") {
            (16, hex)
        } else if let Some(octal) = digits.strip_prefix("0o") {
            (8, octal)
        } else {
            (10, digits.as_str())
        };

        u64::from_str_radix(body, radix).map(Self::new)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatLiteral {
    pub value: f64,
}

impl FloatLiteral {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn from_lexeme(raw: &str) -> Result<Self, ParseFloatError> {
        without_separators(raw).parse().map(Self::new)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    String(StringLiteral),
    Char(CharLiteral),
    Boolean(BooleanLiteral),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
}

impl From<StringLiteral> for Literal {
    fn from(literal: StringLiteral) -> Self {
        Literal::String(literal)
    }
}

impl From<CharLiteral> for Literal {
    fn from(literal: CharLiteral) -> Self {
        Literal::Char(literal)
    }
}

impl From<BooleanLiteral> for Literal {
    fn from(literal: BooleanLiteral) -> Self {
        Literal::Boolean(literal)
    }
}

impl From<IntegerLiteral> for Literal {
    fn from(literal: IntegerLiteral) -> Self {
        Literal::Integer(literal)
    }
}

impl From<FloatLiteral> for Literal {
    fn from(literal: FloatLiteral) -> Self {
        Literal::Float(literal)
    }
}

/// Drop the first and the last character (the quotes).
fn strip_delimiters(raw: &str) -> &str {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn without_separators(raw: &str) -> String {
    raw.chars().filter(|c| *c != '_').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_keeps_escapes() {
        assert_eq!(
            StringLiteral::from_lexeme(r#""unit \" test""#),
            StringLiteral::new(r#"unit \" test"#)
        );
        assert_eq!(StringLiteral::from_lexeme(r#""""#), StringLiteral::new(""));
    }

    #[test]
    fn test_char_literal_keeps_escapes() {
        assert_eq!(CharLiteral::from_lexeme("'a'"), CharLiteral::new("a"));
        assert_eq!(CharLiteral::from_lexeme(r"'\n'"), CharLiteral::new(r"\n"));
    }

    #[test]
    fn test_integer_bases() {
        assert_eq!(IntegerLiteral::from_lexeme("1_000"), Ok(IntegerLiteral::new(1000)));
        assert_eq!(IntegerLiteral::from_lexeme("0x1F"), Ok(IntegerLiteral::new(31)));
        assert_eq!(IntegerLiteral::from_lexeme("0xff_ff"), Ok(IntegerLiteral::new(65535)));
        assert_eq!(IntegerLiteral::from_lexeme("0o17"), Ok(IntegerLiteral::new(15)));
        assert_eq!(IntegerLiteral::from_lexeme("007"), Ok(IntegerLiteral::new(7)));
    }

    #[test]
    fn test_integer_overflow_is_rejected() {
        assert!(IntegerLiteral::from_lexeme("18446744073709551616").is_err());
        assert_eq!(
            IntegerLiteral::from_lexeme("18446744073709551615"),
            Ok(IntegerLiteral::new(u64::MAX))
        );
    }

    #[test]
    fn test_float_separators() {
        assert_eq!(FloatLiteral::from_lexeme("1_0.2_5"), Ok(FloatLiteral::new(10.25)));
        assert_eq!(FloatLiteral::from_lexeme("0.5"), Ok(FloatLiteral::new(0.5)));
    }
}
