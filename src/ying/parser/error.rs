//! Syntax error type shared by every grammar rule
//!
//! A [`SyntaxError`] records the furthest byte position a parse reached and
//! the expectations that were active there. When alternatives fail at the
//! same position their expectation sets are merged; otherwise the one that got
//! further wins.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

use crate::ying::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Byte offset into the source.
    pub position: usize,
    pub expected: BTreeSet<String>,
    /// The offending token, or `None` at end of input.
    pub found: Option<String>,
}

impl SyntaxError {
    pub fn new<I, S>(position: usize, expected: I, found: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            position,
            expected: expected.into_iter().map(Into::into).collect(),
            found,
        }
    }

    /// Keep the error that reached further into the input.
    pub fn furthest(errors: impl IntoIterator<Item = SyntaxError>) -> Option<SyntaxError> {
        errors
            .into_iter()
            .reduce(<SyntaxError as chumsky::Error<Token>>::merge)
    }

    /// 1-based `(line, column)` of the error position, counting columns in
    /// characters.
    pub fn location(&self, source: &str) -> (usize, usize) {
        let mut end = self.position.min(source.len());
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        let before = &source[..end];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |index| index + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    pub fn expects(&self, expectation: &str) -> bool {
        self.expected.contains(expectation)
    }
}

impl chumsky::Error<Token> for SyntaxError {
    type Span = Range<usize>;
    type Label = &'static str;

    fn expected_input_found<Iter: IntoIterator<Item = Option<Token>>>(
        span: Self::Span,
        expected: Iter,
        found: Option<Token>,
    ) -> Self {
        Self {
            position: span.start,
            expected: expected
                .into_iter()
                .map(|token| describe(token.as_ref()))
                .collect(),
            found: found.map(|token| token.to_string()),
        }
    }

    fn with_label(mut self, label: Self::Label) -> Self {
        self.expected = BTreeSet::from([label.to_string()]);
        self
    }

    fn merge(mut self, other: Self) -> Self {
        if other.position > self.position {
            return other;
        }
        if other.position == self.position {
            self.expected.extend(other.expected);
            if self.found.is_none() {
                self.found = other.found;
            }
        }
        self
    }
}

fn describe(token: Option<&Token>) -> String {
    token.map_or_else(|| "end of input".to_string(), Token::to_string)
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<&str> = self.expected.iter().map(String::as_str).collect();
        write!(
            f,
            "expected one of {{{}}} at position {}, found {}",
            expected.join(", "),
            self.position,
            self.found.as_deref().unwrap_or("end of input")
        )
    }
}

impl std::error::Error for SyntaxError {}
