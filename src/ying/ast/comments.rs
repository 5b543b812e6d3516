//! Comment nodes
//!
//! Comments are kept as written: a line comment holds its whole line including
//! the `//` marker, a multi-line comment holds its lines (markers included) with
//! the leading indentation of every line removed.

use serde::Serialize;

/// A `// ...` comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineComment {
    pub value: String,
}

impl LineComment {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A `/* ... */` comment, split into lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiLineComment {
    pub lines: Vec<String>,
}

impl MultiLineComment {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a comment from its raw lexeme.
    ///
    /// The lexeme is trimmed as a whole, split on line breaks, and every line
    /// loses its leading whitespace, so `" * text"` continuation lines become
    /// `"* text"`.
    pub fn from_lexeme(raw: &str) -> Self {
        Self::new(raw.trim().lines().map(str::trim_start))
    }

    pub fn uses_multiple_lines(&self) -> bool {
        self.lines.len() > 1
    }

    /// `/** ... */` comments document the declaration that follows them.
    pub fn is_documentation(&self) -> bool {
        self.lines
            .first()
            .is_some_and(|first| first.starts_with("/**") && first != "/**/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Comment {
    Line(LineComment),
    MultiLine(MultiLineComment),
}

impl From<LineComment> for Comment {
    fn from(comment: LineComment) -> Self {
        Comment::Line(comment)
    }
}

impl From<MultiLineComment> for Comment {
    fn from(comment: MultiLineComment) -> Self {
        Comment::MultiLine(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_block_comment() {
        let comment = MultiLineComment::from_lexeme("/* unit test */");

        assert_eq!(comment, MultiLineComment::new(["/* unit test */"]));
        assert!(!comment.uses_multiple_lines());
    }

    #[test]
    fn test_block_comment_lines_lose_indentation() {
        let comment = MultiLineComment::from_lexeme("/*\n   unit test\n */\n");

        assert_eq!(comment.lines, vec!["/*", "unit test", "*/"]);
        assert!(comment.uses_multiple_lines());
    }

    #[test]
    fn test_block_comment_with_asterisk_gutter() {
        let comment = MultiLineComment::from_lexeme("/*\r\n * unit test\r\n */");

        assert_eq!(comment.lines, vec!["/*", "* unit test", "*/"]);
    }

    #[test]
    fn test_documentation_detection() {
        assert!(MultiLineComment::from_lexeme("/** hello world */").is_documentation());
        assert!(!MultiLineComment::from_lexeme("/* hello world */").is_documentation());
        assert!(!MultiLineComment::from_lexeme("/**/").is_documentation());
    }
}
