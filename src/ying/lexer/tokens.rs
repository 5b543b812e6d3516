//! Token definitions for Ying source
//!
//! [`RawToken`] is the logos-derived scanner: it only classifies lexemes.
//! [`Token`] is what the grammar consumes: payload-carrying variants own their
//! lexeme, and input that no pattern accepts becomes [`Token::Unknown`].

use logos::Logos;
use serde::Serialize;
use std::fmt;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum RawToken {
    // Comments
    #[regex(r"//[^\r\n]*")]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    MultiLineComment,

    // Keywords
    #[token("import")]
    Import,
    #[token("from")]
    From,
    #[token("export")]
    Export,
    #[token("struct")]
    Struct,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("type")]
    Type,
    #[token("as")]
    As,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("static")]
    Static,
    #[token("var")]
    Var,
    #[token("const")]
    Const,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Literals
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[regex(r#""([^"\\]|\\[\s\S])*""#)]
    String,
    #[regex(r"'([A-Za-z0-9]|\\[A-Za-z])'")]
    Char,
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0x[0-9A-Fa-f][0-9A-Fa-f_]*")]
    #[regex(r"0o[0-7][0-7_]*")]
    Integer,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    Float,

    // Punctuation
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("&")]
    Ampersand,
    #[token("|")]
    Pipe,
}

/// A lexed token as seen by the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    LineComment(String),
    MultiLineComment(String),

    Import,
    From,
    Export,
    Struct,
    Class,
    Interface,
    Type,
    As,
    Extends,
    Implements,
    Static,
    Var,
    Const,
    True,
    False,

    Identifier(String),
    String(String),
    Char(String),
    Integer(String),
    Float(String),

    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    LessThan,
    GreaterThan,
    Dot,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Colon,
    Semicolon,
    Comma,
    Equals,
    Question,
    Bang,
    Ampersand,
    Pipe,

    /// Input no token pattern accepts.
    Unknown(String),
}

impl Token {
    /// Build a grammar token from a scanned one and its source slice.
    pub fn from_raw(raw: RawToken, slice: &str) -> Self {
        match raw {
            RawToken::LineComment => Token::LineComment(slice.to_string()),
            RawToken::MultiLineComment => Token::MultiLineComment(slice.to_string()),
            RawToken::Import => Token::Import,
            RawToken::From => Token::From,
            RawToken::Export => Token::Export,
            RawToken::Struct => Token::Struct,
            RawToken::Class => Token::Class,
            RawToken::Interface => Token::Interface,
            RawToken::Type => Token::Type,
            RawToken::As => Token::As,
            RawToken::Extends => Token::Extends,
            RawToken::Implements => Token::Implements,
            RawToken::Static => Token::Static,
            RawToken::Var => Token::Var,
            RawToken::Const => Token::Const,
            RawToken::True => Token::True,
            RawToken::False => Token::False,
            RawToken::Identifier => Token::Identifier(slice.to_string()),
            RawToken::String => Token::String(slice.to_string()),
            RawToken::Char => Token::Char(slice.to_string()),
            RawToken::Integer => Token::Integer(slice.to_string()),
            RawToken::Float => Token::Float(slice.to_string()),
            RawToken::LeftParen => Token::LeftParen,
            RawToken::RightParen => Token::RightParen,
            RawToken::LeftBracket => Token::LeftBracket,
            RawToken::RightBracket => Token::RightBracket,
            RawToken::LeftBrace => Token::LeftBrace,
            RawToken::RightBrace => Token::RightBrace,
            RawToken::LessThan => Token::LessThan,
            RawToken::GreaterThan => Token::GreaterThan,
            RawToken::Dot => Token::Dot,
            RawToken::Plus => Token::Plus,
            RawToken::Minus => Token::Minus,
            RawToken::Star => Token::Star,
            RawToken::Slash => Token::Slash,
            RawToken::Percent => Token::Percent,
            RawToken::Colon => Token::Colon,
            RawToken::Semicolon => Token::Semicolon,
            RawToken::Comma => Token::Comma,
            RawToken::Equals => Token::Equals,
            RawToken::Question => Token::Question,
            RawToken::Bang => Token::Bang,
            RawToken::Ampersand => Token::Ampersand,
            RawToken::Pipe => Token::Pipe,
        }
    }

    /// Spelling of keyword and boolean tokens.
    ///
    /// These spellings also match the identifier pattern, so the identifier
    /// rule accepts them.
    pub fn keyword_text(&self) -> Option<&'static str> {
        let text = match self {
            Token::Import => "import",
            Token::From => "from",
            Token::Export => "export",
            Token::Struct => "struct",
            Token::Class => "class",
            Token::Interface => "interface",
            Token::Type => "type",
            Token::As => "as",
            Token::Extends => "extends",
            Token::Implements => "implements",
            Token::Static => "static",
            Token::Var => "var",
            Token::Const => "const",
            Token::True => "true",
            Token::False => "false",
            _ => return None,
        };
        Some(text)
    }

    /// The source text this token stands for.
    pub fn lexeme(&self) -> &str {
        match self {
            Token::LineComment(text)
            | Token::MultiLineComment(text)
            | Token::Identifier(text)
            | Token::String(text)
            | Token::Char(text)
            | Token::Integer(text)
            | Token::Float(text)
            | Token::Unknown(text) => text,
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::LessThan => "<",
            Token::GreaterThan => ">",
            Token::Dot => ".",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Equals => "=",
            Token::Question => "?",
            Token::Bang => "!",
            Token::Ampersand => "&",
            Token::Pipe => "|",
            keyword => keyword.keyword_text().unwrap_or_default(),
        }
    }

    /// Short variant name, used by the `token-simple` output.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::LineComment(_) => "LineComment",
            Token::MultiLineComment(_) => "MultiLineComment",
            Token::Identifier(_) => "Identifier",
            Token::String(_) => "String",
            Token::Char(_) => "Char",
            Token::Integer(_) => "Integer",
            Token::Float(_) => "Float",
            Token::Unknown(_) => "Unknown",
            Token::True | Token::False => "Boolean",
            token if token.keyword_text().is_some() => "Keyword",
            _ => "Punctuation",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexeme = self.lexeme();
        if lexeme.contains('\'') {
            write!(f, "\"{}\"", lexeme)
        } else {
            write!(f, "'{}'", lexeme)
        }
    }
}
