//! # ying
//!
//! The syntactic front end of the Ying programming language: a lexer, a
//! grammar that turns source text into a typed AST, and the tooling around it
//! (project configuration, output formats, and the `ying` command line).
//!
//! ```no_run
//! use ying::ying::parser::parse_program;
//!
//! let program = parse_program("var answer: int = 6 * 7;").unwrap();
//! assert_eq!(program.items.len(), 1);
//! ```

pub mod ying;
