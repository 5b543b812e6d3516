//! Program grammar: comments and statements up to the end of input

use chumsky::prelude::*;

use crate::ying::ast::{Program, ProgramItem};
use crate::ying::lexer::Token;
use crate::ying::parser::comments::comment;
use crate::ying::parser::error::SyntaxError;
use crate::ying::parser::statements::statement;

pub fn program_item() -> impl Parser<Token, ProgramItem, Error = SyntaxError> + Clone {
    comment()
        .map(ProgramItem::Comment)
        .or(statement().map(ProgramItem::Statement))
}

/// Zero or more items, then end of input.
pub fn program() -> impl Parser<Token, Program, Error = SyntaxError> + Clone {
    program_item()
        .repeated()
        .then_ignore(end())
        .map(Program::new)
}
