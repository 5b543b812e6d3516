//! A whole compilation unit

use serde::Serialize;

use super::comments::Comment;
use super::statements::Statement;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProgramItem {
    Comment(Comment),
    Statement(Statement),
}

/// Top-level comments and statements in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub items: Vec<ProgramItem>,
}

impl Program {
    pub fn new(items: Vec<ProgramItem>) -> Self {
        Self { items }
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.items.iter().filter_map(|item| match item {
            ProgramItem::Statement(statement) => Some(statement),
            ProgramItem::Comment(_) => None,
        })
    }

    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.items.iter().filter_map(|item| match item {
            ProgramItem::Comment(comment) => Some(comment),
            ProgramItem::Statement(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
