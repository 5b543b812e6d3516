//! Main module for Ying front-end functionality

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod project;
