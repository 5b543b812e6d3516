//! Statement grammar
//!
//! Each statement starts with an anchor keyword. Once the anchor matched, a
//! later failure aborts that alternative; across the alternatives of
//! [`statement`] the failure that got furthest is reported.

use chumsky::prelude::*;

use crate::ying::ast::{
    ExportStatement, ExportableStatement, ImportStatement, ImportedName, InferableDataType,
    InterfaceMember, InterfaceStatement, Parameter, Statement, StructProperty, StructStatement,
    TypeStatement, VariableDeclarationStatement,
};
use crate::ying::lexer::Token;
use crate::ying::parser::combinators::{identifier, string_literal, token};
use crate::ying::parser::data_types::{data_type, type_arguments};
use crate::ying::parser::error::SyntaxError;
use crate::ying::parser::expressions::expression;

/// `unit` or `unit as Unit`.
pub fn imported_name() -> impl Parser<Token, ImportedName, Error = SyntaxError> + Clone {
    identifier()
        .then(token(Token::As).ignore_then(identifier()).or_not())
        .map(|(name, alias)| match alias {
            Some(alias) => ImportedName::aliased(name, alias),
            None => ImportedName::plain(name),
        })
}

/// `import { unit as Unit, test } from "package:testing";`
pub fn import_statement() -> impl Parser<Token, ImportStatement, Error = SyntaxError> + Clone {
    token(Token::Import)
        .ignore_then(
            imported_name()
                .separated_by(token(Token::Comma))
                .delimited_by(token(Token::LeftBrace), token(Token::RightBrace)),
        )
        .then_ignore(token(Token::From))
        .then(string_literal())
        .then_ignore(token(Token::Semicolon))
        .map(|(identifiers, path)| ImportStatement {
            identifiers,
            path: path.value,
        })
}

/// `name: data_type`, without the terminating `;`.
pub fn struct_property() -> impl Parser<Token, StructProperty, Error = SyntaxError> + Clone {
    identifier()
        .then_ignore(token(Token::Colon))
        .then(data_type())
        .map(|(name, data_type)| StructProperty { name, data_type })
}

pub fn struct_statement() -> impl Parser<Token, StructStatement, Error = SyntaxError> + Clone {
    token(Token::Struct)
        .ignore_then(identifier())
        .then(type_arguments().or_not())
        .then(
            struct_property()
                .then_ignore(token(Token::Semicolon))
                .repeated()
                .delimited_by(token(Token::LeftBrace), token(Token::RightBrace)),
        )
        .map(|((name, type_arguments), properties)| StructStatement {
            name,
            type_arguments: type_arguments.unwrap_or_default(),
            properties,
        })
}

/// `type Id = string | int;`
pub fn type_statement() -> impl Parser<Token, TypeStatement, Error = SyntaxError> + Clone {
    token(Token::Type)
        .ignore_then(identifier())
        .then_ignore(token(Token::Equals))
        .then(data_type())
        .then_ignore(token(Token::Semicolon))
        .map(|(name, data_type)| TypeStatement { name, data_type })
}

pub fn parameter() -> impl Parser<Token, Parameter, Error = SyntaxError> + Clone {
    identifier()
        .then_ignore(token(Token::Colon))
        .then(data_type())
        .map(|(name, data_type)| Parameter { name, data_type })
}

/// `[static] name [<type arguments>] (parameters): return_type`, without the
/// terminating `;`.
pub fn interface_member() -> impl Parser<Token, InterfaceMember, Error = SyntaxError> + Clone {
    token(Token::Static)
        .or_not()
        .then(identifier())
        .then(type_arguments().or_not())
        .then(
            parameter()
                .separated_by(token(Token::Comma))
                .allow_trailing()
                .delimited_by(token(Token::LeftParen), token(Token::RightParen)),
        )
        .then_ignore(token(Token::Colon))
        .then(data_type())
        .map(
            |((((is_static, name), type_arguments), parameters), return_type)| InterfaceMember {
                name,
                type_arguments: type_arguments.unwrap_or_default(),
                parameters,
                return_type,
                is_static: is_static.is_some(),
            },
        )
}

pub fn interface_statement() -> impl Parser<Token, InterfaceStatement, Error = SyntaxError> + Clone
{
    token(Token::Interface)
        .ignore_then(identifier())
        .then(type_arguments().or_not())
        .then(
            interface_member()
                .then_ignore(token(Token::Semicolon))
                .repeated()
                .delimited_by(token(Token::LeftBrace), token(Token::RightBrace)),
        )
        .map(|((name, type_arguments), members)| InterfaceStatement {
            name,
            type_arguments: type_arguments.unwrap_or_default(),
            members,
        })
}

/// `export` followed by a struct, type or interface statement.
pub fn export_statement() -> impl Parser<Token, ExportStatement, Error = SyntaxError> + Clone {
    token(Token::Export)
        .ignore_then(choice((
            struct_statement().map(ExportableStatement::Struct),
            type_statement().map(ExportableStatement::Type),
            interface_statement().map(ExportableStatement::Interface),
        )))
        .map(|statement| ExportStatement { statement })
}

/// `var name [: data_type] = expression;`
pub fn variable_declaration(
) -> impl Parser<Token, VariableDeclarationStatement, Error = SyntaxError> + Clone {
    token(Token::Var)
        .ignore_then(identifier())
        .then(token(Token::Colon).ignore_then(data_type()).or_not())
        .then_ignore(token(Token::Equals))
        .then(expression())
        .then_ignore(token(Token::Semicolon))
        .map(
            |((name, data_type), expression)| VariableDeclarationStatement {
                name,
                data_type: InferableDataType::from(data_type),
                expression,
            },
        )
}

pub fn statement() -> impl Parser<Token, Statement, Error = SyntaxError> + Clone {
    choice((
        import_statement().map(Statement::Import),
        struct_statement().map(Statement::Struct),
        type_statement().map(Statement::Type),
        interface_statement().map(Statement::Interface),
        export_statement().map(Statement::Export),
        variable_declaration().map(Statement::VariableDeclaration),
    ))
    .boxed()
}
