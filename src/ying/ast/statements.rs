//! Statement nodes

use serde::Serialize;

use super::data_types::{ComplexDataType, InferableDataType, TypeArgument};
use super::expressions::Expression;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedIdentifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedAliasedIdentifier {
    pub name: String,
    pub alias: String,
}

/// One entry of an import list: `unit` or `unit as Unit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ImportedName {
    Plain(ImportedIdentifier),
    Aliased(ImportedAliasedIdentifier),
}

impl ImportedName {
    pub fn plain(name: impl Into<String>) -> Self {
        ImportedName::Plain(ImportedIdentifier { name: name.into() })
    }

    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        ImportedName::Aliased(ImportedAliasedIdentifier {
            name: name.into(),
            alias: alias.into(),
        })
    }

    /// The name the import is visible under in the importing unit.
    pub fn local_name(&self) -> &str {
        match self {
            ImportedName::Plain(identifier) => &identifier.name,
            ImportedName::Aliased(identifier) => &identifier.alias,
        }
    }
}

/// `import { unit as Unit, test } from "package:testing";`
///
/// `path` holds the unquoted contents of the path string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportStatement {
    pub identifiers: Vec<ImportedName>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructProperty {
    pub name: String,
    pub data_type: ComplexDataType,
}

impl StructProperty {
    pub fn new(name: impl Into<String>, data_type: impl Into<ComplexDataType>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructStatement {
    pub name: String,
    pub type_arguments: Vec<TypeArgument>,
    pub properties: Vec<StructProperty>,
}

/// `type Id = string | int;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeStatement {
    pub name: String,
    pub data_type: ComplexDataType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub data_type: ComplexDataType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, data_type: impl Into<ComplexDataType>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// `static calculate<T>(x: T, y: T): T`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceMember {
    pub name: String,
    pub type_arguments: Vec<TypeArgument>,
    pub parameters: Vec<Parameter>,
    pub return_type: ComplexDataType,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceStatement {
    pub name: String,
    pub type_arguments: Vec<TypeArgument>,
    pub members: Vec<InterfaceMember>,
}

/// The declarations that may follow `export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExportableStatement {
    Struct(StructStatement),
    Type(TypeStatement),
    Interface(InterfaceStatement),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportStatement {
    pub statement: ExportableStatement,
}

/// `var name: int = 1 + 2;`, or `var name = 1 + 2;` with an inferred type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclarationStatement {
    pub name: String,
    pub data_type: InferableDataType,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    Import(ImportStatement),
    Struct(StructStatement),
    Type(TypeStatement),
    Interface(InterfaceStatement),
    Export(ExportStatement),
    VariableDeclaration(VariableDeclarationStatement),
}
