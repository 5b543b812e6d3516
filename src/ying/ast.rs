//! AST definitions for the Ying language
//!
//! Every node is an immutable value type: nodes are built bottom-up by the
//! grammar rules in [`crate::ying::parser`] and compared structurally. The
//! recursive sum types ([`ComplexDataType`], [`Expression`]) own their children
//! through `Box`/`Vec`, so a tree never shares or back-references nodes.
//!
//! The node families live in their own modules:
//!
//! - [`comments`]: line and multi-line comments
//! - [`literals`]: string, char, boolean, integer and float literals
//! - [`data_types`]: raw, union, intersection and parenthesized data types
//! - [`expressions`]: literals, identifiers, access chains, unary and binary expressions
//! - [`statements`]: imports, structs, type aliases, interfaces, exports, variables
//! - [`program`]: a whole compilation unit

pub mod comments;
pub mod data_types;
pub mod expressions;
pub mod literals;
pub mod program;
pub mod statements;

pub use comments::{Comment, LineComment, MultiLineComment};
pub use data_types::{
    ComplexDataType, DataType, InferableDataType, IntersectionDataType, ParenthesizedDataType,
    TypeArgument, UnionDataType,
};
pub use expressions::{
    AccessPathElement, ArrayAccessExpression, BinaryExpression, BinaryOperator, Expression,
    NestedAccessExpression, PropertyAccessExpression, UnaryExpression, UnaryOperator,
};
pub use literals::{
    BooleanLiteral, CharLiteral, FloatLiteral, IntegerLiteral, Literal, StringLiteral,
};
pub use program::{Program, ProgramItem};
pub use statements::{
    ExportStatement, ExportableStatement, ImportStatement, ImportedAliasedIdentifier,
    ImportedIdentifier, ImportedName, InterfaceMember, InterfaceStatement, Parameter, Statement,
    StructProperty, StructStatement, TypeStatement, VariableDeclarationStatement,
};
