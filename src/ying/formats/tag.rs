//! XML-like AST tag serialization
//!
//! Serializes a program to an XML-like format that mirrors the AST structure.
//!
//! ## Format
//!
//! - Node kind → tag name
//! - Name, operator or literal value → text content
//! - Child nodes → nested in a `<children>` tag, omitted when there are none
//!
//! ## Example
//!
//! ```text
//! <program>
//!   <variable>total<children>
//!     <binary>+<children>
//!       <integer>1</integer>
//!       <identifier>count</identifier>
//!     </children></binary>
//!   </children></variable>
//! </program>
//! ```

use crate::ying::ast::{
    AccessPathElement, Comment, ComplexDataType, ExportableStatement, Expression, ImportedName,
    InferableDataType, InterfaceMember, InterfaceStatement, Literal, Program, ProgramItem,
    Statement, StructStatement, TypeArgument, TypeStatement,
};
use crate::ying::formats::source::ToSource;

/// One serialized node before rendering.
struct TagNode {
    tag: &'static str,
    label: String,
    children: Vec<TagNode>,
}

impl TagNode {
    fn leaf(tag: &'static str, label: impl Into<String>) -> Self {
        Self::new(tag, label, Vec::new())
    }

    fn new(tag: &'static str, label: impl Into<String>, children: Vec<TagNode>) -> Self {
        Self {
            tag,
            label: label.into(),
            children,
        }
    }
}

/// Serialize a program to AST tag format
pub fn serialize_program(program: &Program) -> String {
    let mut result = String::new();
    result.push_str("<program>\n");
    for item in &program.items {
        let node = match item {
            ProgramItem::Comment(comment) => comment_node(comment),
            ProgramItem::Statement(statement) => statement_node(statement),
        };
        render(&node, 1, &mut result);
    }
    result.push_str("</program>");
    result
}

fn render(node: &TagNode, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    output.push_str(&format!("{}<{}>", indent, node.tag));
    output.push_str(&escape_xml(&node.label));

    if node.children.is_empty() {
        output.push_str(&format!("</{}>\n", node.tag));
    } else {
        output.push_str("<children>\n");
        for child in &node.children {
            render(child, indent_level + 1, output);
        }
        output.push_str(&format!("{}</children></{}>\n", indent, node.tag));
    }
}

fn comment_node(comment: &Comment) -> TagNode {
    match comment {
        Comment::Line(line) => TagNode::leaf("line-comment", line.value.as_str()),
        Comment::MultiLine(multi) => TagNode::new(
            "multi-line-comment",
            "",
            multi
                .lines
                .iter()
                .map(|line| TagNode::leaf("line", line.as_str()))
                .collect(),
        ),
    }
}

fn statement_node(statement: &Statement) -> TagNode {
    match statement {
        Statement::Import(import) => TagNode::new(
            "import",
            import.path.as_str(),
            import.identifiers.iter().map(imported_name_node).collect(),
        ),
        Statement::Struct(statement) => struct_node(statement),
        Statement::Type(statement) => type_node(statement),
        Statement::Interface(statement) => interface_node(statement),
        Statement::Export(export) => {
            let inner = match &export.statement {
                ExportableStatement::Struct(statement) => struct_node(statement),
                ExportableStatement::Type(statement) => type_node(statement),
                ExportableStatement::Interface(statement) => interface_node(statement),
            };
            TagNode::new("export", "", vec![inner])
        }
        Statement::VariableDeclaration(declaration) => {
            let data_type = match &declaration.data_type {
                InferableDataType::Infer => TagNode::leaf("infer", ""),
                InferableDataType::Declared(data_type) => data_type_node(data_type),
            };
            TagNode::new(
                "variable",
                declaration.name.as_str(),
                vec![data_type, expression_node(&declaration.expression)],
            )
        }
    }
}

fn imported_name_node(name: &ImportedName) -> TagNode {
    match name {
        ImportedName::Plain(identifier) => TagNode::leaf("name", identifier.name.as_str()),
        ImportedName::Aliased(identifier) => TagNode::new(
            "name",
            identifier.name.as_str(),
            vec![TagNode::leaf("alias", identifier.alias.as_str())],
        ),
    }
}

fn struct_node(statement: &StructStatement) -> TagNode {
    let mut children = type_argument_nodes(&statement.type_arguments);
    children.extend(statement.properties.iter().map(|property| {
        TagNode::new(
            "property",
            property.name.as_str(),
            vec![data_type_node(&property.data_type)],
        )
    }));
    TagNode::new("struct", statement.name.as_str(), children)
}

fn type_node(statement: &TypeStatement) -> TagNode {
    TagNode::new(
        "type",
        statement.name.as_str(),
        vec![data_type_node(&statement.data_type)],
    )
}

fn interface_node(statement: &InterfaceStatement) -> TagNode {
    let mut children = type_argument_nodes(&statement.type_arguments);
    children.extend(statement.members.iter().map(member_node));
    TagNode::new("interface", statement.name.as_str(), children)
}

fn member_node(member: &InterfaceMember) -> TagNode {
    let mut children = Vec::new();
    if member.is_static {
        children.push(TagNode::leaf("static", ""));
    }
    children.extend(type_argument_nodes(&member.type_arguments));
    children.extend(member.parameters.iter().map(|parameter| {
        TagNode::new(
            "parameter",
            parameter.name.as_str(),
            vec![data_type_node(&parameter.data_type)],
        )
    }));
    children.push(TagNode::new(
        "returns",
        "",
        vec![data_type_node(&member.return_type)],
    ));
    TagNode::new("member", member.name.as_str(), children)
}

fn type_argument_nodes(type_arguments: &[TypeArgument]) -> Vec<TagNode> {
    type_arguments
        .iter()
        .map(|argument| {
            let mut children = Vec::new();
            if let Some(class_constraint) = &argument.class_constraint {
                children.push(TagNode::leaf("extends", class_constraint.to_source()));
            }
            if let Some(interface_constraint) = &argument.interface_constraint {
                children.push(TagNode::leaf("implements", interface_constraint.to_source()));
            }
            TagNode::new("type-argument", argument.name.as_str(), children)
        })
        .collect()
}

/// Data types are short enough to read as source text.
fn data_type_node(data_type: &ComplexDataType) -> TagNode {
    TagNode::leaf("data-type", data_type.to_source())
}

fn expression_node(expression: &Expression) -> TagNode {
    match expression {
        Expression::Literal(literal) => literal_node(literal),
        Expression::Identifier(name) => TagNode::leaf("identifier", name.as_str()),
        Expression::NestedAccess(access) => TagNode::new(
            "access",
            access.base_identifier.as_str(),
            access
                .path
                .iter()
                .map(|element| match element {
                    AccessPathElement::Property(property) => {
                        TagNode::leaf("property", property.name.as_str())
                    }
                    AccessPathElement::Array(array) => {
                        TagNode::leaf("index", array.index.to_string())
                    }
                })
                .collect(),
        ),
        Expression::Unary(unary) => TagNode::new(
            "unary",
            unary.presign.as_str(),
            vec![expression_node(&unary.operand)],
        ),
        Expression::Binary(binary) => TagNode::new(
            "binary",
            binary.operator.as_str(),
            vec![expression_node(&binary.lhs), expression_node(&binary.rhs)],
        ),
    }
}

fn literal_node(literal: &Literal) -> TagNode {
    match literal {
        Literal::String(string) => TagNode::leaf("string", string.value.as_str()),
        Literal::Char(character) => TagNode::leaf("char", character.value.as_str()),
        Literal::Boolean(boolean) => TagNode::leaf("boolean", boolean.to_string()),
        Literal::Integer(integer) => TagNode::leaf("integer", integer.value.to_string()),
        Literal::Float(_) => TagNode::leaf("float", literal.to_source()),
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
