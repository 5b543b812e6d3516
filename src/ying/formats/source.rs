//! Source printer
//!
//! Renders AST nodes back to Ying source. The output re-parses to a
//! structurally equal tree: binary operands are parenthesized only where
//! precedence or left associativity requires it, and floats always keep a
//! fractional part so they do not turn into integers.

use crate::ying::ast::{
    AccessPathElement, Comment, ComplexDataType, DataType, ExportableStatement, Expression,
    ImportedName, InferableDataType, InterfaceMember, InterfaceStatement, Literal, Program,
    ProgramItem, Statement, StructStatement, TypeArgument, TypeStatement,
};

const INDENT: &str = "    ";

/// Nodes that can be printed as Ying source.
pub trait ToSource {
    fn write_source(&self, output: &mut String);

    fn to_source(&self) -> String {
        let mut output = String::new();
        self.write_source(&mut output);
        output
    }
}

impl ToSource for Program {
    /// One item per line, with a trailing newline.
    fn write_source(&self, output: &mut String) {
        for item in &self.items {
            match item {
                ProgramItem::Comment(comment) => comment.write_source(output),
                ProgramItem::Statement(statement) => statement.write_source(output),
            }
            output.push('\n');
        }
    }
}

impl ToSource for Comment {
    fn write_source(&self, output: &mut String) {
        match self {
            Comment::Line(comment) => output.push_str(&comment.value),
            Comment::MultiLine(comment) => output.push_str(&comment.lines.join("\n")),
        }
    }
}

impl ToSource for Statement {
    fn write_source(&self, output: &mut String) {
        match self {
            Statement::Import(import) => {
                let names: Vec<String> = import.identifiers.iter().map(imported_name).collect();
                if names.is_empty() {
                    output.push_str("import {} from \"");
                } else {
                    output.push_str(&format!("import {{ {} }} from \"", names.join(", ")));
                }
                output.push_str(&import.path);
                output.push_str("\";");
            }
            Statement::Struct(statement) => write_struct(statement, output),
            Statement::Type(statement) => write_type(statement, output),
            Statement::Interface(statement) => write_interface(statement, output),
            Statement::Export(export) => {
                output.push_str("export ");
                export.statement.write_source(output);
            }
            Statement::VariableDeclaration(declaration) => {
                output.push_str("var ");
                output.push_str(&declaration.name);
                if let InferableDataType::Declared(data_type) = &declaration.data_type {
                    output.push_str(": ");
                    data_type.write_source(output);
                }
                output.push_str(" = ");
                declaration.expression.write_source(output);
                output.push(';');
            }
        }
    }
}

impl ToSource for ExportableStatement {
    fn write_source(&self, output: &mut String) {
        match self {
            ExportableStatement::Struct(statement) => write_struct(statement, output),
            ExportableStatement::Type(statement) => write_type(statement, output),
            ExportableStatement::Interface(statement) => write_interface(statement, output),
        }
    }
}

fn write_struct(statement: &StructStatement, output: &mut String) {
    output.push_str("struct ");
    output.push_str(&statement.name);
    write_type_arguments(&statement.type_arguments, output);
    output.push_str(" {\n");
    for property in &statement.properties {
        output.push_str(INDENT);
        output.push_str(&property.name);
        output.push_str(": ");
        property.data_type.write_source(output);
        output.push_str(";\n");
    }
    output.push('}');
}

fn write_type(statement: &TypeStatement, output: &mut String) {
    output.push_str("type ");
    output.push_str(&statement.name);
    output.push_str(" = ");
    statement.data_type.write_source(output);
    output.push(';');
}

fn write_interface(statement: &InterfaceStatement, output: &mut String) {
    output.push_str("interface ");
    output.push_str(&statement.name);
    write_type_arguments(&statement.type_arguments, output);
    output.push_str(" {\n");
    for member in &statement.members {
        output.push_str(INDENT);
        member.write_source(output);
        output.push_str(";\n");
    }
    output.push('}');
}

impl ToSource for InterfaceMember {
    fn write_source(&self, output: &mut String) {
        if self.is_static {
            output.push_str("static ");
        }
        output.push_str(&self.name);
        write_type_arguments(&self.type_arguments, output);
        output.push('(');
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                output.push_str(", ");
            }
            output.push_str(&parameter.name);
            output.push_str(": ");
            parameter.data_type.write_source(output);
        }
        output.push_str("): ");
        self.return_type.write_source(output);
    }
}

impl ToSource for ComplexDataType {
    fn write_source(&self, output: &mut String) {
        match self {
            ComplexDataType::Raw(data_type) => data_type.write_source(output),
            ComplexDataType::Union(union) => {
                for (index, member) in union.types.iter().enumerate() {
                    if index > 0 {
                        output.push_str(" | ");
                    }
                    write_grouped(member, matches!(member, ComplexDataType::Union(_)), output);
                }
            }
            ComplexDataType::Intersection(intersection) => {
                for (index, member) in intersection.types.iter().enumerate() {
                    if index > 0 {
                        output.push_str(" & ");
                    }
                    let grouped = matches!(
                        member,
                        ComplexDataType::Union(_) | ComplexDataType::Intersection(_)
                    );
                    write_grouped(member, grouped, output);
                }
            }
            ComplexDataType::Parenthesized(parenthesized) => {
                write_grouped(parenthesized.inner.as_ref(), true, output);
            }
        }
    }
}

impl ToSource for DataType {
    fn write_source(&self, output: &mut String) {
        output.push_str(&self.name);
        write_type_arguments(&self.type_arguments, output);
    }
}

impl ToSource for TypeArgument {
    fn write_source(&self, output: &mut String) {
        output.push_str(&self.name);
        if let Some(class_constraint) = &self.class_constraint {
            output.push_str(" extends ");
            class_constraint.write_source(output);
        }
        if let Some(interface_constraint) = &self.interface_constraint {
            output.push_str(" implements ");
            interface_constraint.write_source(output);
        }
    }
}

impl ToSource for Expression {
    fn write_source(&self, output: &mut String) {
        match self {
            Expression::Literal(literal) => literal.write_source(output),
            Expression::Identifier(name) => output.push_str(name),
            Expression::NestedAccess(access) => {
                output.push_str(&access.base_identifier);
                for element in &access.path {
                    match element {
                        AccessPathElement::Property(property) if is_identifier(&property.name) => {
                            output.push('.');
                            output.push_str(&property.name);
                        }
                        AccessPathElement::Property(property) => {
                            output.push_str("[\"");
                            output.push_str(&property.name);
                            output.push_str("\"]");
                        }
                        AccessPathElement::Array(array) => {
                            output.push_str(&format!("[{}]", array.index));
                        }
                    }
                }
            }
            Expression::Unary(unary) => {
                output.push_str(unary.presign.as_str());
                let grouped = matches!(
                    unary.operand.as_ref(),
                    Expression::Unary(_) | Expression::Binary(_)
                );
                write_grouped(unary.operand.as_ref(), grouped, output);
            }
            Expression::Binary(binary) => {
                let precedence = binary.operator.precedence();
                let lhs_grouped = binding(&binary.lhs).is_some_and(|lhs| lhs < precedence);
                let rhs_grouped = binding(&binary.rhs).is_some_and(|rhs| rhs <= precedence);

                write_grouped(binary.lhs.as_ref(), lhs_grouped, output);
                output.push(' ');
                output.push_str(binary.operator.as_str());
                output.push(' ');
                write_grouped(binary.rhs.as_ref(), rhs_grouped, output);
            }
        }
    }
}

impl ToSource for Literal {
    fn write_source(&self, output: &mut String) {
        match self {
            Literal::String(literal) => output.push_str(&format!("\"{}\"", literal.value)),
            Literal::Char(literal) => output.push_str(&format!("'{}'", literal.value)),
            Literal::Boolean(literal) => output.push_str(&literal.to_string()),
            Literal::Integer(literal) => output.push_str(&literal.value.to_string()),
            Literal::Float(literal) => {
                let text = literal.value.to_string();
                output.push_str(&text);
                if !text.contains('.') {
                    output.push_str(".0");
                }
            }
        }
    }
}

fn imported_name(name: &ImportedName) -> String {
    match name {
        ImportedName::Plain(identifier) => identifier.name.clone(),
        ImportedName::Aliased(identifier) => format!("{} as {}", identifier.name, identifier.alias),
    }
}

fn write_type_arguments(type_arguments: &[TypeArgument], output: &mut String) {
    if type_arguments.is_empty() {
        return;
    }
    output.push('<');
    for (index, argument) in type_arguments.iter().enumerate() {
        if index > 0 {
            output.push_str(", ");
        }
        argument.write_source(output);
    }
    output.push('>');
}

fn write_grouped<T: ToSource + ?Sized>(node: &T, grouped: bool, output: &mut String) {
    if grouped {
        output.push('(');
        node.write_source(output);
        output.push(')');
    } else {
        node.write_source(output);
    }
}

/// Precedence of a binary expression, `None` for everything tighter.
fn binding(expression: &Expression) -> Option<u8> {
    match expression {
        Expression::Binary(binary) => Some(binary.operator.precedence()),
        _ => None,
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
