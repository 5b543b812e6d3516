//! Property-based tests for the Ying front end
//!
//! - Every word matching the identifier pattern parses as an identifier.
//! - Statements generated from the grammar's value space print to source that
//!   parses back to an equal tree.

use proptest::prelude::*;
use ying::ying::ast::{
    AccessPathElement, BinaryOperator, BooleanLiteral, CharLiteral, ComplexDataType, DataType,
    ExportStatement, ExportableStatement, Expression, FloatLiteral, ImportStatement, ImportedName,
    InferableDataType, IntegerLiteral, InterfaceMember, InterfaceStatement, IntersectionDataType,
    Literal, Parameter, ParenthesizedDataType, Statement, StringLiteral, StructProperty,
    StructStatement, TypeArgument, TypeStatement, UnaryOperator, UnionDataType,
    VariableDeclarationStatement,
};
use ying::ying::formats::ToSource;
use ying::ying::lexer::tokenize;
use ying::ying::parser::combinators::identifier;
use ying::ying::parser::{parse_statement, parse_with};

fn is_reserved(word: &str) -> bool {
    matches!(
        word,
        "import"
            | "from"
            | "export"
            | "struct"
            | "class"
            | "interface"
            | "type"
            | "as"
            | "extends"
            | "implements"
            | "static"
            | "var"
            | "const"
            | "true"
            | "false"
    )
}

/// Names that cannot be mistaken for a keyword or boolean literal.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,7}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| !is_reserved(s))
}

fn type_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Za-z0-9]{0,7}").expect("valid regex")
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z :/.]{0,10}").expect("valid regex")
}

// -- Data types --

fn type_argument_strategy() -> impl Strategy<Value = TypeArgument> {
    (
        type_name_strategy(),
        prop::option::of(type_name_strategy()),
        prop::option::of(type_name_strategy()),
    )
        .prop_map(|(name, class_constraint, interface_constraint)| TypeArgument {
            name,
            class_constraint: class_constraint.map(DataType::new),
            interface_constraint: interface_constraint.map(ComplexDataType::named),
        })
}

fn raw_data_type_strategy() -> impl Strategy<Value = DataType> {
    (
        type_name_strategy(),
        prop::collection::vec(type_argument_strategy(), 0..3),
    )
        .prop_map(|(name, type_arguments)| DataType::with_type_arguments(name, type_arguments))
}

/// Wrap a member in parentheses when the enclosing level could not hold it
/// bare.
fn as_operand(member: ComplexDataType, allow_intersection: bool) -> ComplexDataType {
    match member {
        ComplexDataType::Union(_) => ParenthesizedDataType::new(member).into(),
        ComplexDataType::Intersection(_) if !allow_intersection => {
            ParenthesizedDataType::new(member).into()
        }
        other => other,
    }
}

fn data_type_strategy() -> impl Strategy<Value = ComplexDataType> {
    let leaf = raw_data_type_strategy().prop_map(ComplexDataType::Raw);

    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            inner
                .clone()
                .prop_map(|member| ComplexDataType::Parenthesized(ParenthesizedDataType::new(member))),
            prop::collection::vec(inner.clone(), 2..4).prop_map(|members| {
                ComplexDataType::Intersection(IntersectionDataType::new(
                    members
                        .into_iter()
                        .map(|member| as_operand(member, false))
                        .collect(),
                ))
            }),
            prop::collection::vec(inner, 2..4).prop_map(|members| {
                ComplexDataType::Union(UnionDataType::new(
                    members
                        .into_iter()
                        .map(|member| as_operand(member, true))
                        .collect(),
                ))
            }),
        ]
    })
}

// -- Expressions --

fn literal_strategy() -> impl Strategy<Value = Literal> {
    prop_oneof![
        text_strategy().prop_map(|value| Literal::String(StringLiteral::new(value))),
        prop::string::string_regex("[a-z0-9]")
            .expect("valid regex")
            .prop_map(|value| Literal::Char(CharLiteral::new(value))),
        any::<bool>().prop_map(|value| Literal::Boolean(BooleanLiteral::new(value))),
        any::<u64>().prop_map(|value| Literal::Integer(IntegerLiteral::new(value))),
        (0.0f64..1.0e9).prop_map(|value| Literal::Float(FloatLiteral::new(value))),
    ]
}

fn access_path_element_strategy() -> impl Strategy<Value = AccessPathElement> {
    prop_oneof![
        name_strategy().prop_map(AccessPathElement::property),
        text_strategy().prop_map(AccessPathElement::property),
        any::<u32>().prop_map(|index| AccessPathElement::array(u64::from(index))),
    ]
}

fn unary_operator_strategy() -> impl Strategy<Value = UnaryOperator> {
    prop_oneof![
        Just(UnaryOperator::Plus),
        Just(UnaryOperator::Minus),
        Just(UnaryOperator::Not),
    ]
}

fn binary_operator_strategy() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![
        Just(BinaryOperator::Multiply),
        Just(BinaryOperator::Divide),
        Just(BinaryOperator::Modulo),
        Just(BinaryOperator::Add),
        Just(BinaryOperator::Subtract),
        Just(BinaryOperator::Equal),
        Just(BinaryOperator::NotEqual),
        Just(BinaryOperator::GreaterThan),
        Just(BinaryOperator::LessThan),
        Just(BinaryOperator::GreaterThanOrEqual),
        Just(BinaryOperator::LessThanOrEqual),
    ]
}

fn expression_strategy() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        literal_strategy().prop_map(Expression::Literal),
        name_strategy().prop_map(Expression::Identifier),
        (
            name_strategy(),
            prop::collection::vec(access_path_element_strategy(), 1..4)
        )
            .prop_map(|(base, path)| Expression::access(base, path)),
    ];

    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (unary_operator_strategy(), inner.clone())
                .prop_map(|(presign, operand)| Expression::unary(presign, operand)),
            (inner.clone(), binary_operator_strategy(), inner)
                .prop_map(|(lhs, operator, rhs)| Expression::binary(lhs, operator, rhs)),
        ]
    })
}

// -- Statements --

fn imported_name_strategy() -> impl Strategy<Value = ImportedName> {
    (name_strategy(), prop::option::of(name_strategy())).prop_map(|(name, alias)| match alias {
        Some(alias) => ImportedName::aliased(name, alias),
        None => ImportedName::plain(name),
    })
}

fn struct_strategy() -> impl Strategy<Value = StructStatement> {
    (
        type_name_strategy(),
        prop::collection::vec(type_argument_strategy(), 0..3),
        prop::collection::vec((name_strategy(), data_type_strategy()), 0..4),
    )
        .prop_map(|(name, type_arguments, properties)| StructStatement {
            name,
            type_arguments,
            properties: properties
                .into_iter()
                .map(|(name, data_type)| StructProperty::new(name, data_type))
                .collect(),
        })
}

fn type_statement_strategy() -> impl Strategy<Value = TypeStatement> {
    (type_name_strategy(), data_type_strategy())
        .prop_map(|(name, data_type)| TypeStatement { name, data_type })
}

fn interface_member_strategy() -> impl Strategy<Value = InterfaceMember> {
    (
        name_strategy(),
        prop::collection::vec(type_argument_strategy(), 0..2),
        prop::collection::vec((name_strategy(), data_type_strategy()), 0..3),
        data_type_strategy(),
        any::<bool>(),
    )
        .prop_map(
            |(name, type_arguments, parameters, return_type, is_static)| InterfaceMember {
                name,
                type_arguments,
                parameters: parameters
                    .into_iter()
                    .map(|(name, data_type)| Parameter::new(name, data_type))
                    .collect(),
                return_type,
                is_static,
            },
        )
}

fn interface_strategy() -> impl Strategy<Value = InterfaceStatement> {
    (
        type_name_strategy(),
        prop::collection::vec(type_argument_strategy(), 0..2),
        prop::collection::vec(interface_member_strategy(), 0..3),
    )
        .prop_map(|(name, type_arguments, members)| InterfaceStatement {
            name,
            type_arguments,
            members,
        })
}

fn statement_strategy() -> impl Strategy<Value = Statement> {
    prop_oneof![
        (
            prop::collection::vec(imported_name_strategy(), 0..4),
            text_strategy()
        )
            .prop_map(|(identifiers, path)| Statement::Import(ImportStatement {
                identifiers,
                path
            })),
        struct_strategy().prop_map(Statement::Struct),
        type_statement_strategy().prop_map(Statement::Type),
        interface_strategy().prop_map(Statement::Interface),
        prop_oneof![
            struct_strategy().prop_map(ExportableStatement::Struct),
            type_statement_strategy().prop_map(ExportableStatement::Type),
            interface_strategy().prop_map(ExportableStatement::Interface),
        ]
        .prop_map(|statement| Statement::Export(ExportStatement { statement })),
        (
            name_strategy(),
            prop::option::of(data_type_strategy()),
            expression_strategy()
        )
            .prop_map(|(name, data_type, expression)| {
                Statement::VariableDeclaration(VariableDeclarationStatement {
                    name,
                    data_type: InferableDataType::from(data_type),
                    expression,
                })
            }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_identifier_pattern_is_accepted(word in "[A-Za-z_][A-Za-z0-9_]{0,15}") {
        prop_assert_eq!(parse_with(identifier(), &word).unwrap(), word);
    }

    #[test]
    fn prop_leading_digit_is_rejected(word in "[0-9][A-Za-z0-9_]{0,15}") {
        let error = parse_with(identifier(), &word).unwrap_err();

        prop_assert_eq!(error.position, 0);
        prop_assert!(error.expects("identifier"));
    }

    #[test]
    fn prop_lexer_never_panics(source in "\\PC{0,64}") {
        let _ = tokenize(&source);
    }

    #[test]
    fn prop_statement_round_trip(statement in statement_strategy()) {
        let printed = statement.to_source();
        let reparsed = parse_statement(&printed);

        prop_assert!(reparsed.is_ok(), "{}\n{:?}", printed, reparsed);
        prop_assert_eq!(reparsed.unwrap(), statement);
    }
}
