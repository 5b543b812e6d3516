//! Integration tests for the expression grammar

use rstest::rstest;
use ying::ying::ast::{
    AccessPathElement, BinaryOperator, BooleanLiteral, Expression, FloatLiteral, Literal,
    StringLiteral, UnaryOperator,
};
use ying::ying::formats::ToSource;
use ying::ying::parser::parse_expression;

fn int(value: u64) -> Expression {
    Expression::integer(value)
}

fn ident(name: &str) -> Expression {
    Expression::identifier(name)
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_expression("1 + 2 * 3").unwrap(),
        Expression::binary(
            int(1),
            BinaryOperator::Add,
            Expression::binary(int(2), BinaryOperator::Multiply, int(3)),
        )
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        parse_expression("10 - 4 - 3").unwrap(),
        Expression::binary(
            Expression::binary(int(10), BinaryOperator::Subtract, int(4)),
            BinaryOperator::Subtract,
            int(3),
        )
    );
}

#[test]
fn test_comparison_is_loosest() {
    assert_eq!(
        parse_expression("a * 2 != b + 1").unwrap(),
        Expression::binary(
            Expression::binary(ident("a"), BinaryOperator::Multiply, int(2)),
            BinaryOperator::NotEqual,
            Expression::binary(ident("b"), BinaryOperator::Add, int(1)),
        )
    );
}

#[test]
fn test_unary_applies_to_unit() {
    assert_eq!(
        parse_expression("-x * 2").unwrap(),
        Expression::binary(
            Expression::unary(UnaryOperator::Minus, ident("x")),
            BinaryOperator::Multiply,
            int(2),
        )
    );
}

#[test]
fn test_unary_on_parenthesized_comparison() {
    assert_eq!(
        parse_expression("!(a < b)").unwrap(),
        Expression::unary(
            UnaryOperator::Not,
            Expression::binary(ident("a"), BinaryOperator::LessThan, ident("b")),
        )
    );
}

#[test]
fn test_nested_access() {
    assert_eq!(
        parse_expression(r#"config["log level"].values[3]"#).unwrap(),
        Expression::access(
            "config".to_string(),
            vec![
                AccessPathElement::property("log level"),
                AccessPathElement::property("values"),
                AccessPathElement::array(3),
            ],
        )
    );
}

#[test]
fn test_literals() {
    assert_eq!(
        parse_expression(r#""hi""#).unwrap(),
        Expression::Literal(Literal::String(StringLiteral::new("hi")))
    );
    assert_eq!(
        parse_expression("false").unwrap(),
        Expression::Literal(Literal::Boolean(BooleanLiteral::new(false)))
    );
    assert_eq!(
        parse_expression("0.5").unwrap(),
        Expression::Literal(Literal::Float(FloatLiteral::new(0.5)))
    );
}

#[test]
fn test_split_equals_still_compares() {
    assert_eq!(
        parse_expression("a = = b").unwrap(),
        Expression::binary(ident("a"), BinaryOperator::Equal, ident("b"))
    );
}

#[rstest]
#[case("1+2*3", "1 + 2 * 3")]
#[case("(1+2)*3", "(1 + 2) * 3")]
#[case("1-(2-3)", "1 - (2 - 3)")]
#[case("(1-2)-3", "1 - 2 - 3")]
#[case("a<=b", "a <= b")]
#[case("a>=b==c", "a >= b == c")]
#[case("a%b/c", "a % b / c")]
#[case("-(-x)", "-(-x)")]
#[case("+x", "+x")]
#[case("((x))", "x")]
#[case("list[0].name", "list[0].name")]
#[case("0x10 + 0o10", "16 + 8")]
fn test_expression_layout(#[case] source: &str, #[case] printed: &str) {
    let expression = parse_expression(source).unwrap();

    assert_eq!(expression.to_source(), printed);
    assert_eq!(parse_expression(printed).unwrap(), expression);
}

#[rstest]
#[case("", 0)]
#[case("1 *", 3)]
#[case("(1 + 2", 6)]
#[case("a.", 2)]
#[case("a[b]", 2)]
#[case("1 2", 2)]
fn test_invalid_expressions(#[case] source: &str, #[case] position: usize) {
    let error = parse_expression(source).unwrap_err();

    assert_eq!(error.position, position, "{}", error);
}

#[test]
fn test_missing_operand_expectations() {
    let error = parse_expression("1 *").unwrap_err();

    assert!(error.expects("identifier"));
    assert!(error.expects("integer literal"));
    assert!(error.expects("'('"));
    assert_eq!(error.found, None);
}
