//! Integration tests for the data type grammar
//!
//! Structural cases build the expected tree by hand; the tabular cases check
//! the grouping the parser chose by printing the tree back with explicit
//! parentheses only where the printer needs them.

use rstest::rstest;
use ying::ying::ast::{
    ComplexDataType, DataType, IntersectionDataType, ParenthesizedDataType, TypeArgument,
    UnionDataType,
};
use ying::ying::formats::ToSource;
use ying::ying::parser::parse_data_type;

fn named(name: &str) -> ComplexDataType {
    ComplexDataType::named(name)
}

#[test]
fn test_single_raw_type() {
    assert_eq!(parse_data_type("string").unwrap(), named("string"));
}

#[test]
fn test_generic_type() {
    assert_eq!(
        parse_data_type("Array<T>").unwrap(),
        ComplexDataType::Raw(DataType::with_type_arguments(
            "Array",
            vec![TypeArgument::new("T")]
        ))
    );
}

#[test]
fn test_type_arguments_are_parameters_not_types() {
    // A type argument is a name with optional constraints, so a nested
    // generic in argument position does not parse.
    let error = parse_data_type("Array<Map<K>>").unwrap_err();

    assert_eq!(error.position, 9);
}

#[test]
fn test_union_of_three() {
    assert_eq!(
        parse_data_type("int | float | None").unwrap(),
        ComplexDataType::Union(UnionDataType::new(vec![
            named("int"),
            named("float"),
            named("None"),
        ]))
    );
}

#[test]
fn test_intersection_of_two() {
    assert_eq!(
        parse_data_type("Readable & Writable").unwrap(),
        ComplexDataType::Intersection(IntersectionDataType::new(vec![
            named("Readable"),
            named("Writable"),
        ]))
    );
}

#[test]
fn test_parenthesized_single_type_is_kept() {
    assert_eq!(
        parse_data_type("(int)").unwrap(),
        ComplexDataType::Parenthesized(ParenthesizedDataType::new(named("int")))
    );
}

#[rstest]
#[case("A | B & C", "A | B & C")]
#[case("A & B | C", "A & B | C")]
#[case("(A | B) & C", "(A | B) & C")]
#[case("A & (B | C)", "A & (B | C)")]
#[case("((A))", "((A))")]
#[case("Map<K,V>|None", "Map<K, V> | None")]
#[case("Box<T extends Base>", "Box<T extends Base>")]
#[case("Box<T implements A | B>", "Box<T implements A | B>")]
#[case("Box<T,>", "Box<T>")]
fn test_data_type_layout(#[case] source: &str, #[case] printed: &str) {
    assert_eq!(parse_data_type(source).unwrap().to_source(), printed);
}

#[rstest]
#[case("", 0)]
#[case("A |", 3)]
#[case("A & | B", 4)]
#[case("(A", 2)]
#[case("Box<T", 5)]
#[case("A B", 2)]
fn test_invalid_data_types(#[case] source: &str, #[case] position: usize) {
    let error = parse_data_type(source).unwrap_err();

    assert_eq!(error.position, position, "{}", error);
}
