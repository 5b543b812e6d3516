//! Data type nodes
//!
//! [`ComplexDataType`] is the recursive type-expression sum type. The grammar
//! only builds [`UnionDataType`] and [`IntersectionDataType`] nodes with two or
//! more members; a single member is returned bare (use [`ComplexDataType::union_of`]
//! and [`ComplexDataType::intersection_of`] to keep that invariant).
//! Parentheses are preserved as [`ParenthesizedDataType`] because they mark
//! explicit grouping.

use serde::Serialize;

/// A named type with optional type arguments, e.g. `Iterator<List>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataType {
    pub name: String,
    pub type_arguments: Vec<TypeArgument>,
}

impl DataType {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_type_arguments(name, Vec::new())
    }

    pub fn with_type_arguments(name: impl Into<String>, type_arguments: Vec<TypeArgument>) -> Self {
        Self {
            name: name.into(),
            type_arguments,
        }
    }
}

/// A formal type parameter: `T`, `T extends Base`, `T implements A & B`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeArgument {
    pub name: String,
    pub class_constraint: Option<DataType>,
    pub interface_constraint: Option<ComplexDataType>,
}

impl TypeArgument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_constraint: None,
            interface_constraint: None,
        }
    }

    pub fn with_class_constraint(mut self, constraint: DataType) -> Self {
        self.class_constraint = Some(constraint);
        self
    }

    pub fn with_interface_constraint(mut self, constraint: impl Into<ComplexDataType>) -> Self {
        self.interface_constraint = Some(constraint.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionDataType {
    pub types: Vec<ComplexDataType>,
}

impl UnionDataType {
    pub fn new(types: Vec<ComplexDataType>) -> Self {
        Self { types }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntersectionDataType {
    pub types: Vec<ComplexDataType>,
}

impl IntersectionDataType {
    pub fn new(types: Vec<ComplexDataType>) -> Self {
        Self { types }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParenthesizedDataType {
    pub inner: Box<ComplexDataType>,
}

impl ParenthesizedDataType {
    pub fn new(inner: impl Into<ComplexDataType>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ComplexDataType {
    Raw(DataType),
    Union(UnionDataType),
    Intersection(IntersectionDataType),
    Parenthesized(ParenthesizedDataType),
}

impl ComplexDataType {
    /// Shorthand for a raw type without type arguments.
    pub fn named(name: impl Into<String>) -> Self {
        ComplexDataType::Raw(DataType::new(name))
    }

    /// `first` alone, or a union of `first` and `rest`.
    pub fn union_of(first: ComplexDataType, rest: Vec<ComplexDataType>) -> Self {
        if rest.is_empty() {
            first
        } else {
            ComplexDataType::Union(UnionDataType::new(prepend(first, rest)))
        }
    }

    /// `first` alone, or an intersection of `first` and `rest`.
    pub fn intersection_of(first: ComplexDataType, rest: Vec<ComplexDataType>) -> Self {
        if rest.is_empty() {
            first
        } else {
            ComplexDataType::Intersection(IntersectionDataType::new(prepend(first, rest)))
        }
    }
}

impl From<DataType> for ComplexDataType {
    fn from(data_type: DataType) -> Self {
        ComplexDataType::Raw(data_type)
    }
}

impl From<UnionDataType> for ComplexDataType {
    fn from(data_type: UnionDataType) -> Self {
        ComplexDataType::Union(data_type)
    }
}

impl From<IntersectionDataType> for ComplexDataType {
    fn from(data_type: IntersectionDataType) -> Self {
        ComplexDataType::Intersection(data_type)
    }
}

impl From<ParenthesizedDataType> for ComplexDataType {
    fn from(data_type: ParenthesizedDataType) -> Self {
        ComplexDataType::Parenthesized(data_type)
    }
}

/// The data type of a variable: declared explicitly or left to inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InferableDataType {
    Infer,
    Declared(ComplexDataType),
}

impl From<Option<ComplexDataType>> for InferableDataType {
    fn from(data_type: Option<ComplexDataType>) -> Self {
        data_type.map_or(InferableDataType::Infer, InferableDataType::Declared)
    }
}

fn prepend(first: ComplexDataType, rest: Vec<ComplexDataType>) -> Vec<ComplexDataType> {
    let mut types = Vec::with_capacity(rest.len() + 1);
    types.push(first);
    types.extend(rest);
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_member_is_not_wrapped() {
        let single = ComplexDataType::union_of(ComplexDataType::named("int"), Vec::new());
        assert_eq!(single, ComplexDataType::named("int"));

        let single = ComplexDataType::intersection_of(ComplexDataType::named("int"), Vec::new());
        assert_eq!(single, ComplexDataType::named("int"));
    }

    #[test]
    fn test_members_keep_their_order() {
        let union = ComplexDataType::union_of(
            ComplexDataType::named("string"),
            vec![ComplexDataType::named("int"), ComplexDataType::named("bool")],
        );

        assert_eq!(
            union,
            ComplexDataType::Union(UnionDataType::new(vec![
                ComplexDataType::named("string"),
                ComplexDataType::named("int"),
                ComplexDataType::named("bool"),
            ]))
        );
    }

    #[test]
    fn test_missing_annotation_means_infer() {
        assert_eq!(InferableDataType::from(None), InferableDataType::Infer);
        assert_eq!(
            InferableDataType::from(Some(ComplexDataType::named("int"))),
            InferableDataType::Declared(ComplexDataType::named("int"))
        );
    }
}
