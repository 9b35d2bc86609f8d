//! Compile-time descriptions of Rust types as GraphQL types.
//!
//! This is the schema DSL's replacement for runtime reflection: every Rust
//! type that can appear in a schema implements [`GraphQLTypeInfo`], either
//! via the built-in impls below (the canonical scalar table), by hand, or
//! through the `GraphQLObject`/`GraphQLEnum` derive macros.

use crate::types::TypeAnnotation;

/// Maps a Rust type to its GraphQL type name and [`TypeAnnotation`].
///
/// Implementations for `Option<T>` and `Vec<T>` adjust the annotation
/// (nullability and list wrapping respectively) while delegating the base
/// name to `T`.
pub trait GraphQLTypeInfo {
    /// The GraphQL spelling of this type's name, e.g. `"Int"` or `"User"`.
    fn graphql_name() -> String;

    /// The full annotation for an occurrence of this type. Defaults to a
    /// non-null named type.
    fn type_annotation() -> TypeAnnotation {
        TypeAnnotation::named(Self::graphql_name())
    }
}

/// A Rust type whose member list can be introspected to auto-populate a
/// GraphQL object type's fields.
pub trait GraphQLObjectInfo: GraphQLTypeInfo {
    /// Member fields in declaration order.
    fn fields() -> Vec<FieldInfo>;
}

/// A Rust enum whose variant list can be introspected to auto-populate a
/// GraphQL enum type's values.
pub trait GraphQLEnumInfo: GraphQLTypeInfo {
    /// Variant names in declaration order, spelled exactly as declared.
    fn values() -> Vec<String>;
}

/// One introspected member of a [`GraphQLObjectInfo`] type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldInfo {
    name: String,
    type_annotation: TypeAnnotation,
}
impl FieldInfo {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            type_annotation,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// Lower-cases the first character of a type name. This is the implicit
/// naming convention for fields, arguments, queries, and mutations whose
/// name was not given explicitly (`"LocalDateTime"` -> `"localDateTime"`).
pub fn decapitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a `snake_case` Rust identifier to the `camelCase` spelling used
/// for GraphQL field names (`"int_null"` -> `"intNull"`).
pub fn camel_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut upper_next = false;
    for ch in ident.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

macro_rules! well_known_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl GraphQLTypeInfo for $ty {
            fn graphql_name() -> String {
                $name.to_string()
            }
        }
    )*};
}

// The canonical scalar name table.
well_known_scalar! {
    i16 => "Int",
    i32 => "Int",
    i64 => "Long",
    f32 => "Float",
    f64 => "Double",
    bool => "Boolean",
    String => "String",
    () => "Unit",
    uuid::Uuid => "UUID",
    chrono::NaiveDateTime => "LocalDateTime",
}

impl GraphQLTypeInfo for &str {
    fn graphql_name() -> String {
        "String".to_string()
    }
}

impl<T: GraphQLTypeInfo> GraphQLTypeInfo for Option<T> {
    fn graphql_name() -> String {
        T::graphql_name()
    }

    fn type_annotation() -> TypeAnnotation {
        T::type_annotation().with_nullable(true)
    }
}

impl<T: GraphQLTypeInfo> GraphQLTypeInfo for Vec<T> {
    fn graphql_name() -> String {
        T::graphql_name()
    }

    fn type_annotation() -> TypeAnnotation {
        TypeAnnotation::list_of(T::type_annotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_table_maps_the_well_known_types() {
        assert_eq!(i32::graphql_name(), "Int");
        assert_eq!(i64::graphql_name(), "Long");
        assert_eq!(f32::graphql_name(), "Float");
        assert_eq!(f64::graphql_name(), "Double");
        assert_eq!(bool::graphql_name(), "Boolean");
        assert_eq!(String::graphql_name(), "String");
        assert_eq!(<()>::graphql_name(), "Unit");
        assert_eq!(uuid::Uuid::graphql_name(), "UUID");
        assert_eq!(chrono::NaiveDateTime::graphql_name(), "LocalDateTime");
    }

    #[test]
    fn containers_delegate_their_base_name() {
        assert_eq!(<Option<i32>>::graphql_name(), "Int");
        assert_eq!(<Vec<String>>::graphql_name(), "String");
    }

    #[test]
    fn decapitalized_lowers_only_the_first_character() {
        assert_eq!(decapitalized("LocalDateTime"), "localDateTime");
        assert_eq!(decapitalized("String"), "string");
        assert_eq!(decapitalized(""), "");
    }

    #[test]
    fn camel_case_converts_snake_case_identifiers() {
        assert_eq!(camel_case("int_null"), "intNull");
        assert_eq!(camel_case("delete_field"), "deleteField");
        assert_eq!(camel_case("simple"), "simple");
        assert_eq!(camel_case("a_b_c"), "aBC");
    }
}
