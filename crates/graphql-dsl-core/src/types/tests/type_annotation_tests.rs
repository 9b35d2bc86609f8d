use crate::type_info::GraphQLTypeInfo;
use crate::types::TypeAnnotation;

#[test]
fn named_annotation_renders_with_non_null_marker() {
    assert_eq!(TypeAnnotation::named("Int").to_string(), "Int!");
}

#[test]
fn nullable_named_annotation_renders_without_marker() {
    let annotation = TypeAnnotation::named("Int").with_nullable(true);
    assert_eq!(annotation.to_string(), "Int");
}

#[test]
fn list_annotation_renders_element_name_without_element_nullability() {
    let annotation = TypeAnnotation::list_of(TypeAnnotation::named("Int"));
    assert_eq!(annotation.to_string(), "[Int]!");
    assert_eq!(annotation.clone().with_nullable(true).to_string(), "[Int]");
}

#[test]
fn option_and_vec_adjust_inferred_annotations() {
    assert_eq!(<i32 as GraphQLTypeInfo>::type_annotation().to_string(), "Int!");
    assert_eq!(
        <Option<i32> as GraphQLTypeInfo>::type_annotation().to_string(),
        "Int",
    );
    assert_eq!(
        <Vec<i32> as GraphQLTypeInfo>::type_annotation().to_string(),
        "[Int]!",
    );
    assert_eq!(
        <Option<Vec<i32>> as GraphQLTypeInfo>::type_annotation().to_string(),
        "[Int]",
    );
}

#[test]
fn nested_list_is_detected() {
    let nested = <Vec<Vec<i32>> as GraphQLTypeInfo>::type_annotation();
    assert!(nested.is_nested_list());
    assert!(!<Vec<i32> as GraphQLTypeInfo>::type_annotation().is_nested_list());
}

#[test]
fn type_str_override_parses_list_marker() {
    let list = TypeAnnotation::from_type_str("[User]", false);
    assert!(list.is_list());
    assert_eq!(list.graphql_type_name(), "User");
    assert_eq!(list.to_string(), "[User]!");

    let named = TypeAnnotation::from_type_str("Long", true);
    assert!(!named.is_list());
    assert_eq!(named.to_string(), "Long");
}

#[test]
fn innermost_name_unwraps_lists() {
    let annotation = TypeAnnotation::list_of(TypeAnnotation::named("User"));
    assert_eq!(annotation.graphql_type_name(), "User");
    assert!(annotation.as_list_annotation().is_some());
    assert!(annotation.as_named_annotation().is_none());
}
