use crate::data_fetcher::DataFetcherBinding;
use crate::schema::SchemaBuildError;
use crate::types::FieldBuilder;
use crate::types::TypeAnnotation;
use serde_json::json;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn string_field() -> FieldBuilder {
    FieldBuilder::new("string".to_string(), TypeAnnotation::named("String"))
}

#[test]
fn builds_with_inferred_name_and_type() {
    let field = string_field().build();
    assert_eq!(field.name(), "string");
    assert_eq!(field.type_annotation().to_string(), "String!");
    assert!(field.args().is_empty());
    assert!(field.data_fetcher().is_none());
}

#[test]
fn return_type_override_takes_precedence_over_inferred_type() {
    let mut builder = string_field();
    builder.return_type("[User]");
    let field = builder.build();
    assert_eq!(field.type_annotation().to_string(), "[User]!");

    let mut builder = string_field();
    builder.return_type("Long");
    builder.return_type_nullable(true);
    assert_eq!(builder.build().type_annotation().to_string(), "Long");
}

#[test]
fn arg_names_default_to_decapitalized_type_name() -> Result<()> {
    let mut builder = string_field();
    builder.arg::<String>(|a| {
        a.nullable(true);
    })?;
    builder.arg::<i32>(|a| {
        a.name("count");
        a.description("How many");
    })?;
    let field = builder.build();

    assert_eq!(field.args().len(), 2);
    assert_eq!(field.args()[0].name(), "string");
    assert_eq!(field.args()[0].type_annotation().to_string(), "String");
    assert_eq!(field.args()[1].name(), "count");
    assert_eq!(field.args()[1].type_annotation().to_string(), "Int!");
    assert_eq!(field.args()[1].description(), Some("How many"));
    Ok(())
}

#[test]
fn native_list_argument_is_rejected() {
    let mut builder = string_field();
    let err = builder.arg::<Vec<String>>(|_| {}).unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::NamedTypeRequired {
            context: "argument on 'string'".to_string(),
        },
    );
}

#[test]
fn static_data_fetcher_captures_the_value_at_registration() -> Result<()> {
    let mut builder = string_field();
    builder.static_data_fetcher(|| 42)?;
    let field = builder.build();
    match field.data_fetcher() {
        Some(DataFetcherBinding::Static(value)) => assert_eq!(value, &json!(42)),
        other => panic!("expected a static binding, got {other:?}"),
    }
    Ok(())
}
