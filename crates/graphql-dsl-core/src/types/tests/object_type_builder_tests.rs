use crate::schema::SchemaBuildError;
use crate::test::models::ListTypes;
use crate::test::models::SimpleTypes;
use crate::type_info::FieldInfo;
use crate::type_info::GraphQLObjectInfo;
use crate::type_info::GraphQLTypeInfo;
use crate::types::ObjectTypeBuilder;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn auto_derived_fields_keep_member_declaration_order() -> Result<()> {
    let object_type = ObjectTypeBuilder::from_object_info::<SimpleTypes>()?.build();

    let names: Vec<&str> = object_type.fields().keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "int", "intNull", "long", "longNull", "float", "floatNull", "double",
            "doubleNull", "string", "stringNull", "uuid", "uuidNull", "user",
        ],
    );

    let int_null = object_type.field("intNull").unwrap();
    assert_eq!(int_null.type_annotation().to_string(), "Int");
    let user = object_type.field("user").unwrap();
    assert_eq!(user.type_annotation().to_string(), "User");
    Ok(())
}

#[test]
fn list_members_are_annotated_as_lists() -> Result<()> {
    let object_type = ObjectTypeBuilder::from_object_info::<ListTypes>()?.build();
    assert_eq!(
        object_type.field("ints").unwrap().type_annotation().to_string(),
        "[Int]!",
    );
    assert_eq!(
        object_type
            .field("intsNull")
            .unwrap()
            .type_annotation()
            .to_string(),
        "[Int]",
    );
    Ok(())
}

struct DeepListTypes;
impl GraphQLTypeInfo for DeepListTypes {
    fn graphql_name() -> String {
        "DeepListTypes".to_string()
    }
}
impl GraphQLObjectInfo for DeepListTypes {
    fn fields() -> Vec<FieldInfo> {
        vec![FieldInfo::new(
            "matrix",
            <Vec<Vec<i32>> as GraphQLTypeInfo>::type_annotation(),
        )]
    }
}

#[test]
fn nested_list_member_is_rejected_at_build_time() {
    let err = ObjectTypeBuilder::from_object_info::<DeepListTypes>().unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::NestedListType {
            context: "DeepListTypes.matrix".to_string(),
        },
    );
}

#[test]
fn add_field_appends_after_auto_derived_members() -> Result<()> {
    let mut builder = ObjectTypeBuilder::from_object_info::<ListTypes>()?;
    builder.add_field::<i32>(|_| Ok(()))?;
    builder.add_field::<String>(|f| {
        f.name("extra");
        Ok(())
    })?;
    let object_type = builder.build();

    assert_eq!(object_type.fields().len(), 2);
    let added: Vec<&str> = object_type
        .added_fields()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(added, vec!["int", "extra"]);
    Ok(())
}

#[test]
fn add_field_with_native_list_type_fails() -> Result<()> {
    let mut builder = ObjectTypeBuilder::from_object_info::<ListTypes>()?;
    let err = builder.add_field::<Vec<i32>>(|_| Ok(())).unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::ListTypeRequiresOverride {
            context: "ListTypes.int".to_string(),
        },
    );
    Ok(())
}

#[test]
fn desc_then_drop_share_the_existence_check() -> Result<()> {
    let mut builder = ObjectTypeBuilder::from_object_info::<ListTypes>()?;
    builder.desc("ints", "Ints description")?;
    builder.drop_field("ints")?;

    assert_eq!(
        builder.desc("ints", "again").unwrap_err(),
        SchemaBuildError::UndefinedField {
            type_name: "ListTypes".to_string(),
            field_name: "ints".to_string(),
        },
    );
    Ok(())
}

#[test]
fn drop_field_also_removes_added_fields() -> Result<()> {
    let mut builder = ObjectTypeBuilder::from_object_info::<ListTypes>()?;
    builder.add_field::<i32>(|f| {
        f.name("extra");
        Ok(())
    })?;
    builder.drop_field("extra")?;
    assert!(builder.build().added_fields().is_empty());
    Ok(())
}

#[test]
fn add_field_fetcher_surfaces_in_type_fetcher_map() -> Result<()> {
    let mut builder = ObjectTypeBuilder::from_object_info::<ListTypes>()?;
    builder.add_field::<String>(|f| {
        f.name("otherName");
        f.dynamic_data_fetcher(|_| Ok("MyOtherName".to_string()));
        Ok(())
    })?;
    let object_type = builder.build();
    assert!(object_type.data_fetchers().contains_key("otherName"));
    Ok(())
}
