mod enum_derive;
mod object_derive;

use syn::DeriveInput;
use syn::parse_macro_input;

/// Derives the type-info traits that let a struct auto-populate a GraphQL
/// object type's fields.
///
/// Generates `GraphQLTypeInfo` (the type name is the struct's identifier)
/// and `GraphQLObjectInfo` (one `FieldInfo` per named field, in declaration
/// order, with the field name converted from `snake_case` to `camelCase`
/// and the annotation inferred from the field's Rust type — `Option<T>`
/// marks it nullable, `Vec<T>` wraps it in a list).
///
/// Example usage:
///
/// ```rust
/// use graphql_dsl::macros::GraphQLObject;
/// use graphql_dsl::schema_dsl;
///
/// #[derive(GraphQLObject)]
/// struct User {
///     id: i32,
///     display_name: Option<String>,
/// }
///
/// let schema = schema_dsl(|s| {
///     s.object_type::<User>(|_| Ok(()))
/// }).unwrap();
///
/// assert!(schema.schema_string().contains("displayName: String"));
/// ```
///
/// The generated impls reference the `graphql_dsl` facade crate, which must
/// be a direct dependency wherever the derive is used.
#[proc_macro_derive(GraphQLObject)]
pub fn derive_graphql_object(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object_derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives the type-info traits that let a Rust enum auto-populate a
/// GraphQL enum type's values.
///
/// Generates `GraphQLTypeInfo` (the type name is the enum's identifier)
/// and `GraphQLEnumInfo` (the variant names in declaration order, spelled
/// exactly as declared — raw identifiers like `r#enum` keep their literal
/// spelling). Only unit variants are supported.
#[proc_macro_derive(GraphQLEnum)]
pub fn derive_graphql_enum(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    enum_derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Strips the raw-identifier prefix so `r#enum` contributes the name
/// `enum`.
pub(crate) fn trim_raw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}
