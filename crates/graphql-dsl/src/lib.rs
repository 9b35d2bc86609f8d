pub use graphql_dsl_core::*;

/// Derive macros for describing Rust types to the schema DSL at compile
/// time (e.g. `#[derive(GraphQLObject)]` to expose a struct's member list
/// to [`SchemaBuilder::object_type()`](crate::schema::SchemaBuilder::object_type)).
#[cfg(feature = "macros")]
pub mod macros {
    pub use graphql_dsl_macros::*;
}
