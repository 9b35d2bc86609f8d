pub mod coercion;
pub mod data_fetcher;
pub mod engine;
pub mod scalars;
pub mod schema;
pub mod type_info;
pub mod types;

#[cfg(test)]
mod test;

pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::schema_dsl;
pub use type_info::FieldInfo;
pub use type_info::GraphQLEnumInfo;
pub use type_info::GraphQLObjectInfo;
pub use type_info::GraphQLTypeInfo;
