//! The schema-to-runtime bridge: combines a sealed
//! [`Schema`](crate::schema::Schema) with a [`RuntimeWiring`] to obtain an
//! [`ExecutableSchema`] that can run query documents.

mod executable_schema;
mod execution_result;
mod runtime_wiring;

pub use executable_schema::ExecutableSchema;
pub use executable_schema::SchemaCompilationError;
pub use execution_result::ExecutionError;
pub use execution_result::ExecutionResult;
pub use runtime_wiring::OperationWiring;
pub use runtime_wiring::RuntimeWiring;
pub use runtime_wiring::RuntimeWiringBuilder;

#[cfg(test)]
mod tests;
