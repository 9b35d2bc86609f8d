use crate::coercion::CoercionError;
use serde_json::Value;
use thiserror::Error;

/// The outcome of executing one query document: a data payload mirroring
/// the query shape plus an ordered list of errors (empty on success).
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionResult {
    data: Value,
    errors: Vec<ExecutionError>,
}
impl ExecutionResult {
    pub(crate) fn new(data: Value, errors: Vec<ExecutionError>) -> Self {
        Self { data, errors }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn errors(&self) -> &[ExecutionError] {
        &self.errors
    }
}

/// A per-query failure collected into [`ExecutionResult::errors`].
/// Execution never panics and never aborts the whole document; the
/// offending field resolves to null instead.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutionError {
    #[error("value coercion failed for '{context}': {source}")]
    CoercionFailure {
        context: String,
        #[source]
        source: CoercionError,
    },

    #[error("data fetcher for '{field_name}' failed: {message}")]
    FetchFailure {
        field_name: String,
        message: String,
    },

    #[error("no data fetcher bound for root field '{field_name}'")]
    MissingDataFetcher {
        field_name: String,
    },

    #[error("error parsing query document: {message}")]
    QueryParseError {
        message: String,
    },

    #[error("cannot apply a selection set to a non-object value of type '{type_name}'")]
    SelectionOnLeaf {
        type_name: String,
    },

    #[error("operation '{operation_name}' not found in query document")]
    UnknownOperation {
        operation_name: String,
    },

    #[error("{feature} are not supported by the reference engine")]
    Unsupported {
        feature: String,
    },
}
