//! Resolver ("data fetcher") bindings attached to schema fields.
//!
//! The schema-assembly core only stores and forwards these bindings; they
//! are invoked by the execution engine once the schema is running, possibly
//! concurrently, which is why fetchers must be `Send + Sync`.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// The per-invocation context handed to a [`DataFetcher`]: the field's
/// coerced arguments plus the parent object's value for nested fields.
#[derive(Clone, Debug, Default)]
pub struct DataFetchingEnvironment {
    arguments: IndexMap<String, Value>,
    source: Option<Value>,
}
impl DataFetchingEnvironment {
    pub fn new(arguments: IndexMap<String, Value>, source: Option<Value>) -> Self {
        Self { arguments, source }
    }

    /// The value supplied for the named argument, if any.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    /// The parent object's resolved value (absent for root fields).
    pub fn source(&self) -> Option<&Value> {
        self.source.as_ref()
    }
}

/// A caller-supplied resolver bound to one field. Produces the field's
/// value when a query executes.
pub trait DataFetcher: Send + Sync {
    fn fetch(&self, env: &DataFetchingEnvironment) -> Result<Value, FieldError>;
}

impl<F> DataFetcher for F
where
    F: Fn(&DataFetchingEnvironment) -> Result<Value, FieldError> + Send + Sync,
{
    fn fetch(&self, env: &DataFetchingEnvironment) -> Result<Value, FieldError> {
        self(env)
    }
}

/// How a resolver was registered with the DSL.
#[derive(Clone)]
pub enum DataFetcherBinding {
    /// A value captured once when the binding was registered; reused for
    /// every query.
    Static(Value),
    /// A fetcher the engine invokes per query.
    Dynamic(Arc<dyn DataFetcher>),
}
impl DataFetcherBinding {
    /// Wraps a typed environment-taking closure, serializing its result.
    pub fn from_fn<T, F>(fetch: F) -> Self
    where
        T: Serialize,
        F: Fn(&DataFetchingEnvironment) -> Result<T, FieldError> + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(move |env: &DataFetchingEnvironment| {
            let value = fetch(env)?;
            serde_json::to_value(value).map_err(|err| FieldError::new(err.to_string()))
        }))
    }
}
impl std::fmt::Debug for DataFetcherBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Dynamic(_) => f.debug_tuple("Dynamic").field(&"..").finish(),
        }
    }
}

/// Failure produced by a [`DataFetcher`] while resolving one field. The
/// engine collects these into the execution result's error list.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct FieldError {
    message: String,
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
