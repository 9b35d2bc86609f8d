//! Scalar coercion strategies.
//!
//! A [`Coercing`] bundles up to three pure functions that convert between a
//! scalar's wire representation and its native value. The schema-assembly
//! core never invokes them; they are forwarded to the execution engine,
//! which applies `serialize` to outgoing leaf values and the two parse
//! functions to incoming arguments.

use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub type CoercionResult = Result<Value, CoercionError>;

type CoercionFn = Arc<dyn Fn(&Value) -> CoercionResult + Send + Sync>;

/// A scalar's serialize / parse-value / parse-literal triple. All three
/// functions are optional; a scalar with no strategy renders fine and is
/// handled by the engine's default behavior for its name.
#[derive(Clone, Default)]
pub struct Coercing {
    parse_literal: Option<CoercionFn>,
    parse_value: Option<CoercionFn>,
    serialize: Option<CoercionFn>,
}
impl Coercing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the function converting a resolved native value to its wire
    /// representation.
    pub fn serialize<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> CoercionResult + Send + Sync + 'static,
    {
        self.serialize = Some(Arc::new(f));
        self
    }

    /// Sets the function converting an incoming variable value to the
    /// native representation.
    pub fn parse_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> CoercionResult + Send + Sync + 'static,
    {
        self.parse_value = Some(Arc::new(f));
        self
    }

    /// Sets the function converting a literal query-document token to the
    /// native representation.
    pub fn parse_literal<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> CoercionResult + Send + Sync + 'static,
    {
        self.parse_literal = Some(Arc::new(f));
        self
    }

    pub fn serializer(&self) -> Option<&(dyn Fn(&Value) -> CoercionResult + Send + Sync)> {
        self.serialize.as_deref()
    }

    pub fn value_parser(&self) -> Option<&(dyn Fn(&Value) -> CoercionResult + Send + Sync)> {
        self.parse_value.as_deref()
    }

    pub fn literal_parser(&self) -> Option<&(dyn Fn(&Value) -> CoercionResult + Send + Sync)> {
        self.parse_literal.as_deref()
    }
}
impl std::fmt::Debug for Coercing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coercing")
            .field("parse_literal", &self.parse_literal.is_some())
            .field("parse_value", &self.parse_value.is_some())
            .field("serialize", &self.serialize.is_some())
            .finish()
    }
}

/// Raised by a coercion function when the input is not of the expected
/// kind. The `actual` component is the literal token `NULL` when the input
/// was absent.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{operation} expected type '{expected}' but was {actual}")]
pub struct CoercionError {
    actual: String,
    expected: String,
    operation: String,
}
impl CoercionError {
    pub fn new(
        operation: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            actual: actual.into(),
            expected: expected.into(),
            operation: operation.into(),
        }
    }

    /// Builds the error from the offending value itself, naming its JSON
    /// kind (or `NULL`).
    pub fn unexpected(operation: &str, expected: &str, actual: &Value) -> Self {
        Self::new(operation, expected, json_kind(actual))
    }
}

/// The wire-level kind name of a JSON value, as spelled in coercion error
/// messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "Array",
        Value::Bool(_) => "Boolean",
        Value::Null => "NULL",
        Value::Number(_) => "Number",
        Value::Object(_) => "Object",
        Value::String(_) => "String",
    }
}
