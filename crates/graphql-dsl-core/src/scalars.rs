//! Ready-made [`Coercing`] strategies for the common custom scalars.
//!
//! These are stateless constructors; each call returns a fresh strategy
//! that can be attached to a scalar declaration or wired directly into a
//! [`RuntimeWiring`](crate::engine::RuntimeWiring).

use crate::coercion::Coercing;
use crate::coercion::CoercionError;
use crate::coercion::CoercionResult;
use chrono::NaiveDateTime;
use serde_json::Value;
use uuid::Uuid;

/// Coercion for the `UUID` scalar: canonical hyphenated string form on the
/// wire, validated on the way in and out.
pub fn uuid() -> Coercing {
    Coercing::new()
        .serialize(|value| parse_uuid("serialize", value))
        .parse_value(|value| parse_uuid("parseValue", value))
        .parse_literal(|value| parse_uuid("parseLiteral", value))
}

/// Coercion for the `Double` scalar. Accepts numbers and numeric strings.
pub fn double() -> Coercing {
    Coercing::new()
        .serialize(|value| parse_double("serialize", value))
        .parse_value(|value| parse_double("parseValue", value))
        .parse_literal(|value| parse_double("parseLiteral", value))
}

/// Coercion for the `Long` scalar. Accepts integral numbers and integral
/// strings.
pub fn long() -> Coercing {
    Coercing::new()
        .serialize(|value| parse_long("serialize", value))
        .parse_value(|value| parse_long("parseValue", value))
        .parse_literal(|value| parse_long("parseLiteral", value))
}

/// Coercion for the `LocalDateTime` scalar: ISO-8601 date-time strings
/// without a timezone offset.
pub fn local_date_time() -> Coercing {
    Coercing::new()
        .serialize(|value| parse_local_date_time("serialize", value))
        .parse_value(|value| parse_local_date_time("parseValue", value))
        .parse_literal(|value| parse_local_date_time("parseLiteral", value))
}

fn parse_uuid(operation: &str, value: &Value) -> CoercionResult {
    match value {
        Value::String(text) => Uuid::parse_str(text)
            .map(|id| Value::String(id.to_string()))
            .map_err(|_| CoercionError::unexpected(operation, "UUID", value)),
        _ => Err(CoercionError::unexpected(operation, "UUID", value)),
    }
}

fn parse_double(operation: &str, value: &Value) -> CoercionResult {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::String(text) => text
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| CoercionError::unexpected(operation, "Double", value)),
        _ => Err(CoercionError::unexpected(operation, "Double", value)),
    }
}

fn parse_long(operation: &str, value: &Value) -> CoercionResult {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => Ok(value.clone()),
        Value::String(text) => text
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .map_err(|_| CoercionError::unexpected(operation, "Long", value)),
        _ => Err(CoercionError::unexpected(operation, "Long", value)),
    }
}

fn parse_local_date_time(operation: &str, value: &Value) -> CoercionResult {
    match value {
        Value::String(text) => text
            .parse::<NaiveDateTime>()
            .map(|dt| Value::String(dt.to_string()))
            .map_err(|_| CoercionError::unexpected(operation, "LocalDateTime", value)),
        _ => Err(CoercionError::unexpected(operation, "LocalDateTime", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn uuid_parses_and_serializes_canonical_strings() {
        let coercing = uuid();
        let id = Uuid::new_v4().to_string();
        let parsed = coercing.value_parser().unwrap()(&json!(id)).unwrap();
        assert_eq!(parsed, json!(id));
        let serialized = coercing.serializer().unwrap()(&json!(id)).unwrap();
        assert_eq!(serialized, json!(id));
    }

    #[test]
    fn uuid_rejects_absent_input_with_the_null_token() {
        let err = uuid().value_parser().unwrap()(&Value::Null).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parseValue expected type 'UUID' but was NULL",
        );

        let err = uuid().serializer().unwrap()(&Value::Null).unwrap_err();
        assert_eq!(
            err.to_string(),
            "serialize expected type 'UUID' but was NULL",
        );
    }

    #[test]
    fn uuid_names_the_received_kind_on_mismatch() {
        let err = uuid().serializer().unwrap()(&json!(42)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "serialize expected type 'UUID' but was Number",
        );
    }

    #[test]
    fn double_accepts_numbers_and_numeric_strings() {
        let coercing = double();
        assert_eq!(
            coercing.value_parser().unwrap()(&json!(6.1)).unwrap(),
            json!(6.1),
        );
        assert_eq!(
            coercing.value_parser().unwrap()(&json!("6.1")).unwrap(),
            json!(6.1),
        );
        assert!(coercing.value_parser().unwrap()(&json!(true)).is_err());
    }

    #[test]
    fn long_rejects_fractional_numbers() {
        let coercing = long();
        assert_eq!(
            coercing.value_parser().unwrap()(&json!(3)).unwrap(),
            json!(3),
        );
        assert!(coercing.value_parser().unwrap()(&json!(3.5)).is_err());
    }

    #[test]
    fn local_date_time_parses_iso_strings() {
        let coercing = local_date_time();
        let parsed =
            coercing.value_parser().unwrap()(&json!("2020-01-01T10:10:10")).unwrap();
        assert_eq!(parsed, json!("2020-01-01 10:10:10"));
        let err =
            coercing.value_parser().unwrap()(&json!("not a date")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parseValue expected type 'LocalDateTime' but was String",
        );
    }
}
