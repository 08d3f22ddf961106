//! Type coercion resolver
//!
//! Pulls a top-level field out of the input document and coerces it into the
//! declared [`TargetType`]. Pure: no I/O, no shared state.

use serde_json::Value;

use super::datetime::parse_datetime;
use crate::error::{MappingError, MappingResult, json_kind};
use crate::models::TargetType;

/// Resolve `source` against the root of `input` and coerce it to `declared_type`.
///
/// The field is looked up before the declared type is checked, so a missing
/// field is reported even when the type is unknown.
pub fn resolve(input: &Value, source: &str, declared_type: &str) -> MappingResult<Value> {
    let root = input.as_object().ok_or_else(|| {
        MappingError::Document(format!(
            "root element is {}, expected an object",
            json_kind(input)
        ))
    })?;
    let value = root
        .get(source)
        .ok_or_else(|| MappingError::FieldNotFound(source.to_string()))?;
    let target: TargetType = declared_type.parse()?;

    coerce(source, value, target)
}

/// Coerce a single JSON value into `target`
pub fn coerce(field: &str, value: &Value, target: TargetType) -> MappingResult<Value> {
    match target {
        TargetType::String => match value {
            Value::String(_) | Value::Null => Ok(value.clone()),
            other => Err(mismatch(field, "a string", other)),
        },
        TargetType::Integer => coerce_integer(field, value),
        TargetType::DateTime => match value {
            Value::Null => Ok(Value::Null),
            Value::String(text) => parse_datetime(text)
                .map(|dt| Value::String(dt.to_iso8601()))
                .ok_or_else(|| {
                    MappingError::Coercion(format!(
                        "cannot convert '{}' to date-time (field '{}')",
                        text, field
                    ))
                }),
            other => Err(mismatch(field, "a string", other)),
        },
        TargetType::Boolean => match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            other => Err(mismatch(field, "a boolean", other)),
        },
    }
}

fn coerce_integer(field: &str, value: &Value) -> MappingResult<Value> {
    match value {
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| not_an_integer(field, text)),
        Value::Number(n) => n
            .as_i64()
            .map(Value::from)
            .ok_or_else(|| not_an_integer(field, &n.to_string())),
        Value::Null => Err(not_an_integer(field, "null")),
        other => Err(mismatch(field, "a string", other)),
    }
}

fn not_an_integer(field: &str, text: &str) -> MappingError {
    MappingError::Coercion(format!(
        "cannot convert '{}' to integer because it is not an integer (field '{}')",
        text, field
    ))
}

fn mismatch(field: &str, expected: &'static str, found: &Value) -> MappingError {
    MappingError::TypeMismatch {
        field: field.to_string(),
        expected,
        found: json_kind(found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_passes_through() {
        let doc = json!({"name": "Zoë ✓", "nothing": null});
        assert_eq!(resolve(&doc, "name", "string").unwrap(), json!("Zoë ✓"));
        assert_eq!(resolve(&doc, "nothing", "STRING").unwrap(), Value::Null);
    }

    #[test]
    fn test_string_rejects_other_kinds() {
        let doc = json!({"n": 5, "b": true});
        assert!(matches!(
            resolve(&doc, "n", "string"),
            Err(MappingError::TypeMismatch { .. })
        ));
        assert!(matches!(
            resolve(&doc, "b", "string"),
            Err(MappingError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_integer_from_text() {
        let doc = json!({"a": "42", "b": " -7 ", "c": "42.5", "d": "abc", "e": null});
        assert_eq!(resolve(&doc, "a", "integer").unwrap(), json!(42));
        assert_eq!(resolve(&doc, "b", "integer").unwrap(), json!(-7));
        for field in ["c", "d", "e"] {
            assert!(
                matches!(resolve(&doc, field, "integer"), Err(MappingError::Coercion(_))),
                "{}",
                field
            );
        }
    }

    #[test]
    fn test_integer_from_native_number() {
        let doc = json!({"whole": 30, "frac": 30.5});
        assert_eq!(resolve(&doc, "whole", "Integer").unwrap(), json!(30));
        assert!(matches!(
            resolve(&doc, "frac", "integer"),
            Err(MappingError::Coercion(_))
        ));
    }

    #[test]
    fn test_integer_rejects_boolean() {
        let doc = json!({"flag": true});
        assert!(matches!(
            resolve(&doc, "flag", "integer"),
            Err(MappingError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_datetime() {
        let doc = json!({"birth": "1990-05-02", "none": null, "bad": "soon", "num": 5});
        assert_eq!(
            resolve(&doc, "birth", "datetime").unwrap(),
            json!("1990-05-02T00:00:00")
        );
        assert_eq!(resolve(&doc, "none", "DATETIME").unwrap(), Value::Null);
        assert!(matches!(
            resolve(&doc, "bad", "datetime"),
            Err(MappingError::Coercion(_))
        ));
        assert!(matches!(
            resolve(&doc, "num", "datetime"),
            Err(MappingError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_boolean_requires_native_bool() {
        let doc = json!({"flag": false, "text": "true", "none": null});
        assert_eq!(resolve(&doc, "flag", "boolean").unwrap(), json!(false));
        for field in ["text", "none"] {
            assert!(matches!(
                resolve(&doc, field, "boolean"),
                Err(MappingError::TypeMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_missing_field_checked_before_type() {
        let doc = json!({"a": "1"});
        assert!(matches!(
            resolve(&doc, "missing", "nonsense"),
            Err(MappingError::FieldNotFound(ref f)) if f == "missing"
        ));
        assert!(matches!(
            resolve(&doc, "A", "string"),
            Err(MappingError::FieldNotFound(_))
        ));
    }

    #[test]
    fn test_unknown_type() {
        let doc = json!({"a": "1"});
        let err = resolve(&doc, "a", "decimal").unwrap_err();
        assert!(matches!(err, MappingError::Coercion(ref msg) if msg.contains("decimal")));
    }

    #[test]
    fn test_non_object_root() {
        let doc = json!([1, 2, 3]);
        assert!(matches!(
            resolve(&doc, "a", "string"),
            Err(MappingError::Document(_))
        ));
    }
}
