//! # JSON interop
//!
//! The `json` module converts between [ConstValue] and [serde_json::Value],
//! so enum internal representations and hook inputs can be taken from JSON
//! documents, and merge diagnostics can be serialized for external sinks.

use serde_json::{Number, Value as JSValue};

use crate::error::{Error, Result};
use crate::value::ConstValue;

/// Convert a [serde_json::Value] to a [ConstValue].
///
/// Only leaf values convert; arrays and objects have no constant leaf
/// representation and are rejected.
pub fn value_from_json(value: &JSValue) -> Result<ConstValue> {
    match value {
        JSValue::Null => Ok(ConstValue::Null),
        JSValue::Bool(value) => Ok(ConstValue::Boolean(*value)),
        JSValue::Number(num) => match num.as_i64() {
            Some(int) => Ok(ConstValue::Int(int)),
            None => Ok(ConstValue::Float(num.as_f64().unwrap_or(0.0))),
        },
        JSValue::String(value) => Ok(ConstValue::String(value.clone())),
        JSValue::Array(_) | JSValue::Object(_) => Err(Error::new(
            "Composite JSON values cannot be represented as constant leaf values",
            None,
        )),
    }
}

/// Convert a [ConstValue] to a [serde_json::Value].
///
/// Non-finite floats have no JSON representation and become `null`.
pub fn value_to_json(value: &ConstValue) -> JSValue {
    match value {
        ConstValue::Null => JSValue::Null,
        ConstValue::Boolean(value) => JSValue::Bool(*value),
        ConstValue::Int(value) => JSValue::Number((*value).into()),
        ConstValue::Float(value) => Number::from_f64(*value)
            .map(JSValue::Number)
            .unwrap_or(JSValue::Null),
        ConstValue::String(value) => JSValue::String(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::MergeWarning;
    use serde_json::json;

    #[test]
    fn leaf_values_convert_both_ways() {
        let cases = [
            (json!(null), ConstValue::Null),
            (json!(true), ConstValue::Boolean(true)),
            (json!(0), ConstValue::Int(0)),
            (json!(1.5), ConstValue::Float(1.5)),
            (json!("ACTIVE"), ConstValue::String("ACTIVE".into())),
        ];
        for (js, value) in cases {
            assert_eq!(value_from_json(&js).unwrap(), value);
            assert_eq!(value_to_json(&value), js);
        }
    }

    #[test]
    fn composites_are_rejected() {
        assert!(value_from_json(&json!([1, 2])).is_err());
        assert!(value_from_json(&json!({ "a": 1 })).is_err());
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(value_to_json(&ConstValue::Float(f64::NAN)), json!(null));
    }

    #[test]
    fn warnings_serialize() {
        let warning = MergeWarning::UnknownField {
            type_name: "Query".into(),
            field_name: "nonexistentField".into(),
        };
        assert_eq!(
            serde_json::to_value(&warning).unwrap(),
            json!({
                "kind": "unknownField",
                "typeName": "Query",
                "fieldName": "nonexistentField"
            })
        );
    }
}
