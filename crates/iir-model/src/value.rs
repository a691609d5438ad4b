//! Scalar cell values as they appear in the dataset document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single non-null value of a record field.
///
/// Spreadsheet exports mix text and numbers freely (a CAS number is text, a
/// potency amount is usually a float), so the variant is decided per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// Scalar JSON values map to a variant; null, arrays and objects do not.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(flag) => Some(FieldValue::Flag(flag)),
            serde_json::Value::Number(number) => number
                .as_i64()
                .map(FieldValue::Integer)
                .or_else(|| number.as_f64().map(FieldValue::Float)),
            serde_json::Value::String(text) => Some(FieldValue::Text(text)),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => None,
        }
    }

    /// True for empty text. Numbers and flags are never blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Float(value) => format_float(*value, f),
            FieldValue::Flag(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

/// Whole floats print without a fractional part (`10.0` renders as `10`).
fn format_float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{value}")
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_scalars() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[7, 0.25, 10.0, true, "50-78-2"]"#).expect("parse values");
        assert_eq!(values[0], FieldValue::Integer(7));
        assert_eq!(values[1], FieldValue::Float(0.25));
        assert_eq!(values[2], FieldValue::Float(10.0));
        assert_eq!(values[3], FieldValue::Flag(true));
        assert_eq!(values[4], FieldValue::Text("50-78-2".to_string()));
    }

    #[test]
    fn whole_floats_render_without_fraction() {
        assert_eq!(FieldValue::Float(10.0).to_string(), "10");
        assert_eq!(FieldValue::Float(0.5).to_string(), "0.5");
        assert_eq!(FieldValue::Integer(-3).to_string(), "-3");
    }

    #[test]
    fn containers_are_not_values() {
        assert_eq!(
            FieldValue::from_json(serde_json::json!(12)),
            Some(FieldValue::Integer(12))
        );
        assert_eq!(
            FieldValue::from_json(serde_json::json!(1.5)),
            Some(FieldValue::Float(1.5))
        );
        assert_eq!(FieldValue::from_json(serde_json::json!(["7732-18-5"])), None);
        assert_eq!(FieldValue::from_json(serde_json::json!({"cn": "水"})), None);
        assert_eq!(FieldValue::from_json(serde_json::Value::Null), None);
    }

    #[test]
    fn only_empty_text_is_blank() {
        assert!(FieldValue::from("").is_blank());
        assert!(!FieldValue::from(" ").is_blank());
        assert!(!FieldValue::Integer(0).is_blank());
    }
}
