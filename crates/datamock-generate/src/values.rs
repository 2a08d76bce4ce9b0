use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use datamock_core::{DATE_FORMAT, Literal};

/// Layout of generated datetime values.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Scalar value generated for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(value) => Some(*value as f64),
            FieldValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(value) => Some(*value),
            FieldValue::Timestamp(value) => Some(value.date()),
            _ => None,
        }
    }

    /// Lift a spec literal into a generated value. Integral numbers become
    /// integers, other numbers reals, strings text.
    pub fn from_literal(literal: &Literal) -> FieldValue {
        match literal {
            Literal::Number(value) => {
                if value.fract() == 0.0
                    && *value >= i64::MIN as f64
                    && *value <= i64::MAX as f64
                {
                    FieldValue::Int(*value as i64)
                } else {
                    FieldValue::Float(*value)
                }
            }
            Literal::Text(value) => FieldValue::Text(value.clone()),
        }
    }

    /// JSON rendering; dates and timestamps format as strings.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Null => Value::Null,
            FieldValue::Int(value) => Value::from(*value),
            FieldValue::Float(value) => serde_json::Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Text(value) => Value::String(value.clone()),
            FieldValue::Date(value) => Value::String(value.format(DATE_FORMAT).to_string()),
            FieldValue::Timestamp(value) => {
                Value::String(value.format(TIMESTAMP_FORMAT).to_string())
            }
        }
    }
}
