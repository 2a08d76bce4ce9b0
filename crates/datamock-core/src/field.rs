use std::fmt;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Calendar date pattern accepted in field bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Kind of a schema field.
///
/// `decimal`, `float` and `double` are synonyms of the numeric-real kind.
/// Unrecognized type names parse into `Other` so they can be handled
/// permissively in rest position; loop position rejects them at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Integer,
    Decimal,
    String,
    Datetime,
    Other(String),
}

impl FieldKind {
    pub fn parse(raw: &str) -> FieldKind {
        match raw {
            "date" => FieldKind::Date,
            "integer" => FieldKind::Integer,
            "decimal" | "float" | "double" => FieldKind::Decimal,
            "string" => FieldKind::String,
            "datetime" => FieldKind::Datetime,
            other => FieldKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Date => "date",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::String => "string",
            FieldKind::Datetime => "datetime",
            FieldKind::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FieldKind::parse(&raw))
    }
}

/// A literal scalar appearing in a field spec (`min`, `max`, `step`,
/// `fixedValue`): either a JSON number or a string.
///
/// String forms are coerced where the target kind allows it (numeric strings
/// for numeric bounds, `YYYY-MM-DD` strings for date bounds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    Text(String),
}

impl Literal {
    /// Integral interpretation; rejects non-integer reals.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Literal::Number(value) => {
                if value.fract() == 0.0 && *value >= i64::MIN as f64 && *value <= i64::MAX as f64 {
                    Some(*value as i64)
                } else {
                    None
                }
            }
            Literal::Text(raw) => raw.trim().parse::<i64>().ok(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Number(value) => Some(*value),
            Literal::Text(raw) => raw.trim().parse::<f64>().ok(),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Literal::Number(_) => None,
            Literal::Text(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT).ok(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Text(raw) => Some(raw.as_str()),
            Literal::Number(_) => None,
        }
    }
}

/// Declarative definition of a single field.
///
/// Attribute names follow the schema document contract (camelCase). Unknown
/// attributes are ignored. Validation happens once at load time through
/// [`crate::Schema::from_value`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Field kind driving validation and value generation.
    #[serde(rename = "type")]
    #[schemars(with = "String")]
    pub kind: FieldKind,
    /// Present and >0 marks the field as a loop dimension; the value orders
    /// loop fields among themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Literal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Literal>,
    /// Increment between stepped numeric values; defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<Literal>,
    /// Draw a single uniform value from `[min, max]` instead of stepping.
    #[serde(default)]
    pub random: bool,
    /// Rounding precision for decimal values; defaults to 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    /// Literal that bypasses range validation and yields a constant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_value: Option<Literal>,
    /// Allowed string values, in output order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enumerated_values: Option<Vec<String>>,
    #[serde(default)]
    pub nullable: bool,
}

impl FieldSpec {
    /// Whether the field participates in the Cartesian expansion.
    pub fn is_loop(&self) -> bool {
        self.loop_order.map(|order| order > 0).unwrap_or(false)
    }
}
