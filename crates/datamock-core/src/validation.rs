use chrono::NaiveDate;

use crate::error::{Result, SchemaError};
use crate::field::{FieldKind, FieldSpec, Literal};

/// Validate a field used as a loop dimension.
///
/// Loop fields must resolve to a finite ordered sequence, so every kind
/// carries range or membership constraints; `datetime` and unrecognized
/// kinds cannot drive the expansion and are rejected here.
pub fn validate_loop_field(name: &str, spec: &FieldSpec) -> Result<()> {
    match &spec.kind {
        FieldKind::Date => {
            let min = date_bound(name, spec.min.as_ref(), "min")?;
            let max = date_bound(name, spec.max.as_ref(), "max")?;
            if min > max {
                return Err(SchemaError::invalid_field(
                    name,
                    format!("date min {min} is after max {max}"),
                ));
            }
            Ok(())
        }
        FieldKind::Integer => {
            if spec.fixed_value.is_some() {
                return Ok(());
            }
            let min = int_bound(name, spec.min.as_ref(), "min")?;
            let max = int_bound(name, spec.max.as_ref(), "max")?;
            if min > max {
                return Err(SchemaError::invalid_field(
                    name,
                    format!("integer min {min} exceeds max {max}"),
                ));
            }
            validate_int_step(name, spec)
        }
        FieldKind::Decimal => {
            if spec.fixed_value.is_some() {
                return Ok(());
            }
            let min = real_bound(name, spec.min.as_ref(), "min")?;
            let max = real_bound(name, spec.max.as_ref(), "max")?;
            if min > max {
                return Err(SchemaError::invalid_field(
                    name,
                    format!("decimal min {min} exceeds max {max}"),
                ));
            }
            validate_real_step(name, spec)
        }
        FieldKind::String => {
            let has_values = spec
                .enumerated_values
                .as_ref()
                .map(|values| !values.is_empty())
                .unwrap_or(false);
            if has_values || spec.fixed_value.is_some() || spec.nullable {
                Ok(())
            } else {
                Err(SchemaError::invalid_field(
                    name,
                    "string fields require enumeratedValues, fixedValue or nullable",
                ))
            }
        }
        FieldKind::Datetime | FieldKind::Other(_) => Err(SchemaError::invalid_field(
            name,
            format!("type '{}' cannot be a loop field", spec.kind),
        )),
    }
}

/// Validate a field computed independently per record.
///
/// Numeric rest fields keep their range contract even when non-random (the
/// draw is simply skipped). String and unrecognized kinds are permissive:
/// they produce no value, which the engine reports as a diagnostic.
pub fn validate_rest_field(name: &str, spec: &FieldSpec) -> Result<()> {
    match &spec.kind {
        FieldKind::Integer => {
            if spec.fixed_value.is_some() {
                return Ok(());
            }
            let min = int_bound(name, spec.min.as_ref(), "min")?;
            let max = int_bound(name, spec.max.as_ref(), "max")?;
            if min > max {
                return Err(SchemaError::invalid_field(
                    name,
                    format!("integer min {min} exceeds max {max}"),
                ));
            }
            Ok(())
        }
        FieldKind::Decimal => {
            if spec.fixed_value.is_some() {
                return Ok(());
            }
            let min = real_bound(name, spec.min.as_ref(), "min")?;
            let max = real_bound(name, spec.max.as_ref(), "max")?;
            if min > max {
                return Err(SchemaError::invalid_field(
                    name,
                    format!("decimal min {min} exceeds max {max}"),
                ));
            }
            Ok(())
        }
        FieldKind::Date | FieldKind::Datetime | FieldKind::String | FieldKind::Other(_) => Ok(()),
    }
}

fn date_bound(name: &str, literal: Option<&Literal>, attr: &str) -> Result<NaiveDate> {
    literal.and_then(Literal::as_date).ok_or_else(|| {
        SchemaError::invalid_field(name, format!("{attr} must be a YYYY-MM-DD calendar date"))
    })
}

fn int_bound(name: &str, literal: Option<&Literal>, attr: &str) -> Result<i64> {
    literal.and_then(Literal::as_i64).ok_or_else(|| {
        SchemaError::invalid_field(name, format!("{attr} must be an integer"))
    })
}

fn real_bound(name: &str, literal: Option<&Literal>, attr: &str) -> Result<f64> {
    literal.and_then(Literal::as_f64).ok_or_else(|| {
        SchemaError::invalid_field(name, format!("{attr} must be a number"))
    })
}

fn validate_int_step(name: &str, spec: &FieldSpec) -> Result<()> {
    let Some(step) = spec.step.as_ref() else {
        return Ok(());
    };
    let step = step.as_i64().ok_or_else(|| {
        SchemaError::invalid_field(name, "step must be a positive integer")
    })?;
    if step <= 0 {
        return Err(SchemaError::invalid_field(
            name,
            "step must be a positive integer",
        ));
    }
    Ok(())
}

fn validate_real_step(name: &str, spec: &FieldSpec) -> Result<()> {
    let Some(step) = spec.step.as_ref() else {
        return Ok(());
    };
    let step = step.as_f64().ok_or_else(|| {
        SchemaError::invalid_field(name, "step must be a positive number")
    })?;
    if step <= 0.0 {
        return Err(SchemaError::invalid_field(
            name,
            "step must be a positive number",
        ));
    }
    Ok(())
}
