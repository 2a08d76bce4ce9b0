use chrono::NaiveDateTime;
use rand::{Rng, RngCore};

use datamock_core::{Field, FieldKind, FieldSpec, Literal, Result, SchemaError};

use crate::values::FieldValue;

const DEFAULT_DECIMALS: u32 = 2;
const DEFAULT_INT_STEP: i64 = 1;
const DEFAULT_REAL_STEP: f64 = 1.0;

/// Resolve a loop field to its finite ordered value sequence.
///
/// A `random` numeric loop field yields a one-element sequence, degrading
/// its dimension to a constant (inherited behavior). `datetime` and
/// unrecognized kinds cannot drive the expansion.
pub fn resolve_loop_sequence(field: &Field, rng: &mut dyn RngCore) -> Result<Vec<FieldValue>> {
    match &field.spec.kind {
        FieldKind::Date => date_sequence(field),
        FieldKind::Integer => integer_sequence(field, rng),
        FieldKind::Decimal => decimal_sequence(field, rng),
        FieldKind::String => string_sequence(field),
        FieldKind::Datetime | FieldKind::Other(_) => Err(invalid(
            field,
            format!("type '{}' cannot be a loop field", field.spec.kind),
        )),
    }
}

/// Compute a rest field's value for one record.
///
/// `Ok(None)` means the field produces no value and its key is omitted:
/// string and unrecognized kinds, and numeric fields that are neither
/// `random` nor fixed.
pub fn compute_rest_value(
    field: &Field,
    now: NaiveDateTime,
    rng: &mut dyn RngCore,
) -> Result<Option<FieldValue>> {
    let spec = &field.spec;
    match &spec.kind {
        FieldKind::Date => Ok(Some(FieldValue::Date(now.date()))),
        FieldKind::Datetime => Ok(Some(FieldValue::Timestamp(now))),
        FieldKind::Integer => {
            if let Some(fixed) = &spec.fixed_value {
                return Ok(Some(FieldValue::from_literal(fixed)));
            }
            let (min, max) = int_bounds(field)?;
            if spec.random {
                Ok(Some(FieldValue::Int(rng.random_range(min..=max))))
            } else {
                Ok(None)
            }
        }
        FieldKind::Decimal => {
            if let Some(fixed) = &spec.fixed_value {
                return Ok(Some(FieldValue::from_literal(fixed)));
            }
            let (min, max) = real_bounds(field)?;
            if spec.random {
                let decimals = spec.decimals.unwrap_or(DEFAULT_DECIMALS);
                Ok(Some(FieldValue::Float(round_to(
                    rng.random_range(min..=max),
                    decimals,
                ))))
            } else {
                Ok(None)
            }
        }
        FieldKind::String | FieldKind::Other(_) => Ok(None),
    }
}

/// Whether a rest field can ever produce a value; drives the engine's
/// omission diagnostics.
pub fn rest_field_produces_value(spec: &FieldSpec) -> bool {
    match &spec.kind {
        FieldKind::Date | FieldKind::Datetime => true,
        FieldKind::Integer | FieldKind::Decimal => spec.random || spec.fixed_value.is_some(),
        FieldKind::String | FieldKind::Other(_) => false,
    }
}

fn date_sequence(field: &Field) -> Result<Vec<FieldValue>> {
    let min = field
        .spec
        .min
        .as_ref()
        .and_then(Literal::as_date)
        .ok_or_else(|| invalid(field, "min must be a YYYY-MM-DD calendar date"))?;
    let max = field
        .spec
        .max
        .as_ref()
        .and_then(Literal::as_date)
        .ok_or_else(|| invalid(field, "max must be a YYYY-MM-DD calendar date"))?;
    if min > max {
        return Err(invalid(field, format!("date min {min} is after max {max}")));
    }

    let mut values = Vec::new();
    let mut day = min;
    while day <= max {
        values.push(FieldValue::Date(day));
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(values)
}

fn integer_sequence(field: &Field, rng: &mut dyn RngCore) -> Result<Vec<FieldValue>> {
    let spec = &field.spec;
    if let Some(fixed) = &spec.fixed_value {
        return Ok(vec![FieldValue::from_literal(fixed)]);
    }
    let (min, max) = int_bounds(field)?;
    if spec.random {
        return Ok(vec![FieldValue::Int(rng.random_range(min..=max))]);
    }

    let step = match &spec.step {
        Some(step) => step
            .as_i64()
            .filter(|value| *value > 0)
            .ok_or_else(|| invalid(field, "step must be a positive integer"))?,
        None => DEFAULT_INT_STEP,
    };
    let mut values = Vec::new();
    let mut value = min;
    while value <= max {
        values.push(FieldValue::Int(value));
        value = match value.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(values)
}

fn decimal_sequence(field: &Field, rng: &mut dyn RngCore) -> Result<Vec<FieldValue>> {
    let spec = &field.spec;
    if let Some(fixed) = &spec.fixed_value {
        return Ok(vec![FieldValue::from_literal(fixed)]);
    }
    let (min, max) = real_bounds(field)?;
    let decimals = spec.decimals.unwrap_or(DEFAULT_DECIMALS);
    if spec.random {
        return Ok(vec![FieldValue::Float(round_to(
            rng.random_range(min..=max),
            decimals,
        ))]);
    }

    let step = match &spec.step {
        Some(step) => step
            .as_f64()
            .filter(|value| *value > 0.0)
            .ok_or_else(|| invalid(field, "step must be a positive number"))?,
        None => DEFAULT_REAL_STEP,
    };
    // Values derive from the index to keep long sequences free of
    // accumulated float error.
    let mut values = Vec::new();
    let mut index: u64 = 0;
    loop {
        let value = min + index as f64 * step;
        if value > max {
            break;
        }
        values.push(FieldValue::Float(round_to(value, decimals)));
        index += 1;
    }
    Ok(values)
}

fn string_sequence(field: &Field) -> Result<Vec<FieldValue>> {
    let spec = &field.spec;
    if let Some(fixed) = &spec.fixed_value {
        return Ok(vec![FieldValue::from_literal(fixed)]);
    }
    if let Some(options) = &spec.enumerated_values {
        if !options.is_empty() {
            return Ok(options
                .iter()
                .map(|option| FieldValue::Text(option.clone()))
                .collect());
        }
    }
    if spec.nullable {
        return Ok(vec![FieldValue::Null]);
    }
    Err(invalid(
        field,
        "string fields require enumeratedValues, fixedValue or nullable",
    ))
}

fn int_bounds(field: &Field) -> Result<(i64, i64)> {
    let min = field
        .spec
        .min
        .as_ref()
        .and_then(Literal::as_i64)
        .ok_or_else(|| invalid(field, "min must be an integer"))?;
    let max = field
        .spec
        .max
        .as_ref()
        .and_then(Literal::as_i64)
        .ok_or_else(|| invalid(field, "max must be an integer"))?;
    if min > max {
        return Err(invalid(
            field,
            format!("integer min {min} exceeds max {max}"),
        ));
    }
    Ok((min, max))
}

fn real_bounds(field: &Field) -> Result<(f64, f64)> {
    let min = field
        .spec
        .min
        .as_ref()
        .and_then(Literal::as_f64)
        .ok_or_else(|| invalid(field, "min must be a number"))?;
    let max = field
        .spec
        .max
        .as_ref()
        .and_then(Literal::as_f64)
        .ok_or_else(|| invalid(field, "max must be a number"))?;
    if min > max {
        return Err(invalid(
            field,
            format!("decimal min {min} exceeds max {max}"),
        ));
    }
    Ok((min, max))
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn invalid(field: &Field, reason: impl Into<String>) -> SchemaError {
    SchemaError::invalid_field(field.name.as_str(), reason)
}
