// ABOUTME: Field validation rules for recipe write payloads
// ABOUTME: Pure checks over raw JSON values that collect violations per field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe field validation
//!
//! Each rule maps one raw JSON value to either a typed value or a
//! [`Violation`]. [`validate_fields`] runs every rule and records all failures
//! before deciding, so clients see the full list at once.

use crate::constants::{field_labels, limits, type_hints};
use crate::errors::{ValidationErrors, Violation};
use crate::models::duration::parse_duration;
use crate::models::RecipeFields;
use chrono::TimeDelta;
use serde_json::{Map, Value};

/// Payload field names
pub mod fields {
    /// Recipe name
    pub const NAME: &str = "name";
    /// Optional description
    pub const DESCRIPTION: &str = "description";
    /// Ingredient list
    pub const INGREDIENTS: &str = "ingredients";
    /// Preparation steps
    pub const INSTRUCTIONS: &str = "instructions";
    /// Preparation time
    pub const PREP_TIME: &str = "prep_time";
    /// Cooking time
    pub const COOK_TIME: &str = "cook_time";
    /// Number of servings
    pub const SERVINGS: &str = "servings";
    /// Explicit owner id
    pub const CHEF: &str = "chef";
}

const TEXT_MISMATCH: Violation = Violation::TypeMismatch {
    hint: type_hints::STRING,
};
const INTEGER_MISMATCH: Violation = Violation::TypeMismatch {
    hint: type_hints::INTEGER,
};
const DURATION_MISMATCH: Violation = Violation::TypeMismatch {
    hint: type_hints::DURATION,
};

/// Coerce a JSON scalar to text; numbers are stringified
fn coerce_text(value: &Value) -> Result<String, Violation> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(TEXT_MISMATCH),
    }
}

/// Mandatory text: present, a string or number, non-blank after trimming
///
/// # Errors
///
/// `Required` when absent or null, `TypeMismatch` for non-scalar values,
/// `EmptyField` when blank
pub fn required_text(value: Option<&Value>) -> Result<String, Violation> {
    let raw = match value {
        None | Some(Value::Null) => return Err(Violation::Required),
        Some(v) => coerce_text(v)?,
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Violation::EmptyField);
    }
    Ok(trimmed.to_owned())
}

/// Recipe name: mandatory text of at most 255 characters
///
/// # Errors
///
/// Any [`required_text`] violation, or `LengthExceeded`
pub fn validate_name(value: Option<&Value>) -> Result<String, Violation> {
    let name = required_text(value)?;
    if name.chars().count() > limits::RECIPE_NAME_MAX_CHARS {
        return Err(Violation::LengthExceeded {
            max: limits::RECIPE_NAME_MAX_CHARS,
        });
    }
    Ok(name)
}

/// Description: optional and unconstrained in length
///
/// # Errors
///
/// `TypeMismatch` for booleans, arrays and objects
pub fn validate_description(value: Option<&Value>) -> Result<Option<String>, Violation> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => coerce_text(v).map(|s| Some(s.trim().to_owned())),
    }
}

/// Parse a duration from a string, or a number of seconds
///
/// # Errors
///
/// `Required` when absent or null, `TypeMismatch` when unparsable
pub fn parse_duration_value(value: Option<&Value>) -> Result<TimeDelta, Violation> {
    let raw = match value {
        None | Some(Value::Null) => return Err(Violation::Required),
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err(DURATION_MISMATCH),
    };
    parse_duration(&raw).ok_or(DURATION_MISMATCH)
}

/// Preparation time: at least one minute
///
/// # Errors
///
/// Any [`parse_duration_value`] violation, or `BelowMinimum`
pub fn validate_prep_time(value: Option<&Value>) -> Result<TimeDelta, Violation> {
    let prep_time = parse_duration_value(value)?;
    if prep_time < TimeDelta::minutes(limits::MIN_PREP_TIME_MINUTES) {
        return Err(Violation::BelowMinimum {
            label: field_labels::PREP_TIME,
            minimum: "1 minute",
        });
    }
    Ok(prep_time)
}

/// Cooking time: never negative
///
/// # Errors
///
/// Any [`parse_duration_value`] violation, or `BelowMinimum`
pub fn validate_cook_time(value: Option<&Value>) -> Result<TimeDelta, Violation> {
    let cook_time = parse_duration_value(value)?;
    if cook_time < TimeDelta::minutes(limits::MIN_COOK_TIME_MINUTES) {
        return Err(Violation::BelowMinimum {
            label: field_labels::COOK_TIME,
            minimum: "0 minutes",
        });
    }
    Ok(cook_time)
}

/// Convert a JSON value to an integer the way form input is accepted:
/// integers, integral floats and numeric strings (a trailing `.0` is allowed)
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            let digits = match trimmed.split_once('.') {
                Some((whole, zeros)) if zeros.chars().all(|c| c == '0') => whole,
                Some(_) => return None,
                None => trimmed,
            };
            digits.parse::<i64>().ok()
        }
        _ => None,
    }
}

/// Servings: defaults to one when absent, otherwise an integer of at least one
///
/// # Errors
///
/// `Required` for null, `TypeMismatch` when not integer-convertible,
/// `BelowMinimum` under one
pub fn validate_servings(value: Option<&Value>) -> Result<i32, Violation> {
    let servings = match value {
        None => return Ok(limits::DEFAULT_SERVINGS),
        Some(Value::Null) => return Err(Violation::Required),
        Some(v) => coerce_integer(v).ok_or(INTEGER_MISMATCH)?,
    };
    if servings < limits::MIN_SERVINGS {
        return Err(Violation::BelowMinimum {
            label: field_labels::SERVINGS,
            minimum: "1",
        });
    }
    i32::try_from(servings).map_err(|_| INTEGER_MISMATCH)
}

/// Explicit chef reference: an optional primary key
///
/// # Errors
///
/// `TypeMismatch` when the value is not an integer id
pub fn validate_chef_reference(value: Option<&Value>) -> Result<Option<i64>, Violation> {
    let mismatch = Violation::TypeMismatch {
        hint: type_hints::CHEF_ID,
    };
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or(mismatch),
        Some(Value::String(s)) => s.trim().parse::<i64>().map(Some).map_err(|_| mismatch),
        Some(_) => Err(mismatch),
    }
}

/// Run every field rule over a payload, recording each failure in `errors`
///
/// Returns the typed field set only when every rule passed.
pub fn validate_fields(
    payload: &Map<String, Value>,
    errors: &mut ValidationErrors,
) -> Option<RecipeFields> {
    let name = errors.check(fields::NAME, validate_name(payload.get(fields::NAME)));
    let description = errors.check(
        fields::DESCRIPTION,
        validate_description(payload.get(fields::DESCRIPTION)),
    );
    let ingredients = errors.check(
        fields::INGREDIENTS,
        required_text(payload.get(fields::INGREDIENTS)),
    );
    let instructions = errors.check(
        fields::INSTRUCTIONS,
        required_text(payload.get(fields::INSTRUCTIONS)),
    );
    let prep_time = errors.check(
        fields::PREP_TIME,
        validate_prep_time(payload.get(fields::PREP_TIME)),
    );
    let cook_time = errors.check(
        fields::COOK_TIME,
        validate_cook_time(payload.get(fields::COOK_TIME)),
    );
    let servings = errors.check(
        fields::SERVINGS,
        validate_servings(payload.get(fields::SERVINGS)),
    );

    Some(RecipeFields {
        name: name?,
        description: description?,
        ingredients: ingredients?,
        instructions: instructions?,
        prep_time: prep_time?,
        cook_time: cook_time?,
        servings: servings?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn below_minimum(violation: &Violation) -> bool {
        matches!(violation, Violation::BelowMinimum { .. })
    }

    #[test]
    fn test_name_length_boundary() {
        let ok = json!("a".repeat(255));
        let too_long = json!("a".repeat(256));
        assert_eq!(validate_name(Some(&ok)).map(|n| n.len()), Ok(255));
        assert_eq!(
            validate_name(Some(&too_long)),
            Err(Violation::LengthExceeded { max: 255 })
        );
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        let accented = json!("é".repeat(255));
        assert!(validate_name(Some(&accented)).is_ok());
    }

    #[test]
    fn test_blank_and_missing_text() {
        assert_eq!(required_text(None), Err(Violation::Required));
        assert_eq!(required_text(Some(&Value::Null)), Err(Violation::Required));
        assert_eq!(required_text(Some(&json!("   "))), Err(Violation::EmptyField));
        assert_eq!(required_text(Some(&json!(true))), Err(TEXT_MISMATCH));
        assert_eq!(required_text(Some(&json!(12))), Ok("12".to_owned()));
        assert_eq!(
            required_text(Some(&json!("  flour "))),
            Ok("flour".to_owned())
        );
    }

    #[test]
    fn test_description_is_unconstrained() {
        assert_eq!(validate_description(None), Ok(None));
        assert_eq!(validate_description(Some(&Value::Null)), Ok(None));
        assert_eq!(validate_description(Some(&json!(""))), Ok(Some(String::new())));
        let long = "x".repeat(10_000);
        assert_eq!(
            validate_description(Some(&json!(long.clone()))),
            Ok(Some(long))
        );
        assert_eq!(validate_description(Some(&json!([1]))), Err(TEXT_MISMATCH));
    }

    #[test]
    fn test_prep_time_minimum() {
        assert_eq!(
            validate_prep_time(Some(&json!("00:01:00"))),
            Ok(TimeDelta::minutes(1))
        );
        let err = validate_prep_time(Some(&json!("00:00:59"))).unwrap_err();
        assert!(below_minimum(&err));
        assert_eq!(
            err.to_string(),
            "Preparation time must be equal to or greater than 1 minute."
        );
    }

    #[test]
    fn test_cook_time_minimum() {
        assert_eq!(
            validate_cook_time(Some(&json!("00:00:00"))),
            Ok(TimeDelta::zero())
        );
        let err = validate_cook_time(Some(&json!("-00:00:01"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cooking time must be equal to or greater than 0 minutes."
        );
    }

    #[test]
    fn test_duration_accepts_seconds_number() {
        assert_eq!(
            parse_duration_value(Some(&json!(2700))),
            Ok(TimeDelta::minutes(45))
        );
        assert_eq!(parse_duration_value(Some(&json!("soon"))), Err(DURATION_MISMATCH));
        assert_eq!(parse_duration_value(Some(&json!({}))), Err(DURATION_MISMATCH));
    }

    #[test]
    fn test_servings_conversion() {
        assert_eq!(validate_servings(None), Ok(1));
        assert_eq!(validate_servings(Some(&json!(1))), Ok(1));
        assert_eq!(validate_servings(Some(&json!("4"))), Ok(4));
        assert_eq!(validate_servings(Some(&json!("4.0"))), Ok(4));
        assert_eq!(validate_servings(Some(&json!(3.0))), Ok(3));
        assert_eq!(validate_servings(Some(&json!(2.5))), Err(INTEGER_MISMATCH));
        assert_eq!(validate_servings(Some(&json!("abc"))), Err(INTEGER_MISMATCH));
        assert_eq!(validate_servings(Some(&json!(true))), Err(INTEGER_MISMATCH));
        assert_eq!(
            validate_servings(Some(&json!(i64::from(i32::MAX) + 1))),
            Err(INTEGER_MISMATCH)
        );
        assert_eq!(
            validate_servings(Some(&json!(0))).map_err(|v| v.to_string()),
            Err("Servings must be equal to or greater than 1.".to_owned())
        );
    }

    #[test]
    fn test_chef_reference() {
        assert_eq!(validate_chef_reference(None), Ok(None));
        assert_eq!(validate_chef_reference(Some(&json!(7))), Ok(Some(7)));
        assert_eq!(validate_chef_reference(Some(&json!("7"))), Ok(Some(7)));
        assert!(validate_chef_reference(Some(&json!("ana"))).is_err());
    }

    #[test]
    fn test_validate_fields_collects_everything() {
        let payload = json!({
            "name": "",
            "ingredients": "bacalhau",
            "prep_time": "00:00:10",
            "cook_time": "-00:05:00",
            "servings": 0
        });
        let mut errors = ValidationErrors::new();
        let fields = validate_fields(payload.as_object().unwrap(), &mut errors);

        assert!(fields.is_none());
        assert_eq!(
            errors.field_names().collect::<Vec<_>>(),
            vec!["cook_time", "instructions", "name", "prep_time", "servings"]
        );
        assert!(errors.has("servings", below_minimum));
        assert!(errors.has("instructions", |v| *v == Violation::Required));
    }

    #[test]
    fn test_validate_fields_success() {
        let payload = json!({
            "name": "Bolinho de bacalhau",
            "ingredients": "bacalhau, batata",
            "instructions": "misture e frite",
            "prep_time": "00:45:00",
            "cook_time": "00:00:00",
            "servings": 20
        });
        let mut errors = ValidationErrors::new();
        let fields = validate_fields(payload.as_object().unwrap(), &mut errors).unwrap();

        assert!(errors.is_empty());
        assert_eq!(fields.name, "Bolinho de bacalhau");
        assert_eq!(fields.description, None);
        assert_eq!(fields.prep_time, TimeDelta::minutes(45));
        assert_eq!(fields.servings, 20);
    }
}
