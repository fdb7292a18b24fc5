//! Rule evaluator: pure logic, no database access.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use validator::ValidateLength;

use super::rules::{Evaluation, FieldKind, FieldRule, FieldValue};
use crate::types::DbId;

/// Evaluate every rule against a submitted form.
///
/// Fields are checked independently: a failure on one field never hides a
/// failure on another. String input is trimmed before any check, and blank
/// strings are treated the same as a missing or `null` field.
pub fn evaluate(rules: &[FieldRule], data: &Map<String, Value>) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for rule in rules {
        match present_value(data.get(rule.field)) {
            None if rule.required => {
                evaluation
                    .errors
                    .add(rule.field, format!("The {} field is required.", rule.label()));
            }
            None => {}
            Some(value) => match evaluate_single_rule(rule, value) {
                Ok(accepted) => evaluation.values.insert(rule.field, accepted),
                Err(message) => evaluation.errors.add(rule.field, message),
            },
        }
    }

    evaluation
}

/// Parse a decimal from plain (`12.50`) or scientific (`1.25e1`) notation.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn present_value(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(v) => Some(v),
    }
}

fn evaluate_single_rule(rule: &FieldRule, value: &Value) -> Result<FieldValue, String> {
    match rule.kind {
        FieldKind::Text { max_chars } => evaluate_text(rule, value, max_chars),
        FieldKind::Decimal { min } => evaluate_decimal(rule, value, min),
        FieldKind::Reference => evaluate_reference(rule, value),
    }
}

fn evaluate_text(
    rule: &FieldRule,
    value: &Value,
    max_chars: Option<u64>,
) -> Result<FieldValue, String> {
    let Value::String(raw) = value else {
        return Err(format!("The {} field must be a string.", rule.label()));
    };
    if raw.contains('\0') {
        return Err(format!(
            "The {} field must not contain null characters.",
            rule.label()
        ));
    }
    let text = raw.trim().to_string();

    if let Some(max) = max_chars {
        if !text.validate_length(None, Some(max), None) {
            return Err(format!(
                "The {} field must not be greater than {max} characters.",
                rule.label()
            ));
        }
    }

    Ok(FieldValue::Text(text))
}

fn evaluate_decimal(
    rule: &FieldRule,
    value: &Value,
    min: Option<Decimal>,
) -> Result<FieldValue, String> {
    let parsed = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    };
    let Some(amount) = parsed else {
        return Err(format!("The {} field must be a number.", rule.label()));
    };

    if let Some(min) = min {
        if amount < min {
            return Err(format!("The {} field must be at least {min}.", rule.label()));
        }
    }

    Ok(FieldValue::Decimal(amount))
}

fn evaluate_reference(rule: &FieldRule, value: &Value) -> Result<FieldValue, String> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<DbId>().ok(),
        _ => None,
    };
    match id {
        Some(id) if id > 0 => Ok(FieldValue::Reference(id)),
        _ => Err(format!("The selected {} is invalid.", rule.label())),
    }
}
