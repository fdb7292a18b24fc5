//! Field descriptor, value and error types.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::DbId;

/// The accepted shape of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string, optionally bounded in characters.
    Text { max_chars: Option<u64> },
    /// A number or numeric string, optionally bounded below.
    Decimal { min: Option<Decimal> },
    /// An integer id pointing at another row. Existence is checked by the caller.
    Reference,
}

/// One row of a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldRule {
    /// Human-readable field name used in messages (`category_id` -> `category id`).
    pub fn label(&self) -> String {
        self.field.replace('_', " ")
    }
}

/// A value that passed its field's rule, converted to its typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Decimal(Decimal),
    Reference(DbId),
}

/// Accepted values keyed by field name. Absent optional fields have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<&'static str, FieldValue>);

impl FieldValues {
    pub(crate) fn insert(&mut self, field: &'static str, value: FieldValue) {
        self.0.insert(field, value);
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        match self.0.get(field) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn decimal(&self, field: &str) -> Option<Decimal> {
        match self.0.get(field) {
            Some(FieldValue::Decimal(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn reference(&self, field: &str) -> Option<DbId> {
        match self.0.get(field) {
            Some(FieldValue::Reference(id)) => Some(*id),
            _ => None,
        }
    }

    /// Remove and return a text value. Entries of another kind are left in place.
    pub fn take_text(&mut self, field: &str) -> Option<String> {
        if !matches!(self.0.get(field), Some(FieldValue::Text(_))) {
            return None;
        }
        match self.0.remove(field) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }
}

/// Field-level validation messages, keyed by field name.
///
/// Serializes as a plain `{ "field": ["message", ...] }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of individual messages across all fields.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(|m| m.first()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Summarizes as the first message plus a count of the rest, e.g.
/// `The name field is required. (and 2 more errors)`.
impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut messages = self.0.values().flatten();
        let Some(first) = messages.next() else {
            return f.write_str("no errors");
        };
        f.write_str(first)?;
        match messages.count() {
            0 => Ok(()),
            1 => f.write_str(" (and 1 more error)"),
            n => write!(f, " (and {n} more errors)"),
        }
    }
}

/// Outcome of running a rule table: whatever was accepted, plus every violation.
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub values: FieldValues,
    pub errors: FieldErrors,
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<FieldValues, FieldErrors> {
        if self.errors.is_empty() {
            Ok(self.values)
        } else {
            Err(self.errors)
        }
    }
}
