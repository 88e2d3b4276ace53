//! Validation error types and the JSON record reader
//!
//! Validation is eager: every offending field is collected before the
//! record is rejected, so clients see all problems in one response.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// Key used for errors that concern the record as a whole.
pub const SCHEMA_KEY: &str = "_schema";

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent
    Missing { field: &'static str },

    /// Required field is present but null
    Null { field: &'static str },

    /// Field has the wrong primitive type
    InvalidType { field: &'static str, expected: FieldKind },

    /// Field is not part of the schema
    UnknownField { field: String },

    /// Record is not a JSON object
    NotAnObject,

    /// Body could not be parsed as JSON
    MalformedBody,

    /// String doesn't match required format (e.g., path id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Referenced entity does not exist
    UnknownReference { field: &'static str },
}

/// Primitive kinds accepted by the schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
}

impl ValidationError {
    /// Field the error is reported under.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::Null { field }
            | Self::InvalidType { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::UnknownReference { field } => *field,
            Self::UnknownField { field } => field.as_str(),
            Self::NotAnObject | Self::MalformedBody => SCHEMA_KEY,
        }
    }

    /// Human-readable reason, without the field name.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "Missing data for required field.",
            Self::Null { .. } => "Field may not be null.",
            Self::InvalidType { expected: FieldKind::String, .. } => "Not a valid string.",
            Self::InvalidType { expected: FieldKind::Integer, .. } => "Not a valid integer.",
            Self::UnknownField { .. } => "Unknown field.",
            Self::NotAnObject => "Invalid input type.",
            Self::MalformedBody => "Invalid JSON body.",
            Self::InvalidFormat { reason, .. } => *reason,
            Self::UnknownReference { .. } => "Referenced record does not exist.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field(), self.message())
    }
}

impl std::error::Error for ValidationError {}

/// All validation failures found in one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Group messages by field name, sorted by field.
    pub fn fields(&self) -> BTreeMap<String, Vec<&'static str>> {
        let mut map: BTreeMap<String, Vec<&'static str>> = BTreeMap::new();
        for err in &self.0 {
            map.entry(err.field().to_owned())
                .or_default()
                .push(err.message());
        }
        map
    }

    /// True if any error is reported under `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(e: ValidationError) -> Self {
        Self(vec![e])
    }
}

/// Reads typed fields out of an untyped JSON record, collecting errors.
///
/// Keys that are neither `known` nor `ignored` are reported as unknown.
/// `ignored` keys are accepted and dropped (server-generated ids).
pub(crate) struct RecordReader<'a> {
    record: Option<&'a Map<String, Value>>,
    errors: ValidationErrors,
}

impl<'a> RecordReader<'a> {
    pub(crate) fn new(value: &'a Value, known: &[&str], ignored: &[&str]) -> Self {
        let mut errors = ValidationErrors::default();
        let record = value.as_object();

        match record {
            Some(map) => {
                for key in map.keys() {
                    let key = key.as_str();
                    if !known.contains(&key) && !ignored.contains(&key) {
                        errors.push(ValidationError::UnknownField {
                            field: key.to_owned(),
                        });
                    }
                }
            }
            None => errors.push(ValidationError::NotAnObject),
        }

        Self { record, errors }
    }

    fn present(&mut self, field: &'static str) -> Option<&'a Value> {
        // A non-object record has already been reported once under _schema.
        let record = self.record?;
        match record.get(field) {
            None => {
                self.errors.push(ValidationError::Missing { field });
                None
            }
            Some(Value::Null) => {
                self.errors.push(ValidationError::Null { field });
                None
            }
            Some(value) => Some(value),
        }
    }

    /// Read a required string field.
    pub(crate) fn string(&mut self, field: &'static str) -> Option<String> {
        let value = self.present(field)?;
        match value.as_str() {
            Some(s) => Some(s.to_owned()),
            None => {
                self.errors.push(ValidationError::InvalidType {
                    field,
                    expected: FieldKind::String,
                });
                None
            }
        }
    }

    /// Read a required integer field.
    ///
    /// Accepts integers, integral floats and decimal strings.
    ///
    /// Fractional numbers such as `3.5` are rejected rather than truncated
    /// to `3`: a reference id with a fractional part is a client error.
    pub(crate) fn integer(&mut self, field: &'static str) -> Option<i64> {
        let value = self.present(field)?;
        match coerce_integer(value) {
            Some(n) => Some(n),
            None => {
                self.errors.push(ValidationError::InvalidType {
                    field,
                    expected: FieldKind::Integer,
                });
                None
            }
        }
    }

    /// Finish reading; `Err` carries every collected failure.
    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
