//! Value enum for dynamic field values

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value held by one field of a [`Record`](super::Record).
///
/// Candidate form data is loosely shaped: text inputs produce strings,
/// checkboxes produce booleans, and grouped inputs produce nested records.
/// `Null` marks a slot that exists but holds nothing; a slot that is absent
/// altogether simply has no entry.
///
/// # Example
///
/// ```
/// use formwork::model::Value;
///
/// let name = Value::from("Lee");
/// let accepted = Value::from(true);
/// let empty = Value::Null;
/// assert!(empty.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// String value.
    String(String),
    /// Nested record.
    Record(Box<super::Record>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Record(_) => "record",
        }
    }

    /// Returns the string content, if this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<super::Record> for Value {
    fn from(record: super::Record) -> Self {
        Value::Record(Box::new(record))
    }
}
