//! Dynamic form record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::AccessError;

/// A candidate data record under validation.
///
/// Records hold field values as a `HashMap<String, Value>`, allowing dynamic
/// access to any field. Nested records are addressed with dot-separated
/// paths; a missing path resolves to nothing rather than an error. Typed
/// getter methods provide safe access with proper error handling.
///
/// # Example
///
/// ```
/// use formwork::model::Record;
///
/// let mut record = Record::new()
///     .set("firstName", "Robin")
///     .set("acceptTerms", true);
/// record.put("extra.username", "robin42");
///
/// assert_eq!(record.get_string("firstName").unwrap(), Some("Robin"));
/// assert_eq!(record.get_string("extra.username").unwrap(), Some("robin42"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to a top-level field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given top-level field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a top-level field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a top-level field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a top-level field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Path access
    //
    // Paths walk nested records segment by segment. Resolution never fails:
    // a missing segment, or a non-record where a record is needed, yields
    // None. Writes create intermediate records as needed.
    // =========================================================================

    /// Resolves a dot-separated path to a value, if present.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        match path.split_once('.') {
            None => self.fields.get(path),
            Some((head, rest)) => match self.fields.get(head) {
                Some(Value::Record(child)) => child.resolve(rest),
                _ => None,
            },
        }
    }

    /// Writes a value at a dot-separated path.
    ///
    /// Intermediate records are created as needed; an intermediate that is
    /// not a record is replaced by one (last write wins).
    pub fn put(&mut self, path: &str, value: impl Into<Value>) {
        self.put_value(path, value.into());
    }

    fn put_value(&mut self, path: &str, value: Value) {
        match path.split_once('.') {
            None => {
                self.fields.insert(path.to_string(), value);
            }
            Some((head, rest)) => {
                let slot = self
                    .fields
                    .entry(head.to_string())
                    .or_insert_with(|| Value::Record(Box::default()));
                if let Value::Record(child) = slot {
                    child.put_value(rest, value);
                } else {
                    let mut child = Record::new();
                    child.put_value(rest, value);
                    *slot = Value::Record(Box::new(child));
                }
            }
        }
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if the path is missing or holds a different type.
    // Return Ok(None) only if the slot exists and is Value::Null.
    // =========================================================================

    /// Gets a string value at the given path.
    pub fn get_string(&self, path: &str) -> Result<Option<&str>, AccessError> {
        match self.resolve(path) {
            None => Err(AccessError::missing(path)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(AccessError::type_mismatch(path, "string", other.type_name())),
        }
    }

    /// Gets a boolean value at the given path.
    pub fn get_bool(&self, path: &str) -> Result<Option<bool>, AccessError> {
        match self.resolve(path) {
            None => Err(AccessError::missing(path)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(AccessError::type_mismatch(path, "bool", other.type_name())),
        }
    }

    /// Gets a nested record at the given path.
    pub fn get_record(&self, path: &str) -> Result<Option<&Record>, AccessError> {
        match self.resolve(path) {
            None => Err(AccessError::missing(path)),
            Some(Value::Null) => Ok(None),
            Some(Value::Record(r)) => Ok(Some(r.as_ref())),
            Some(other) => Err(AccessError::type_mismatch(path, "record", other.type_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_simple_fields() {
        let record = Record::new()
            .set("firstName", "Robin")
            .set("acceptTerms", true);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"firstName\":\"Robin\""));
        assert!(json.contains("\"acceptTerms\":true"));
    }

    #[test]
    fn test_serialize_nested_record() {
        let mut record = Record::new();
        record.put("extra.username", "robin42");

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"extra\":{\"username\":\"robin42\"}"));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let json = r#"{"email":"a@b.com","extra":{"username":"robin42"},"acceptTerms":false}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get_string("email").unwrap(), Some("a@b.com"));
        assert_eq!(record.get_string("extra.username").unwrap(), Some("robin42"));
        assert_eq!(record.get_bool("acceptTerms").unwrap(), Some(false));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(json).unwrap());
    }

    #[test]
    fn test_deserialize_null_slot() {
        let json = r#"{"email":null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.get_string("email").unwrap(), None);
    }
}
