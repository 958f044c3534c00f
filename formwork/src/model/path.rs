//! Dot-separated field paths

use std::borrow::Borrow;

use serde::Deserialize;
use serde::Serialize;

/// A dot-separated path addressing one value slot in a
/// [`Record`](super::Record).
///
/// Top-level fields are addressed by name (`"email"`); fields inside a
/// nested record carry their parent segments (`"extra.username"`). Within
/// one record a path addresses exactly one logical slot.
///
/// `FieldPath` implements `Borrow<str>`, so maps keyed by it can be queried
/// with a plain `&str`.
///
/// # Example
///
/// ```
/// use formwork::model::FieldPath;
///
/// let path = FieldPath::new("extra.username");
/// assert_eq!(path.segments().count(), 2);
/// assert_eq!(path.split_first(), ("extra", Some("username")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Creates a new field path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Splits into the leading segment and the remainder, if nested.
    pub fn split_first(&self) -> (&str, Option<&str>) {
        match self.0.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (self.0.as_str(), None),
        }
    }

    /// Returns `true` if the path addresses a slot inside a nested record.
    pub fn is_nested(&self) -> bool {
        self.0.contains('.')
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl Borrow<str> for FieldPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
