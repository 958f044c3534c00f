//! Declarative field rules.

use regex::Regex;

use crate::model::FieldPath;
use crate::model::Record;
use crate::model::Value;

/// A single predicate paired with its failure message.
#[derive(Debug, Clone)]
pub struct Rule {
    constraint: Constraint,
    message: String,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            constraint,
            message: message.into(),
        }
    }

    /// The predicate this rule applies.
    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// The message reported when the predicate fails.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The predicate kinds a [`Rule`] can apply to a field.
///
/// Constraints are evaluated against the full current record, not a value
/// bound at schema construction, so cross-field checks always see the
/// latest edits.
///
/// A slot that is absent or `Null` fails only `Required`; every other
/// constraint passes vacuously on absence. Text-shape constraints apply to
/// string values only.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Value must be present and, for strings, non-blank.
    Required,
    /// String value must have at least this many characters.
    MinLength(usize),
    /// String value must have at most this many characters.
    MaxLength(usize),
    /// String value must match the pattern. The check is shape-only: a
    /// string the pattern accepts passes even if it is semantically
    /// nonsense (a date pattern does not know February).
    Pattern(Regex),
    /// String value must be a well-formed email address. An empty string
    /// passes; pair with `Required` for non-empty.
    Email,
    /// Value must strictly equal the current value at another path.
    EqualsField(FieldPath),
    /// Value must strictly equal the given literal.
    EqualsLiteral(Value),
    /// Boolean value must be true.
    Checked,
}

impl Constraint {
    /// Evaluates the predicate for `value` within `record`.
    ///
    /// Returns `true` when the constraint is satisfied.
    pub(crate) fn check(&self, value: Option<&Value>, record: &Record) -> bool {
        let present = !matches!(value, None | Some(Value::Null));
        match self {
            Constraint::Required => match value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) => !s.trim().is_empty(),
                Some(_) => true,
            },
            // Absent slots only ever fail the required constraint.
            _ if !present => true,
            Constraint::MinLength(min) => match value {
                Some(Value::String(s)) => s.chars().count() >= *min,
                _ => true,
            },
            Constraint::MaxLength(max) => match value {
                Some(Value::String(s)) => s.chars().count() <= *max,
                _ => true,
            },
            Constraint::Pattern(re) => match value {
                Some(Value::String(s)) => re.is_match(s),
                _ => true,
            },
            Constraint::Email => match value {
                Some(Value::String(s)) => {
                    s.is_empty() || email_address::EmailAddress::is_valid(s)
                }
                _ => true,
            },
            Constraint::EqualsField(other) => match record.resolve(other.as_str()) {
                Some(target) if !target.is_null() => value == Some(target),
                _ => false,
            },
            Constraint::EqualsLiteral(expected) => value == Some(expected),
            Constraint::Checked => matches!(value, Some(Value::Bool(true))),
        }
    }
}
