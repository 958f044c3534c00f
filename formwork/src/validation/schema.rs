//! Schema table and fluent builder.

use regex::Regex;

use super::result::FieldError;
use super::result::ValidationResult;
use super::rule::Constraint;
use super::rule::Rule;
use crate::model::FieldPath;
use crate::model::Record;
use crate::model::Value;

/// Rules attached to one field path.
#[derive(Debug, Clone)]
struct FieldRules {
    path: FieldPath,
    rules: Vec<Rule>,
}

/// A declarative rule table for validating records.
///
/// A schema is built once through [`Schema::builder`] and is immutable
/// afterwards: an ordered table of field paths, each with an ordered list
/// of rules. Validation walks the table in declaration order and keeps
/// only the first failing rule's message per field.
///
/// # Example
///
/// ```
/// use formwork::model::Record;
/// use formwork::validation::Schema;
///
/// let schema = Schema::builder()
///     .field("email")
///         .required("Email is required")
///         .email("Email is invalid")
///     .field("password")
///         .required("Password is required")
///         .min_length(6, "Password must be at least 6 characters")
///     .build();
///
/// let record = Record::new()
///     .set("email", "a@b.com")
///     .set("password", "secret");
/// assert!(schema.validate(&record).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    /// Starts building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Number of fields with rule entries.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no rule entries.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a record against this schema.
    ///
    /// For each field entry, rules run in declared order and stop at the
    /// first failure; fields whose rules all pass produce no entry. A
    /// missing or null slot is an empty value, never an error in itself.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &self.fields {
            let value = record.resolve(field.path.as_str());
            for rule in &field.rules {
                if !rule.constraint().check(value, record) {
                    errors.push(FieldError {
                        path: field.path.clone(),
                        message: rule.message().to_string(),
                    });
                    break;
                }
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

/// Builder for a [`Schema`].
pub struct SchemaBuilder {
    fields: Vec<FieldRules>,
}

impl SchemaBuilder {
    /// Adds a field entry to the table.
    pub fn field(self, path: impl Into<FieldPath>) -> FieldRulesBuilder {
        FieldRulesBuilder {
            builder: self,
            path: path.into(),
            rules: Vec::new(),
        }
    }

    /// Finishes the schema.
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}

/// Builder for the rules of a single field.
pub struct FieldRulesBuilder {
    builder: SchemaBuilder,
    path: FieldPath,
    rules: Vec<Rule>,
}

impl FieldRulesBuilder {
    /// Adds a rule from a raw constraint.
    pub fn rule(mut self, constraint: Constraint, message: impl Into<String>) -> Self {
        self.rules.push(Rule::new(constraint, message));
        self
    }

    /// Require the field to be present and non-blank.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(Constraint::Required, message)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Constraint::MinLength(min), message)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.rule(Constraint::MaxLength(max), message)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, message: impl Into<String>) -> Self {
        let re = Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(Constraint::Pattern(re), message)
    }

    /// Require a valid email address.
    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Constraint::Email, message)
    }

    /// Require the value to equal the current value at another path.
    pub fn equals_field(self, other: impl Into<FieldPath>, message: impl Into<String>) -> Self {
        self.rule(Constraint::EqualsField(other.into()), message)
    }

    /// Require the value to equal a literal.
    pub fn equals_literal(self, value: impl Into<Value>, message: impl Into<String>) -> Self {
        self.rule(Constraint::EqualsLiteral(value.into()), message)
    }

    /// Require the checkbox to be checked.
    pub fn checked(self, message: impl Into<String>) -> Self {
        self.rule(Constraint::Checked, message)
    }

    /// Continue to the next field.
    pub fn field(self, path: impl Into<FieldPath>) -> FieldRulesBuilder {
        self.finalize().field(path)
    }

    /// Finalize this field and finish the schema.
    pub fn build(self) -> Schema {
        self.finalize().build()
    }

    /// Finalize this field and return the schema builder.
    fn finalize(self) -> SchemaBuilder {
        let mut builder = self.builder;
        builder.fields.push(FieldRules {
            path: self.path,
            rules: self.rules,
        });
        builder
    }
}
