use crate::model::FieldPath;

/// Information about a single field validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Path of the field that failed.
    pub path: FieldPath,
    /// Message of the first failing rule (rules short-circuit per field).
    pub message: String,
}

/// Result of validating a record against a schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in schema declaration order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any), e.g. for focusing.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the failure message recorded for a path (if any).
    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.path.as_str() == path)
            .map(|e| e.message.as_str())
    }
}
