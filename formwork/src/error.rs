//! Error types

/// Error type for typed field access on a [`Record`](crate::model::Record).
///
/// Only the typed getters return this; validation itself never errors on
/// input shape (a missing path degrades to an empty value there).
#[derive(Debug, Clone, thiserror::Error)]
pub enum AccessError {
    /// The requested path does not resolve in the record.
    #[error("Field '{path}' not found in record")]
    Missing { path: String },

    /// The slot exists but has a different type than requested.
    #[error("Field '{path}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl AccessError {
    /// Creates a new missing field error.
    pub fn missing(path: impl Into<String>) -> Self {
        Self::Missing { path: path.into() }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
            actual,
        }
    }
}
