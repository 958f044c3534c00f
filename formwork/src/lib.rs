//! Client-side form state and declarative record validation.
//!
//! Two cooperating pieces: a [`validation`] schema evaluated against a
//! dynamic [`model::Record`], and a [`form`] controller that owns the
//! record, merges schema failures with manually injected errors, and
//! exposes the effective error snapshot to the presentation layer.

pub mod error;
pub mod form;
pub mod model;
pub mod validation;

pub mod prelude {
    pub use crate::error::AccessError;
    pub use crate::form::{FieldStatus, Form};
    pub use crate::model::{FieldPath, Record, Value};
    pub use crate::validation::{
        Constraint, FieldError, Rule, Schema, SchemaBuilder, ValidationResult,
    };
}
