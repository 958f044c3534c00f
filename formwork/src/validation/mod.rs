//! Declarative record validation.
//!
//! This module provides a static rule table ([`Schema`]) built through a
//! fluent API, evaluated against a [`Record`](crate::model::Record)
//! snapshot. Per field, rules run in declared order and stop at the first
//! failure; cross-field rules read the record being validated, so edits
//! made in any order before submit are always reflected.
//!
//! # Example
//!
//! ```
//! use formwork::model::Record;
//! use formwork::validation::Schema;
//!
//! let schema = Schema::builder()
//!     .field("password")
//!         .required("Password is required")
//!         .min_length(6, "Password must be at least 6 characters")
//!     .field("confirmPassword")
//!         .required("Confirm Password is required")
//!         .equals_field("password", "Passwords must match")
//!     .build();
//!
//! let record = Record::new()
//!     .set("password", "secret")
//!     .set("confirmPassword", "secrets");
//!
//! let result = schema.validate(&record);
//! assert_eq!(result.message_for("confirmPassword"), Some("Passwords must match"));
//! ```

mod result;
mod rule;
mod schema;

pub use result::{FieldError, ValidationResult};
pub use rule::{Constraint, Rule};
pub use schema::{FieldRulesBuilder, Schema, SchemaBuilder};
