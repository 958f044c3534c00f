//! Form state management.
//!
//! [`Form`] owns the record being edited and everything derived from it:
//! the last validation result, the manual-error overlay, and per-field
//! touched/dirty flags. Value storage and validation triggering are
//! independent contracts; the presentation layer decides when to run
//! [`Form::validate_all`] (the usual policy is on blur and on submit).

mod controller;
mod state;

pub use controller::Form;
pub use state::FieldStatus;
