//! Form state controller.

use std::collections::HashMap;
use std::collections::HashSet;

use log::debug;
use log::trace;

use super::state::FieldStatus;
use crate::model::FieldPath;
use crate::model::Record;
use crate::model::Value;
use crate::validation::Schema;
use crate::validation::ValidationResult;

/// Holds a form's record, validation state, and error overlay.
///
/// The controller owns the current [`Record`], the last
/// [`ValidationResult`], and a manual-error overlay fed by out-of-band
/// checks. Writing a value never triggers validation; validation runs when
/// the caller asks for it (typically on blur or submit), so edits do not
/// thrash the validator on every keystroke.
///
/// Schema errors and manual errors are independently addressable per path:
/// a validation pass never removes a manual entry, and clearing a manual
/// entry re-exposes whatever the last pass recorded.
///
/// # Example
///
/// ```
/// use formwork::form::Form;
/// use formwork::validation::Schema;
///
/// let schema = Schema::builder()
///     .field("firstName")
///         .required("First Name is required")
///     .build();
///
/// let mut form = Form::new(schema);
/// assert!(form.validate_all().is_invalid());
///
/// form.set_value("firstName", "Robin");
/// assert!(form.validate_all().is_valid());
/// ```
#[derive(Debug)]
pub struct Form {
    schema: Schema,
    record: Record,
    result: ValidationResult,
    manual_errors: HashMap<FieldPath, String>,
    touched: HashSet<FieldPath>,
    dirty: HashSet<FieldPath>,
    validated: bool,
}

impl Form {
    /// Creates a form with an empty record.
    pub fn new(schema: Schema) -> Self {
        Self::with_defaults(schema, Record::new())
    }

    /// Creates a form with default field values.
    pub fn with_defaults(schema: Schema, defaults: Record) -> Self {
        Self {
            schema,
            record: defaults,
            result: ValidationResult::Valid,
            manual_errors: HashMap::new(),
            touched: HashSet::new(),
            dirty: HashSet::new(),
            validated: false,
        }
    }

    // -------------------------------------------------------------------------
    // Record access
    // -------------------------------------------------------------------------

    /// The current record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Reads the value at a path, if present.
    pub fn value(&self, path: &str) -> Option<&Value> {
        self.record.resolve(path)
    }

    /// Writes the value at a path and marks the field dirty.
    ///
    /// Does not validate and does not change the error snapshot; an invalid
    /// field stays invalid until the next validation pass.
    pub fn set_value(&mut self, path: &str, value: impl Into<Value>) {
        self.record.put(path, value);
        self.dirty.insert(FieldPath::new(path));
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validates the current record, stores the result, and returns it.
    pub fn validate_all(&mut self) -> ValidationResult {
        let result = self.schema.validate(&self.record);
        debug!("Validated record: {} field error(s)", result.errors().len());
        self.result = result.clone();
        self.validated = true;
        result
    }

    /// The result of the last validation pass.
    pub fn last_result(&self) -> &ValidationResult {
        &self.result
    }

    // -------------------------------------------------------------------------
    // Manual error overlay
    // -------------------------------------------------------------------------

    /// Records a manual error for a path, e.g. from a remote check.
    ///
    /// The entry stays visible, and wins over any schema error for the same
    /// path, until [`clear_error`](Self::clear_error),
    /// [`clear_errors`](Self::clear_errors), or [`reset`](Self::reset).
    pub fn set_error(&mut self, path: impl Into<FieldPath>, message: impl Into<String>) {
        let path = path.into();
        let message = message.into();
        debug!("Manual error on '{}': {}", path, message);
        self.manual_errors.insert(path, message);
    }

    /// Clears the manual error for a path.
    pub fn clear_error(&mut self, path: &str) {
        self.manual_errors.remove(path);
    }

    /// Clears all manual errors.
    pub fn clear_errors(&mut self) {
        self.manual_errors.clear();
    }

    // -------------------------------------------------------------------------
    // Error snapshot
    // -------------------------------------------------------------------------

    /// The effective error snapshot: schema errors from the last validation
    /// pass unioned with manual errors. Manual entries win per path.
    pub fn errors(&self) -> HashMap<FieldPath, String> {
        let mut errors: HashMap<FieldPath, String> = self
            .result
            .errors()
            .iter()
            .map(|e| (e.path.clone(), e.message.clone()))
            .collect();
        for (path, message) in &self.manual_errors {
            errors.insert(path.clone(), message.clone());
        }
        errors
    }

    /// The effective error for one path, if any. Manual entries win.
    pub fn error(&self, path: &str) -> Option<&str> {
        self.manual_errors
            .get(path)
            .map(|m| m.as_str())
            .or_else(|| self.result.message_for(path))
    }

    /// Check if a path currently has an error.
    pub fn has_error(&self, path: &str) -> bool {
        self.error(path).is_some()
    }

    // -------------------------------------------------------------------------
    // Touched/dirty tracking
    //
    // The controller stores the flags; when to validate in response is the
    // caller's policy (compose touch + validate_all for on-blur).
    // -------------------------------------------------------------------------

    /// Marks a field as having received and lost focus.
    pub fn touch(&mut self, path: impl Into<FieldPath>) {
        let path = path.into();
        trace!("Touched '{}'", path);
        self.touched.insert(path);
    }

    /// Check if a field has been touched.
    pub fn touched(&self, path: &str) -> bool {
        self.touched.contains(path)
    }

    /// Check if a field's value has changed since initialization or reset.
    pub fn is_dirty(&self, path: &str) -> bool {
        self.dirty.contains(path)
    }

    /// The field's position in its lifecycle.
    pub fn status(&self, path: &str) -> FieldStatus {
        if self.has_error(path) {
            FieldStatus::Invalid
        } else if self.validated && self.touched(path) {
            FieldStatus::Valid
        } else if self.touched(path) {
            FieldStatus::Touched
        } else {
            FieldStatus::Pristine
        }
    }

    // -------------------------------------------------------------------------
    // Submit / reset
    // -------------------------------------------------------------------------

    /// Validates and dispatches: `on_valid` with the record when the pass
    /// succeeds, otherwise `on_invalid` with the error snapshot.
    ///
    /// Returns `true` when the record passed schema validation. Validity is
    /// decided by the schema result alone; manual errors do not block a
    /// submit (they are typically set after one), but they do appear in the
    /// snapshot handed to `on_invalid`. Any asynchronous post-validation
    /// check belongs to the caller and feeds back through
    /// [`set_error`](Self::set_error).
    pub fn submit<V, I>(&mut self, on_valid: V, on_invalid: I) -> bool
    where
        V: FnOnce(&Record),
        I: FnOnce(&HashMap<FieldPath, String>),
    {
        let result = self.validate_all();
        if result.is_valid() {
            debug!("Submit accepted");
            on_valid(&self.record);
            true
        } else {
            let errors = self.errors();
            debug!("Submit rejected: {} error(s)", errors.len());
            on_invalid(&errors);
            false
        }
    }

    /// Replaces the record with `defaults` and discards all error and
    /// touched/dirty state.
    pub fn reset(&mut self, defaults: Record) {
        debug!("Form reset");
        self.record = defaults;
        self.result = ValidationResult::Valid;
        self.manual_errors.clear();
        self.touched.clear();
        self.dirty.clear();
        self.validated = false;
    }
}
