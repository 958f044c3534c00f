//! Tests for the form state controller.

use formwork::form::{FieldStatus, Form};
use formwork::model::Record;
use formwork::validation::Schema;

const DATE_PATTERN: &str = r"^\d{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])$";

fn registration_schema() -> Schema {
    Schema::builder()
        .field("title")
        .required("Title is required")
        .field("firstName")
        .required("First Name is required")
        .field("lastName")
        .required("Last name is required")
        .field("dob")
        .required("Date of Birth is required")
        .pattern(
            DATE_PATTERN,
            "Date of Birth must be a valid date in the format YYYY-MM-DD",
        )
        .field("email")
        .required("Email is required")
        .email("Email is invalid")
        .field("password")
        .required("Password is required")
        .min_length(6, "Password must be at least 6 characters")
        .field("confirmPassword")
        .required("Confirm Password is required")
        .equals_field("password", "Passwords must match")
        .field("acceptTerms")
        .equals_literal(true, "Accept Ts & Cs is required")
        .build()
}

fn filled_record() -> Record {
    Record::new()
        .set("title", "Mr")
        .set("firstName", "Robin")
        .set("lastName", "Lee")
        .set("dob", "2020-02-29")
        .set("email", "a@b.com")
        .set("password", "secret")
        .set("confirmPassword", "secret")
        .set("acceptTerms", true)
}

#[test]
fn test_set_value_does_not_validate() {
    let mut form = Form::new(registration_schema());
    form.set_value("firstName", "");

    assert!(form.errors().is_empty());
    assert!(!form.has_error("firstName"));
    assert!(form.last_result().is_valid());
}

#[test]
fn test_validate_all_stores_result() {
    let mut form = Form::new(registration_schema());
    let result = form.validate_all();

    assert!(result.is_invalid());
    assert!(form.last_result().is_invalid());
    assert_eq!(form.error("firstName"), Some("First Name is required"));
    assert!(form.has_error("firstName"));
}

#[test]
fn test_manual_error_visible_in_snapshot() {
    let mut form = Form::new(registration_schema());
    form.set_error("extra.username", "username already exists.");

    let errors = form.errors();
    assert_eq!(
        errors.get("extra.username").map(String::as_str),
        Some("username already exists.")
    );
}

#[test]
fn test_manual_error_persists_across_revalidation() {
    let mut form = Form::with_defaults(registration_schema(), filled_record());
    form.set_error("extra.username", "username already exists.");

    // The field is schema-valid; a validation pass must not remove the
    // manual entry.
    assert!(form.validate_all().is_valid());
    assert_eq!(form.error("extra.username"), Some("username already exists."));

    form.clear_error("extra.username");
    assert_eq!(form.error("extra.username"), None);
}

#[test]
fn test_manual_error_wins_over_schema_error() {
    let mut form = Form::new(registration_schema());
    form.validate_all();
    assert_eq!(form.error("email"), Some("Email is required"));

    form.set_error("email", "email already exists.");
    assert_eq!(form.error("email"), Some("email already exists."));
    assert_eq!(
        form.errors().get("email").map(String::as_str),
        Some("email already exists.")
    );

    // Clearing the manual entry re-exposes the schema error.
    form.clear_error("email");
    assert_eq!(form.error("email"), Some("Email is required"));
}

#[test]
fn test_clear_errors_leaves_schema_errors() {
    let mut form = Form::new(registration_schema());
    form.validate_all();
    form.set_error("email", "email already exists.");
    form.set_error("extra.username", "username already exists.");

    form.clear_errors();
    assert_eq!(form.error("extra.username"), None);
    assert_eq!(form.error("email"), Some("Email is required"));
}

#[test]
fn test_reset_clears_everything() {
    let defaults = Record::new().set("title", "Mr");
    let mut form = Form::with_defaults(registration_schema(), defaults.clone());

    form.set_value("firstName", "Robin");
    form.touch("firstName");
    form.validate_all();
    form.set_error("extra.username", "username already exists.");
    assert!(!form.errors().is_empty());

    form.reset(defaults);
    assert!(form.errors().is_empty());
    assert_eq!(
        form.value("title").and_then(|v| v.as_text()),
        Some("Mr")
    );
    assert_eq!(form.value("firstName"), None);
    assert!(!form.touched("firstName"));
    assert!(!form.is_dirty("firstName"));
    assert_eq!(form.status("firstName"), FieldStatus::Pristine);
}

#[test]
fn test_submit_invalid_record() {
    // One blank field in an otherwise valid record: exactly one error
    // reaches the rejection callback.
    let record = filled_record().set("firstName", "");
    let mut form = Form::with_defaults(registration_schema(), record);

    let mut rejected = false;
    let submitted = form.submit(
        |_| panic!("record must not pass validation"),
        |errors| {
            rejected = true;
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get("firstName").map(String::as_str),
                Some("First Name is required")
            );
        },
    );

    assert!(!submitted);
    assert!(rejected);
}

#[test]
fn test_submit_valid_record() {
    let mut form = Form::with_defaults(registration_schema(), filled_record());

    let mut accepted = false;
    let submitted = form.submit(
        |record| {
            accepted = true;
            assert_eq!(record.get_string("email").unwrap(), Some("a@b.com"));
        },
        |_| panic!("record must pass validation"),
    );

    assert!(submitted);
    assert!(accepted);
}

#[test]
fn test_status_lifecycle() {
    let mut form = Form::with_defaults(registration_schema(), filled_record());
    form.set_value("firstName", "");

    assert_eq!(form.status("firstName"), FieldStatus::Pristine);

    form.touch("firstName");
    assert_eq!(form.status("firstName"), FieldStatus::Touched);

    form.validate_all();
    assert_eq!(form.status("firstName"), FieldStatus::Invalid);

    // Fixing the value alone is not enough; re-validation is explicit.
    form.set_value("firstName", "Robin");
    assert_eq!(form.status("firstName"), FieldStatus::Invalid);

    form.validate_all();
    assert_eq!(form.status("firstName"), FieldStatus::Valid);
}

#[test]
fn test_dirty_tracking() {
    let mut form = Form::with_defaults(registration_schema(), filled_record());
    assert!(!form.is_dirty("firstName"));

    form.set_value("firstName", "Sam");
    assert!(form.is_dirty("firstName"));
    assert!(!form.is_dirty("lastName"));
}

#[test]
fn test_nested_value_round_trip() {
    let mut form = Form::new(registration_schema());
    form.set_value("extra.username", "robin42");

    assert_eq!(
        form.value("extra.username").and_then(|v| v.as_text()),
        Some("robin42")
    );
    assert_eq!(
        form.record().get_string("extra.username").unwrap(),
        Some("robin42")
    );
}
