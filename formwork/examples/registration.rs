//! Registration form walkthrough: fill, validate on blur, submit, and feed
//! a simulated remote uniqueness check back through the manual overlay.

use std::fs::File;

use formwork::form::Form;
use formwork::model::Record;
use formwork::validation::Schema;
use simplelog::{Config, LevelFilter, WriteLogger};

const DATE_PATTERN: &str = r"^\d{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])$";

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("registration.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let schema = Schema::builder()
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
        .build();

    let defaults = Record::new().set("title", "Mr");
    let mut form = Form::with_defaults(schema, defaults.clone());

    // The presentation layer composes the on-blur policy: write the value,
    // mark the field touched, re-validate.
    for (path, value) in [
        ("firstName", "Robin"),
        ("lastName", "Lee"),
        ("extra.username", "robin42"),
        ("dob", "1990-04-17"),
        ("email", "robin@example.com"),
        ("password", "secret"),
        ("confirmPassword", "secret"),
    ] {
        form.set_value(path, value);
        form.touch(path);
        form.validate_all();
    }
    form.set_value("acceptTerms", true);

    let submitted = form.submit(
        |record| println!("locally valid: {:?}", record),
        |errors| println!("rejected: {:?}", errors),
    );

    if submitted {
        // The remote uniqueness check runs after local validation and
        // reports back through the manual overlay. This stand-in always
        // rejects both candidates.
        for (path, message) in check_uniqueness() {
            form.set_error(path, message);
        }
    }

    println!("--- error snapshot ---");
    for (path, message) in form.errors() {
        println!("{path}: {message}");
    }

    form.reset(defaults);
    println!("after reset: {} error(s)", form.errors().len());

    Ok(())
}

/// Stand-in for the remote service; a real caller would await its answer
/// and then apply it synchronously.
fn check_uniqueness() -> Vec<(&'static str, &'static str)> {
    vec![
        ("extra.username", "username already exists."),
        ("email", "email already exists."),
    ]
}
