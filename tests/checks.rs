//! Integration tests for the check guards

use std::cell::Cell;
use std::fmt;

use requisite::prelude::*;
use requisite::{assert_fails_with, assert_passes};

#[derive(Debug, PartialEq)]
struct SomeExceptionType(String);

impl fmt::Display for SomeExceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for SomeExceptionType {}

#[test]
fn check_fails_with_check_failed_when_requirement_is_not_satisfied() {
    let err = 1.check(|v| *v != 1, "message").unwrap_err();
    assert_eq!(err, CheckFailed::new("message"));
}

#[test]
fn check_uses_predicate_text_when_no_message_is_given() {
    let err = check!(1, |v| *v != 1).unwrap_err();
    assert_eq!(err.message(), "expected: |v| *v != 1");
}

#[test]
fn check_passes_when_requirement_is_satisfied() {
    assert!(1.check(|v| *v == 1, "").is_ok());
}

#[test]
fn check_returns_built_error_when_requirement_is_not_satisfied() {
    let err = 1
        .check_or_else(|v| *v != 1, || SomeExceptionType("message".to_string()))
        .unwrap_err();
    assert_eq!(err, SomeExceptionType("message".to_string()));
}

#[test]
fn check_can_build_error_from_the_value() {
    assert_fails_with!(
        1.check_or_else_with(|v| *v != 1, |v| SomeExceptionType(format!("message with {}", v))),
        "message with 1"
    );
}

#[test]
fn check_does_not_build_anything_when_requirement_is_satisfied() {
    let built = Cell::new(0);

    let _ = 1.check(|v| *v == 1, || -> String {
        built.set(built.get() + 1);
        String::new()
    });
    let _ = 1.check_with(|v| *v == 1, |v| {
        built.set(built.get() + 1);
        format!("{}", v)
    });
    let _ = 1.check_or_else(|v| *v == 1, || {
        built.set(built.get() + 1);
        SomeExceptionType(String::new())
    });
    let _ = 1.check_or_else_with(|v| *v == 1, |v| {
        built.set(built.get() + 1);
        SomeExceptionType(format!("{}", v))
    });

    assert_eq!(built.get(), 0);
}

#[test]
fn check_returns_the_value_it_was_called_on() {
    assert_passes!(1.check(|value| *value == 1, ""), 1);
    assert_passes!(1.check(|value| *value == 1, || String::new()), 1);
    assert_passes!(1.check_with(|value| *value == 1, |value| format!("{}", value)), 1);
    assert_passes!(
        1.check_or_else(|value| *value == 1, || CheckFailed::new("")),
        1
    );
    assert_passes!(
        1.check_or_else_with(|value| *value == 1, |value| CheckFailed::new(format!("{}", value))),
        1
    );
}

#[test]
fn check_with_factory_is_not_wrapped_in_check_failed() {
    let result: Result<i32, GuardFailure> =
        1.check_or_else(|v| *v != 1, || PreconditionFailed::new("caller error").into());
    let err = result.unwrap_err();
    assert!(err.is_precondition());
    assert_eq!(err.message(), "caller error");
}

#[test]
fn check_failures_mix_with_preconditions_under_question_mark() {
    fn mean(samples: &[f64]) -> Result<f64, GuardFailure> {
        let samples = samples.require_that(|s| !s.is_empty(), "need at least one sample")?;
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let mean = mean.check(|m| m.is_finite(), "mean must be finite")?;
        Ok(mean)
    }

    assert_eq!(mean(&[1.0, 3.0]), Ok(2.0));
    assert!(mean(&[]).unwrap_err().is_precondition());
    assert!(mean(&[f64::MAX, f64::MAX]).unwrap_err().is_check());
}

#[test]
fn check_factory_panics_propagate_unchanged() {
    let outcome = std::panic::catch_unwind(|| {
        let _: Result<i32, SomeExceptionType> =
            1.check_or_else(|v| *v != 1, || panic!("factory exploded"));
    });
    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"factory exploded"));
}

#[test]
fn check_message_producer_panics_propagate_unchanged() {
    let outcome = std::panic::catch_unwind(|| {
        let _ = 1.check_with(|v| *v != 1, |v| panic!("describe exploded for {}", v));
    });
    let payload = outcome.unwrap_err();
    assert_eq!(
        payload.downcast_ref::<String>().map(String::as_str),
        Some("describe exploded for 1")
    );
}

#[test]
fn check_on_borrowed_subject_returns_same_reference() {
    let items = vec!["a", "b"];
    let checked = (&items).check(|v| v.len() == 2, "two items").unwrap();
    assert!(std::ptr::eq(checked, &items));
}
