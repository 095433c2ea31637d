//! Guard macros that default the message to the guarded expression
//!
//! When no expectation is given, the failure message is `"expected: "`
//! followed by the condition or predicate exactly as the compiler renders it
//! with `stringify!`. Token spacing follows Rust's pretty printer, so
//! `|v|  *v!=1` is echoed as `|v| *v != 1`.

/// Require a boolean condition about a value.
///
/// Expands to [`Require::require`](crate::Require::require). Without an
/// expectation the message is `"expected: <condition>"`. The condition is
/// evaluated before the subject is moved, so it may borrow the subject.
///
/// # Example
///
/// ```rust
/// use requisite::require;
///
/// let len = 0;
/// let err = require!(len, len > 0).unwrap_err();
/// assert_eq!(err.message(), "expected: len > 0");
///
/// let err = require!(1, false, "message").unwrap_err();
/// assert_eq!(err.message(), "message");
///
/// assert_eq!(require!(1, true), Ok(1));
/// ```
#[macro_export]
macro_rules! require {
    ($subject:expr, $condition:expr $(,)?) => {
        match $condition {
            condition => $crate::Require::require(
                $subject,
                condition,
                ::core::concat!("expected: ", ::core::stringify!($condition)),
            ),
        }
    };
    ($subject:expr, $condition:expr, $expectation:expr $(,)?) => {
        match $condition {
            condition => $crate::Require::require($subject, condition, $expectation),
        }
    };
}

/// Require that a predicate holds for a value.
///
/// Expands to [`Require::require_that`](crate::Require::require_that).
/// Without an expectation the message is `"expected: <predicate>"`.
///
/// # Example
///
/// ```rust
/// use requisite::require_that;
///
/// let err = require_that!(1, |v| *v != 1).unwrap_err();
/// assert_eq!(err.message(), "expected: |v| *v != 1");
///
/// let name = require_that!("ferris", |n| !n.is_empty(), "name must be set");
/// assert_eq!(name, Ok("ferris"));
/// ```
#[macro_export]
macro_rules! require_that {
    ($subject:expr, $requirement:expr $(,)?) => {
        $crate::Require::require_that(
            $subject,
            $requirement,
            ::core::concat!("expected: ", ::core::stringify!($requirement)),
        )
    };
    ($subject:expr, $requirement:expr, $expectation:expr $(,)?) => {
        $crate::Require::require_that($subject, $requirement, $expectation)
    };
}

/// Check that a predicate holds for a value.
///
/// Expands to [`Check::check`](crate::Check::check). Without an expectation
/// the message is `"expected: <predicate>"`.
///
/// # Example
///
/// ```rust
/// use requisite::check;
///
/// let err = check!(1, |v| *v != 1).unwrap_err();
/// assert_eq!(err.message(), "expected: |v| *v != 1");
///
/// assert_eq!(check!(1, |v| *v == 1, "unused"), Ok(1));
/// ```
#[macro_export]
macro_rules! check {
    ($subject:expr, $requirement:expr $(,)?) => {
        $crate::Check::check(
            $subject,
            $requirement,
            ::core::concat!("expected: ", ::core::stringify!($requirement)),
        )
    };
    ($subject:expr, $requirement:expr, $expectation:expr $(,)?) => {
        $crate::Check::check($subject, $requirement, $expectation)
    };
}

#[cfg(test)]
mod tests {
    use crate::{CheckFailed, PreconditionFailed};
    use std::cell::Cell;

    #[test]
    fn test_require_default_message_echoes_condition() {
        let port = 0u16;
        let result = require!(port, port != 0);
        assert_eq!(result, Err(PreconditionFailed::new("expected: port != 0")));
    }

    #[test]
    fn test_require_default_message_for_literal() {
        let result = require!(1, false);
        assert_eq!(result, Err(PreconditionFailed::new("expected: false")));
    }

    #[test]
    fn test_require_condition_may_borrow_owned_subject() {
        let name = String::from("");
        let result = require!(name, !name.is_empty());
        assert_eq!(
            result,
            Err(PreconditionFailed::new("expected: !name.is_empty()"))
        );

        let name = String::from("ferris");
        let result = require!(name, name.len() > 3, "name too short");
        assert_eq!(result, Ok(String::from("ferris")));
    }

    #[test]
    fn test_require_with_explicit_message() {
        let result = require!(1, false, "message");
        assert_eq!(result, Err(PreconditionFailed::new("message")));
    }

    #[test]
    fn test_require_that_default_message_echoes_predicate() {
        let result = require_that!(1, |v| *v != 1);
        assert_eq!(
            result,
            Err(PreconditionFailed::new("expected: |v| *v != 1"))
        );
    }

    #[test]
    fn test_require_that_with_lazy_message() {
        let result = require_that!(1, |v| *v != 1, || "lazy".to_string());
        assert_eq!(result, Err(PreconditionFailed::new("lazy")));
    }

    #[test]
    fn test_check_default_message_echoes_predicate() {
        let result = check!(1, |v| *v != 1);
        assert_eq!(result, Err(CheckFailed::new("expected: |v| *v != 1")));
    }

    #[test]
    fn test_check_default_message_for_method_chain() {
        let result = check!(vec![3, 1], |v| v.is_empty());
        assert_eq!(result, Err(CheckFailed::new("expected: |v| v.is_empty()")));
    }

    #[test]
    fn test_subject_evaluated_once() {
        let calls = Cell::new(0);
        let next = || {
            calls.set(calls.get() + 1);
            calls.get()
        };
        let result = check!(next(), |v| *v == 1);
        assert_eq!(result, Ok(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_trailing_comma_accepted() {
        assert_eq!(require!(1, true,), Ok(1));
        assert_eq!(check!(1, |v| *v == 1, "unused",), Ok(1));
    }
}
