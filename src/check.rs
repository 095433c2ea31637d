//! Checks: invariants and post-conditions that hand the value back
//!
//! [`Check`] mirrors [`Require`](crate::Require) but always re-examines the
//! subject through a predicate, and fails with a [`CheckFailed`] instead of a
//! [`PreconditionFailed`](crate::PreconditionFailed).
//!
//! The failure slot takes either a message (literal, `FnOnce() -> String`,
//! or `FnOnce(&T) -> String`) or a factory building a failure of any type.
//! Factory failures are returned as-is, never wrapped in [`CheckFailed`].
//!
//! | Method | Failure |
//! |---|---|
//! | [`check`](Check::check) | `CheckFailed` from a literal or `FnOnce() -> String` |
//! | [`check_with`](Check::check_with) | `CheckFailed` from `FnOnce(&T) -> String` |
//! | [`check_or_else`](Check::check_or_else) | `E` from `FnOnce() -> E` |
//! | [`check_or_else_with`](Check::check_or_else_with) | `E` from `FnOnce(&T) -> E` |
//!
//! # Example
//!
//! ```rust
//! use requisite::{Check, CheckFailed};
//!
//! fn normalize(weights: Vec<f64>) -> Result<Vec<f64>, CheckFailed> {
//!     let total: f64 = weights.iter().sum();
//!     weights
//!         .into_iter()
//!         .map(|w| w / total)
//!         .collect::<Vec<_>>()
//!         .check_with(
//!             |ws| (ws.iter().sum::<f64>() - 1.0).abs() < 1e-9,
//!             |ws| format!("weights {:?} do not sum to one", ws),
//!         )
//! }
//!
//! assert!(normalize(vec![1.0, 3.0]).is_ok());
//! ```

use crate::expectation::Expectation;
use crate::failure::CheckFailed;
use crate::trace::{self, Family};

/// Invariant and post-condition guards attached to every sized value.
pub trait Check: Sized {
    /// Check that `requirement` holds for the subject.
    ///
    /// `requirement` is called exactly once. `expectation` is materialized
    /// only if it returns false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::{Check, CheckFailed};
    ///
    /// assert_eq!(1.check(|v| *v == 1, "unused"), Ok(1));
    /// assert_eq!(
    ///     1.check(|v| *v != 1, "message"),
    ///     Err(CheckFailed::new("message"))
    /// );
    /// ```
    fn check<R, X>(self, requirement: R, expectation: X) -> Result<Self, CheckFailed>
    where
        R: FnOnce(&Self) -> bool,
        X: Expectation,
    {
        if requirement(&self) {
            Ok(self)
        } else {
            Err(check_failed(expectation.materialize()))
        }
    }

    /// Check that `requirement` holds, describing a failure from the subject.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::Check;
    ///
    /// let err = 1.check_with(|v| *v != 1, |v| format!("message with {}", v)).unwrap_err();
    /// assert_eq!(err.message(), "message with 1");
    /// ```
    fn check_with<R, D>(self, requirement: R, describe: D) -> Result<Self, CheckFailed>
    where
        R: FnOnce(&Self) -> bool,
        D: FnOnce(&Self) -> String,
    {
        if requirement(&self) {
            Ok(self)
        } else {
            let message = describe(&self);
            Err(check_failed(message))
        }
    }

    /// Check that `requirement` holds, failing with a caller-built error.
    ///
    /// `factory` is called only if the requirement fails, and its result is
    /// returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::Check;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Boom(&'static str);
    ///
    /// assert_eq!(1.check_or_else(|v| *v != 1, || Boom("boom")), Err(Boom("boom")));
    /// ```
    fn check_or_else<R, F, E>(self, requirement: R, factory: F) -> Result<Self, E>
    where
        R: FnOnce(&Self) -> bool,
        F: FnOnce() -> E,
    {
        if requirement(&self) {
            Ok(self)
        } else {
            trace::failed_with_factory(Family::Check);
            Err(factory())
        }
    }

    /// Check that `requirement` holds, failing with an error built from the subject.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::Check;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct OutOfRange(u32);
    ///
    /// let result = 250u32.check_or_else_with(|v| *v < 200, |v| OutOfRange(*v));
    /// assert_eq!(result, Err(OutOfRange(250)));
    /// ```
    fn check_or_else_with<R, F, E>(self, requirement: R, factory: F) -> Result<Self, E>
    where
        R: FnOnce(&Self) -> bool,
        F: FnOnce(&Self) -> E,
    {
        if requirement(&self) {
            Ok(self)
        } else {
            trace::failed_with_factory(Family::Check);
            Err(factory(&self))
        }
    }
}

impl<T> Check for T {}

fn check_failed(message: String) -> CheckFailed {
    trace::failed(Family::Check, &message);
    CheckFailed::new(message)
}
