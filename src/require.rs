//! Preconditions: argument validation that hands the argument back
//!
//! [`Require`] is implemented for every sized type. Each method either
//! returns the subject unchanged in `Ok`, or a [`PreconditionFailed`] whose
//! message is the materialized expectation.
//!
//! | Method | Condition | Message |
//! |---|---|---|
//! | [`require`](Require::require) | `bool` | literal or `FnOnce() -> String` |
//! | [`require_with`](Require::require_with) | `bool` | `FnOnce(&T) -> String` |
//! | [`require_that`](Require::require_that) | `FnOnce(&T) -> bool` | literal or `FnOnce() -> String` |
//! | [`require_that_with`](Require::require_that_with) | `FnOnce(&T) -> bool` | `FnOnce(&T) -> String` |
//!
//! The [`require!`](crate::require!) and [`require_that!`](crate::require_that!)
//! macros fill in a message echoing the condition's source text.
//!
//! # Example
//!
//! ```rust
//! use requisite::{PreconditionFailed, Require};
//!
//! struct Port(u16);
//!
//! impl Port {
//!     fn new(raw: u16) -> Result<Self, PreconditionFailed> {
//!         let raw = raw.require_that_with(|p| *p >= 1024, |p| {
//!             format!("port {} is privileged", p)
//!         })?;
//!         Ok(Port(raw))
//!     }
//! }
//!
//! assert_eq!(Port::new(8080).map(|p| p.0), Ok(8080));
//! assert_eq!(
//!     Port::new(80).err().map(|e| e.into_message()),
//!     Some("port 80 is privileged".to_string())
//! );
//! ```

use crate::expectation::Expectation;
use crate::failure::PreconditionFailed;
use crate::trace::{self, Family};

/// Precondition guards attached to every sized value.
pub trait Require: Sized {
    /// Require a precomputed `condition`.
    ///
    /// Returns `self` if `condition` is true. Otherwise materializes
    /// `expectation` and returns it as a [`PreconditionFailed`].
    ///
    /// The subject is moved into the call before `condition` is evaluated.
    /// A condition that borrows a non-`Copy` subject has to be computed
    /// first, or the guard called on `&value`. The
    /// [`require!`](crate::require!) macro evaluates the condition first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::Require;
    ///
    /// let retries = 3;
    /// assert_eq!(retries.require(retries < 10, "too many retries"), Ok(3));
    ///
    /// let err = 1.require(false, "message").unwrap_err();
    /// assert_eq!(err.message(), "message");
    ///
    /// let name = String::from("ferris");
    /// let long_enough = name.len() > 3;
    /// assert_eq!(name.require(long_enough, "name too short"), Ok(String::from("ferris")));
    /// ```
    fn require<X>(self, condition: bool, expectation: X) -> Result<Self, PreconditionFailed>
    where
        X: Expectation,
    {
        if condition {
            Ok(self)
        } else {
            Err(precondition_failed(expectation.materialize()))
        }
    }

    /// Require a precomputed `condition`, describing a failure from the subject.
    ///
    /// `describe` is called only if `condition` is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::Require;
    ///
    /// let err = 7.require_with(false, |v| format!("{} rejected", v)).unwrap_err();
    /// assert_eq!(err.message(), "7 rejected");
    /// ```
    fn require_with<D>(self, condition: bool, describe: D) -> Result<Self, PreconditionFailed>
    where
        D: FnOnce(&Self) -> String,
    {
        if condition {
            Ok(self)
        } else {
            let message = describe(&self);
            Err(precondition_failed(message))
        }
    }

    /// Require that `requirement` holds for the subject.
    ///
    /// `requirement` is called exactly once. `expectation` is materialized
    /// only if it returns false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::Require;
    ///
    /// let name = "ferris".require_that(|n| !n.is_empty(), "name must not be empty");
    /// assert_eq!(name, Ok("ferris"));
    /// ```
    fn require_that<R, X>(
        self,
        requirement: R,
        expectation: X,
    ) -> Result<Self, PreconditionFailed>
    where
        R: FnOnce(&Self) -> bool,
        X: Expectation,
    {
        let holds = requirement(&self);
        self.require(holds, expectation)
    }

    /// Require that `requirement` holds, describing a failure from the subject.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::Require;
    ///
    /// let err = vec![1, 2, 3]
    ///     .require_that_with(|v| v.len() < 3, |v| format!("{} items is too many", v.len()))
    ///     .unwrap_err();
    /// assert_eq!(err.message(), "3 items is too many");
    /// ```
    fn require_that_with<R, D>(
        self,
        requirement: R,
        describe: D,
    ) -> Result<Self, PreconditionFailed>
    where
        R: FnOnce(&Self) -> bool,
        D: FnOnce(&Self) -> String,
    {
        let holds = requirement(&self);
        self.require_with(holds, describe)
    }
}

impl<T> Require for T {}

fn precondition_failed(message: String) -> PreconditionFailed {
    trace::failed(Family::Require, &message);
    PreconditionFailed::new(message)
}
