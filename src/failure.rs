//! Failure kinds produced by guards
//!
//! A guard that does not hold returns one of two failures:
//!
//! - [`PreconditionFailed`] from the [`Require`](crate::Require) family: the caller
//!   handed over an argument or state it should not have.
//! - [`CheckFailed`] from the [`Check`](crate::Check) family: something the callee
//!   itself expected to be true turned out false.
//!
//! Both carry nothing but their message. [`GuardFailure`] unifies them so a
//! function can use `?` across both families.
//!
//! # Examples
//!
//! ```
//! use requisite::{Check, GuardFailure, Require};
//!
//! fn halve(value: i32) -> Result<i32, GuardFailure> {
//!     let value = value.require_that(|v| v % 2 == 0, "value must be even")?;
//!     let half = (value / 2).check(|h| h * 2 == value, "halving lost precision")?;
//!     Ok(half)
//! }
//!
//! assert_eq!(halve(8), Ok(4));
//! assert!(halve(7).unwrap_err().is_precondition());
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Failure of a precondition: the caller supplied an invalid argument or state.
///
/// The `Display` output is exactly the materialized expectation.
///
/// # Examples
///
/// ```
/// use requisite::{PreconditionFailed, Require};
///
/// let err = 0.require(false, "port must be set").unwrap_err();
/// assert_eq!(err, PreconditionFailed::new("port must be set"));
/// assert_eq!(err.to_string(), "port must be set");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreconditionFailed {
    message: String,
}

impl PreconditionFailed {
    /// Create a precondition failure carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        PreconditionFailed {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the failure and return its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for PreconditionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for PreconditionFailed {}

/// Failure of a check: an invariant or post-condition did not hold.
///
/// # Examples
///
/// ```
/// use requisite::{Check, CheckFailed};
///
/// let err = vec![3, 1, 2]
///     .check(|v| v.windows(2).all(|w| w[0] <= w[1]), "output must be sorted")
///     .unwrap_err();
/// assert_eq!(err, CheckFailed::new("output must be sorted"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckFailed {
    message: String,
}

impl CheckFailed {
    /// Create a check failure carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        CheckFailed {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the failure and return its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for CheckFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for CheckFailed {}

/// Either kind of guard failure.
///
/// Built through `From`, so `?` lifts both [`PreconditionFailed`] and
/// [`CheckFailed`] into it. Transparent: `Display` is the inner message and
/// there is no further `source`, so error-chain reporters print it once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GuardFailure {
    /// A [`Require`](crate::Require) guard failed.
    Precondition(PreconditionFailed),
    /// A [`Check`](crate::Check) guard failed.
    Check(CheckFailed),
}

impl GuardFailure {
    /// Returns `true` if a precondition failed.
    pub fn is_precondition(&self) -> bool {
        matches!(self, GuardFailure::Precondition(_))
    }

    /// Returns `true` if a check failed.
    pub fn is_check(&self) -> bool {
        matches!(self, GuardFailure::Check(_))
    }

    /// The message of the underlying failure.
    pub fn message(&self) -> &str {
        match self {
            GuardFailure::Precondition(e) => e.message(),
            GuardFailure::Check(e) => e.message(),
        }
    }
}

impl From<PreconditionFailed> for GuardFailure {
    fn from(err: PreconditionFailed) -> Self {
        GuardFailure::Precondition(err)
    }
}

impl From<CheckFailed> for GuardFailure {
    fn from(err: CheckFailed) -> Self {
        GuardFailure::Check(err)
    }
}

impl fmt::Display for GuardFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// Transparent over the inner failure: Display already prints its message.
impl StdError for GuardFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            GuardFailure::Precondition(e) => e.source(),
            GuardFailure::Check(e) => e.source(),
        }
    }
}
