//! # Requisite
//!
//! Fluent guard clauses that hand the value back.
//!
//! Two families of guards are attached to every sized type:
//!
//! - [`Require`]: preconditions. A failed guard means the *caller* passed a
//!   bad argument, and yields a [`PreconditionFailed`].
//! - [`Check`]: invariants and post-conditions. A failed guard means the
//!   *callee's* logic is wrong, and yields a [`CheckFailed`] or a failure
//!   of your choosing.
//!
//! A guard either returns the subject untouched in `Ok`, or returns the
//! failure in `Err`. Failure messages are built only when the guard fails.
//!
//! ## Quick Example
//!
//! ```rust
//! use requisite::{check, require_that, PreconditionFailed, Require};
//!
//! fn percentage(value: u8) -> Result<u8, PreconditionFailed> {
//!     value.require_that(|v| *v <= 100, || format!("{} is not a percentage", value))
//! }
//!
//! assert_eq!(percentage(42), Ok(42));
//! assert_eq!(
//!     percentage(150).unwrap_err().message(),
//!     "150 is not a percentage"
//! );
//!
//! // Without a message, the macros echo the expression that failed.
//! let err = require_that!(1, |v| *v != 1).unwrap_err();
//! assert_eq!(err.message(), "expected: |v| *v != 1");
//!
//! let err = check!(vec![1, 2], |v| v.len() == 3).unwrap_err();
//! assert_eq!(err.message(), "expected: |v| v.len() == 3");
//! ```
//!
//! ## Custom failures
//!
//! ```rust
//! use requisite::Check;
//!
//! #[derive(Debug, PartialEq)]
//! struct Overdrawn(i64);
//!
//! let balance: i64 = -20;
//! let result = balance.check_or_else_with(|b| *b >= 0, |b| Overdrawn(*b));
//! assert_eq!(result, Err(Overdrawn(-20)));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod expectation;
pub mod failure;
mod macros;
pub mod require;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
mod trace;

// Re-exports
pub use check::Check;
pub use expectation::{default_message, Expectation};
pub use failure::{CheckFailed, GuardFailure, PreconditionFailed};
pub use require::Require;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::check::Check;
    pub use crate::expectation::Expectation;
    pub use crate::failure::{CheckFailed, GuardFailure, PreconditionFailed};
    pub use crate::require::Require;
    pub use crate::{check, require, require_that};
}
