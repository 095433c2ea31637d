//! Testing utilities for code built on guards
//!
//! Assertion macros that read better than matching on `Result` by hand, and
//! `proptest` strategies for the failure types behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use requisite::{assert_fails_with, assert_passes, Check, Require};
//!
//! assert_passes!(5.require(true, "unused"), 5);
//! assert_fails_with!(5.check(|v| *v > 10, "too small"), "too small");
//! ```

/// Assert that a guard passed and handed back `expected`.
///
/// Panics if the guard returned a failure, or a different value.
///
/// # Example
///
/// ```rust
/// use requisite::{assert_passes, Require};
///
/// assert_passes!("ok".require_that(|s| !s.is_empty(), "empty"), "ok");
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr, $expected:expr $(,)?) => {
        match $result {
            ::core::result::Result::Ok(value) => {
                assert_eq!(value, $expected);
            }
            ::core::result::Result::Err(e) => {
                panic!("Expected guard to pass, got failure: {:?}", e);
            }
        }
    };
}

/// Assert that a guard failed with the given message.
///
/// Works with any failure implementing `Display`, including the values
/// produced by [`Check::check_or_else`](crate::Check::check_or_else).
///
/// # Example
///
/// ```rust
/// use requisite::{assert_fails_with, require};
///
/// assert_fails_with!(require!(0, false), "expected: false");
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($result:expr, $message:expr $(,)?) => {
        match $result {
            ::core::result::Result::Err(e) => {
                assert_eq!(e.to_string(), $message);
            }
            ::core::result::Result::Ok(value) => {
                panic!(
                    "Expected guard to fail with {:?}, got success: {:?}",
                    $message, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::failure::{CheckFailed, GuardFailure, PreconditionFailed};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for PreconditionFailed {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<String>().prop_map(PreconditionFailed::new).boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for CheckFailed {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<String>().prop_map(CheckFailed::new).boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for GuardFailure {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any::<PreconditionFailed>().prop_map(GuardFailure::from),
            any::<CheckFailed>().prop_map(GuardFailure::from),
        ]
        .boxed()
    }
}
