//! Failure descriptions that are only built when a guard fails
//!
//! An [`Expectation`] describes what should have been true. Guards hold on to
//! it unevaluated and call [`Expectation::materialize`] only on the failure
//! path, so an expensive or fallible description costs nothing when the guard
//! passes.
//!
//! Two shapes implement the trait:
//!
//! - literal text (`&str`, `&String`, `String`, `Cow<str>`), used verbatim
//! - a zero-argument producer `FnOnce() -> String`
//!
//! Producers that need the subject go through the `*_with` guard methods,
//! which take `FnOnce(&T) -> String` directly.
//!
//! # Example
//!
//! ```rust
//! use requisite::Require;
//!
//! let name = String::from("");
//! let err = name
//!     .require_that(|n| !n.is_empty(), || "name must not be empty".to_string())
//!     .unwrap_err();
//! assert_eq!(err.message(), "name must not be empty");
//! ```

use std::borrow::Cow;

/// Prefix of messages synthesized from call-site source text.
pub(crate) const DEFAULT_PREFIX: &str = "expected: ";

/// A lazily materialized failure description.
///
/// Implemented for literal text and for zero-argument closures returning
/// `String`.
pub trait Expectation {
    /// Produce the failure message.
    ///
    /// Guards call this at most once, and only after the condition failed.
    fn materialize(self) -> String;
}

impl Expectation for &str {
    #[inline]
    fn materialize(self) -> String {
        self.to_owned()
    }
}

impl Expectation for &String {
    #[inline]
    fn materialize(self) -> String {
        self.clone()
    }
}

impl Expectation for String {
    #[inline]
    fn materialize(self) -> String {
        self
    }
}

impl Expectation for Cow<'_, str> {
    #[inline]
    fn materialize(self) -> String {
        self.into_owned()
    }
}

impl<F> Expectation for F
where
    F: FnOnce() -> String,
{
    #[inline]
    fn materialize(self) -> String {
        self()
    }
}

/// Build the default message for a guard given the source text of its
/// condition or predicate.
///
/// The [`require!`](crate::require!), [`require_that!`](crate::require_that!)
/// and [`check!`](crate::check!) macros produce the same text at compile time.
///
/// # Example
///
/// ```rust
/// use requisite::default_message;
///
/// assert_eq!(default_message("v => v != 1"), "expected: v => v != 1");
/// ```
pub fn default_message(source: &str) -> String {
    let mut message = String::with_capacity(DEFAULT_PREFIX.len() + source.len());
    message.push_str(DEFAULT_PREFIX);
    message.push_str(source);
    message
}
