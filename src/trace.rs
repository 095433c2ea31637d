//! Failure events for the optional `tracing` feature.
//!
//! With the feature disabled these functions are empty and inlined away, so
//! guards have no side effects beyond the caller's own callbacks.

/// Which guard family reported the failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Family {
    Require,
    Check,
}

impl Family {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    fn as_str(self) -> &'static str {
        match self {
            Family::Require => "require",
            Family::Check => "check",
        }
    }
}

/// Record a failed guard together with its materialized message.
#[inline]
pub(crate) fn failed(family: Family, message: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(guard = family.as_str(), message, "guard failed");

    #[cfg(not(feature = "tracing"))]
    let _ = (family, message);
}

/// Record a failed guard whose failure came from a caller-supplied factory.
#[inline]
pub(crate) fn failed_with_factory(family: Family) {
    #[cfg(feature = "tracing")]
    tracing::debug!(guard = family.as_str(), "guard failed with custom failure");

    #[cfg(not(feature = "tracing"))]
    let _ = family;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_names() {
        assert_eq!(Family::Require.as_str(), "require");
        assert_eq!(Family::Check.as_str(), "check");
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use crate::{Check, Require};
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_failed_require_is_traced() {
            let _ = 5.require(false, "five is not allowed");
            assert!(logs_contain("guard failed"));
            assert!(logs_contain("require"));
            assert!(logs_contain("five is not allowed"));
        }

        #[test]
        #[traced_test]
        fn test_failed_check_factory_is_traced() {
            let _ = 5.check_or_else(|v| *v > 10, || "custom");
            assert!(logs_contain("guard failed with custom failure"));
            assert!(logs_contain("check"));
        }

        #[test]
        #[traced_test]
        fn test_passing_guard_is_silent() {
            let _ = 5.require(true, "unused");
            assert!(!logs_contain("guard failed"));
        }
    }
}
