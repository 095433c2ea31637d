//! Serde support for failure types (feature-gated)
//!
//! [`PreconditionFailed`] and [`CheckFailed`] serialize as their bare message
//! and deserialize from a string, so they can travel inside API error
//! payloads.
//!
//! # Example
//!
//! ```rust,ignore
//! use requisite::PreconditionFailed;
//!
//! let err = PreconditionFailed::new("port must be set");
//! assert_eq!(serde_json::to_string(&err).unwrap(), r#""port must be set""#);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::failure::{CheckFailed, PreconditionFailed};

impl Serialize for PreconditionFailed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

impl<'de> Deserialize<'de> for PreconditionFailed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(PreconditionFailed::new)
    }
}

impl Serialize for CheckFailed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

impl<'de> Deserialize<'de> for CheckFailed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(CheckFailed::new)
    }
}
