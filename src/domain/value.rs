//! Generic field value holder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single string payload shared by every contact field.
///
/// `Value` carries no validation of its own. Typed fields such as
/// [`Name`](super::Name) and [`PhoneNumber`](super::PhoneNumber) wrap it and
/// decide what content they accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    /// Create a new value from anything string-like.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Replace the payload, returning the previous one.
    pub(crate) fn replace(&mut self, value: impl Into<String>) -> String {
        std::mem::replace(&mut self.0, value.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
