//! Fact value returned by the upstream API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`Fact::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactValidationError {
    /// The fact text was empty.
    #[error("fact must not be empty")]
    Empty,
}

/// One fact string, fetched fresh for every profile request.
///
/// # Examples
/// ```
/// use profile_api::domain::Fact;
///
/// let fact = Fact::new("Cats sleep for most of the day.").expect("valid fact");
/// assert_eq!(fact.as_ref(), "Cats sleep for most of the day.");
/// assert!(Fact::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fact(String);

impl Fact {
    /// Validate and construct a [`Fact`].
    pub fn new(text: impl Into<String>) -> Result<Self, FactValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(FactValidationError::Empty);
        }
        Ok(Self(text))
    }

    /// Consume the fact, returning the owned text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Fact {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Fact> for String {
    fn from(value: Fact) -> Self {
        value.0
    }
}

impl TryFrom<String> for Fact {
    type Error = FactValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
