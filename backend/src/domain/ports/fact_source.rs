//! Driven port for fetching one fact from the upstream API.
//!
//! Adapters own transport details; the domain only sees a [`Fact`] or one of
//! the normalised [`FactSourceError`] kinds.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::Fact;

define_port_error! {
    /// Normalised failures surfaced while fetching a fact.
    ///
    /// The `Display` text is the human-readable cause returned to clients.
    pub enum FactSourceError {
        /// The call did not complete within the configured timeout.
        UpstreamTimeout { timeout_ms: u64 } =>
            "Request to Cat Facts API timed out after {timeout_ms} ms",
        /// The upstream answered with a non-2xx status.
        UpstreamStatusError { status: u16 } =>
            "Cat Facts API returned status {status}",
        /// No response was received (connection refused, DNS failure, reset).
        UpstreamUnreachable { message: String } =>
            "No response received from Cat Facts API",
        /// The body was not JSON or carried no usable `fact` field.
        InvalidUpstreamResponse { message: String } =>
            "Invalid response format from Cat Facts API",
        /// Anything else; carries the underlying message.
        UnknownFetchError { message: String } =>
            "{message}",
    }
}

impl FactSourceError {
    /// Transport-level detail kept for logs, if the variant carries any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::UpstreamUnreachable { message }
            | Self::InvalidUpstreamResponse { message }
            | Self::UnknownFetchError { message } => Some(message.as_str()),
            Self::UpstreamTimeout { .. } | Self::UpstreamStatusError { .. } => None,
        }
    }
}

/// Port for obtaining a single fact. One call is one upstream attempt: no
/// retries and no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch one fact.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use profile_api::domain::ports::{FactSource, FixtureFactSource};
    ///
    /// let fact = FixtureFactSource.fetch_fact().await?;
    /// assert!(!fact.as_ref().is_empty());
    /// # Ok::<(), profile_api::domain::ports::FactSourceError>(())
    /// ```
    async fn fetch_fact(&self) -> Result<Fact, FactSourceError>;
}

/// Text returned by [`FixtureFactSource`].
pub const FIXTURE_FACT: &str = "Cats have five toes on their front paws, but only four on the back.";

/// Fixture implementation returning a constant fact.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureFactSource;

#[async_trait]
impl FactSource for FixtureFactSource {
    async fn fetch_fact(&self) -> Result<Fact, FactSourceError> {
        Fact::new(FIXTURE_FACT).map_err(|err| FactSourceError::unknown_fetch_error(err.to_string()))
    }
}
