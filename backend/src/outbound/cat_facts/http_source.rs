//! Reqwest-backed fact source adapter.
//!
//! This adapter owns transport details only: the single GET request, the
//! client-level timeout, HTTP status mapping, and JSON decoding into a domain
//! [`Fact`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::warn;

use super::dto::CatFactDto;
use crate::domain::Fact;
use crate::domain::ports::{FactSource, FactSourceError};

const DEFAULT_USER_AGENT: &str = concat!("profile-api/", env!("CARGO_PKG_VERSION"));

/// Fact source performing one HTTP GET against a fixed endpoint per call.
pub struct CatFactHttpSource {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl CatFactHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// The timeout bounds the whole exchange: connect, headers, and body.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    async fn request_fact(&self) -> Result<Fact, FactSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| map_transport_error(&error, self.timeout_ms()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status_error(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(&error, self.timeout_ms()))?;
        parse_fact(body.as_ref())
    }
}

#[async_trait]
impl FactSource for CatFactHttpSource {
    async fn fetch_fact(&self) -> Result<Fact, FactSourceError> {
        let result = self.request_fact().await;
        if let Err(error) = &result {
            warn!(
                endpoint = %self.endpoint,
                kind = error.kind(),
                error = %error,
                detail = error.detail().unwrap_or_default(),
                "error fetching fact from upstream"
            );
        }
        result
    }
}

fn parse_fact(body: &[u8]) -> Result<Fact, FactSourceError> {
    let decoded: CatFactDto = serde_json::from_slice(body).map_err(|error| {
        FactSourceError::invalid_upstream_response(format!("invalid JSON payload: {error}"))
    })?;
    decoded
        .into_domain_fact()
        .map_err(FactSourceError::invalid_upstream_response)
}

fn map_transport_error(error: &reqwest::Error, timeout_ms: u64) -> FactSourceError {
    if error.is_timeout() {
        FactSourceError::upstream_timeout(timeout_ms)
    } else if error.is_connect() || error.is_request() || error.is_body() {
        FactSourceError::upstream_unreachable(error.to_string())
    } else if error.is_decode() {
        FactSourceError::invalid_upstream_response(error.to_string())
    } else {
        FactSourceError::unknown_fetch_error(error.to_string())
    }
}

fn map_status_error(status: StatusCode) -> FactSourceError {
    FactSourceError::upstream_status_error(status.as_u16())
}
