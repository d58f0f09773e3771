//! JSON envelopes returned by the HTTP surface.
//!
//! Every body carries a `status` discriminator. Timestamps are ISO 8601 UTC
//! strings with millisecond precision, e.g. `2026-03-14T09:26:53.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ProfileFailure, ProfileSnapshot, UserProfile};

/// Message used when the profile endpoint cannot fetch a fact.
pub const PROFILE_FAILURE_MESSAGE: &str = "Failed to fetch cat fact";
/// Message used for unmatched routes.
pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";
/// Message used for unexpected server errors.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Render a timestamp the way every envelope does.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use profile_api::inbound::http::envelope::iso_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
/// assert_eq!(iso_timestamp(at), "2026-03-14T09:26:53.000Z");
/// ```
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Envelope discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// Profile assembled.
    Success,
    /// Request failed.
    Error,
    /// Liveness probe.
    Ok,
}

/// User fields echoed by `/me`. Unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Rust/actix-web")]
    pub stack: Option<String>,
}

impl From<UserProfile> for UserBody {
    fn from(user: UserProfile) -> Self {
        Self {
            email: user.email,
            name: user.name,
            stack: user.stack,
        }
    }
}

/// Successful `/me` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "success")]
    pub status: EnvelopeStatus,
    pub user: UserBody,
    #[schema(example = "2026-03-14T09:26:53.000Z")]
    pub timestamp: String,
    #[schema(example = "Cats sleep 70% of their lives.")]
    pub fact: String,
}

impl From<ProfileSnapshot> for ProfileResponse {
    fn from(snapshot: ProfileSnapshot) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            user: snapshot.user.into(),
            timestamp: iso_timestamp(snapshot.generated_at),
            fact: snapshot.fact.into_inner(),
        }
    }
}

/// `/me` body when the upstream fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FailureResponse {
    #[schema(example = "error")]
    pub status: EnvelopeStatus,
    #[schema(example = "Failed to fetch cat fact")]
    pub message: String,
    /// Human-readable cause of the upstream failure.
    #[schema(example = "Cat Facts API returned status 500")]
    pub error: String,
    #[schema(example = "2026-03-14T09:26:53.000Z")]
    pub timestamp: String,
}

impl From<ProfileFailure> for FailureResponse {
    fn from(failure: ProfileFailure) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: PROFILE_FAILURE_MESSAGE.to_owned(),
            error: failure.cause.to_string(),
            timestamp: iso_timestamp(failure.occurred_at),
        }
    }
}

/// `/health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: EnvelopeStatus,
    #[schema(example = "2026-03-14T09:26:53.000Z")]
    pub timestamp: String,
}

impl HealthResponse {
    /// Liveness body stamped with `at`.
    #[must_use]
    pub fn ok(at: DateTime<Utc>) -> Self {
        Self {
            status: EnvelopeStatus::Ok,
            timestamp: iso_timestamp(at),
        }
    }
}

/// Body for unmatched routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotFoundResponse {
    #[schema(example = "error")]
    pub status: EnvelopeStatus,
    #[schema(example = "Endpoint not found")]
    pub message: String,
    /// Requested path, echoed back.
    #[schema(example = "/unknown")]
    pub path: String,
}

impl NotFoundResponse {
    /// Not-found body for `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: NOT_FOUND_MESSAGE.to_owned(),
            path: path.into(),
        }
    }
}

/// Generic body for unexpected failures; never carries internal detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InternalErrorResponse {
    #[schema(example = "error")]
    pub status: EnvelopeStatus,
    #[schema(example = "Internal server error")]
    pub message: String,
}

impl Default for InternalErrorResponse {
    fn default() -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: INTERNAL_ERROR_MESSAGE.to_owned(),
        }
    }
}
