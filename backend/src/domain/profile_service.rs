//! Profile use-case: pair the configured user with a freshly fetched fact.
//!
//! The service is stateless between calls. Every invocation performs exactly
//! one upstream fetch and stamps the outcome with the injected clock.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{FactSource, FactSourceError};
use crate::domain::{Fact, UserProfile};

/// Successful profile assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshot {
    /// Configured user fields.
    pub user: UserProfile,
    /// Fact fetched for this request.
    pub fact: Fact,
    /// When the snapshot was assembled.
    pub generated_at: DateTime<Utc>,
}

/// Failed profile assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFailure {
    /// Normalised upstream failure.
    pub cause: FactSourceError,
    /// When the failure was observed.
    pub occurred_at: DateTime<Utc>,
}

/// Composes a [`FactSource`] with static user data.
#[derive(Clone)]
pub struct ProfileService {
    facts: Arc<dyn FactSource>,
    user: UserProfile,
    clock: Arc<dyn Clock>,
}

impl ProfileService {
    /// Create a service over the given fact source.
    pub fn new(facts: Arc<dyn FactSource>, user: UserProfile, clock: Arc<dyn Clock>) -> Self {
        Self { facts, user, clock }
    }

    /// Fetch one fact and assemble the profile snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileFailure`] carrying the normalised fetch error when
    /// the fact source fails.
    pub async fn load_profile(&self) -> Result<ProfileSnapshot, ProfileFailure> {
        match self.facts.fetch_fact().await {
            Ok(fact) => {
                info!("profile served with fresh fact");
                Ok(ProfileSnapshot {
                    user: self.user.clone(),
                    fact,
                    generated_at: self.clock.utc(),
                })
            }
            Err(cause) => {
                warn!(
                    kind = cause.kind(),
                    error = %cause,
                    detail = cause.detail().unwrap_or_default(),
                    "profile request failed to fetch fact"
                );
                Err(ProfileFailure {
                    cause,
                    occurred_at: self.clock.utc(),
                })
            }
        }
    }
}
