//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the profile use-case and a clock, and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ProfileService;

/// Dependency bundle for HTTP handlers. Read-only once built.
#[derive(Clone)]
pub struct HttpState {
    pub profile: ProfileService,
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Construct state from the profile service and the clock used to stamp
    /// health responses.
    pub fn new(profile: ProfileService, clock: Arc<dyn Clock>) -> Self {
        Self { profile, clock }
    }
}
