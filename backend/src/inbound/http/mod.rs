//! HTTP inbound adapter exposing the profile and health endpoints.

pub mod envelope;
pub mod fallback;
pub mod health;
pub mod profile;
pub mod state;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::middleware::{Trace, cors_headers};
use fallback::{internal_error_handlers, not_found};
use state::HttpState;

/// Assemble the application: routes, 404 fallback, 500 rewrite, CORS headers,
/// and request tracing (outermost).
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use mockable::DefaultClock;
/// use profile_api::domain::ports::FixtureFactSource;
/// use profile_api::domain::{ProfileService, UserProfile};
/// use profile_api::inbound::http::{build_app, state::HttpState};
///
/// let clock = Arc::new(DefaultClock);
/// let profile = ProfileService::new(Arc::new(FixtureFactSource), UserProfile::default(), clock.clone());
/// let _app = build_app(web::Data::new(HttpState::new(profile, clock)));
/// ```
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(internal_error_handlers())
        .wrap(cors_headers())
        .wrap(Trace)
        .service(profile::get_profile)
        .service(health::health)
        .default_service(web::to(not_found))
}
