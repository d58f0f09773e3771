//! Server construction and dependency wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use mockable::{Clock, DefaultClock, DefaultEnv};
use profile_api::domain::ports::FactSource;
use profile_api::domain::{ProfileService, UserProfile};
use profile_api::inbound::http::build_app;
use profile_api::inbound::http::state::HttpState;
use profile_api::outbound::cat_facts::CatFactHttpSource;
use profile_api::settings::AppSettings;
#[cfg(debug_assertions)]
use profile_api::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Read settings from the process environment.
///
/// # Errors
/// Returns [`std::io::Error`] naming the offending variable when a value is
/// unusable.
pub fn load_settings() -> std::io::Result<AppSettings> {
    AppSettings::from_env(&DefaultEnv::new())
        .map_err(|e| std::io::Error::other(format!("invalid configuration: {e}")))
}

/// Build the shared handler state from settings.
///
/// # Errors
/// Returns [`std::io::Error`] when the outbound HTTP client cannot be built.
pub fn build_http_state(settings: &AppSettings) -> std::io::Result<web::Data<HttpState>> {
    let source = CatFactHttpSource::new(settings.cat_api_url.clone(), settings.cat_api_timeout)
        .map_err(|e| std::io::Error::other(format!("fact client construction failed: {e}")))?;
    Ok(http_state(
        Arc::new(source),
        settings.user.clone(),
        Arc::new(DefaultClock),
    ))
}

fn http_state(
    facts: Arc<dyn FactSource>,
    user: UserProfile,
    clock: Arc<dyn Clock>,
) -> web::Data<HttpState> {
    let profile = ProfileService::new(facts, user, Arc::clone(&clock));
    web::Data::new(HttpState::new(profile, clock))
}

/// Construct an Actix HTTP server.
///
/// The returned server stops accepting on SIGINT/SIGTERM and lets in-flight
/// requests finish within the configured grace window.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(state: web::Data<HttpState>, config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        shutdown_grace,
    } = config;

    let server = HttpServer::new(move || {
        let app = build_app(state.clone());
        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
        app
    })
    .shutdown_timeout(shutdown_grace.as_secs())
    .bind(bind_addr)?
    .run();

    Ok(server)
}
