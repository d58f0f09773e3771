//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the `/me` and `/health` paths and the envelope
//! schemas they return. The document backs Swagger UI in debug builds and is
//! exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::envelope::{
    EnvelopeStatus, FailureResponse, HealthResponse, InternalErrorResponse, NotFoundResponse,
    ProfileResponse, UserBody,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Profile API",
        description = "Static user profile enriched with a random cat fact, plus a liveness probe."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::profile::get_profile,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        EnvelopeStatus,
        UserBody,
        ProfileResponse,
        FailureResponse,
        HealthResponse,
        NotFoundResponse,
        InternalErrorResponse
    )),
    tags(
        (name = "profile", description = "User profile with a fresh fact"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/me"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn registers_envelope_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components present").schemas;
        for name in ["ProfileResponse", "FailureResponse", "HealthResponse", "NotFoundResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
