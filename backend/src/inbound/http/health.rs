//! Liveness endpoint for orchestration and load balancers.

use actix_web::{HttpResponse, get, http::header, web};

use crate::inbound::http::envelope::HealthResponse;
use crate::inbound::http::state::HttpState;

/// Liveness probe. Always 200; has no dependencies.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthResponse::ok(state.clock.utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixtureFactSource;
    use crate::domain::{ProfileService, UserProfile};
    use crate::test_support::FixedClock;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::DateTime;
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn reports_ok_with_iso_timestamp() {
        let clock = Arc::new(FixedClock::fixture());
        let profile = ProfileService::new(
            Arc::new(FixtureFactSource),
            UserProfile::default(),
            clock.clone(),
        );
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(profile, clock)))
                .service(health),
        )
        .await;

        let request = actix_test::TestRequest::get().uri("/health").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("status").and_then(Value::as_str), Some("ok"));
        let timestamp = body
            .get("timestamp")
            .and_then(Value::as_str)
            .expect("timestamp present");
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert_eq!(timestamp, "2026-03-14T09:26:53.000Z");
    }
}
