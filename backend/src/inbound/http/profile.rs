//! Profile endpoint.
//!
//! ```text
//! GET /me
//! ```

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::envelope::{FailureResponse, ProfileResponse};
use crate::inbound::http::state::HttpState;

/// Return the configured user together with a freshly fetched fact.
///
/// Upstream failures never escape as 500s: every fetch error is reported as
/// a 503 failure envelope naming the cause.
#[utoipa::path(
    get,
    path = "/me",
    tags = ["profile"],
    responses(
        (status = 200, description = "Profile with a fresh fact", body = ProfileResponse),
        (status = 503, description = "Upstream fact API failed", body = FailureResponse)
    )
)]
#[get("/me")]
pub async fn get_profile(state: web::Data<HttpState>) -> HttpResponse {
    match state.profile.load_profile().await {
        Ok(snapshot) => HttpResponse::Ok().json(ProfileResponse::from(snapshot)),
        Err(failure) => HttpResponse::ServiceUnavailable().json(FailureResponse::from(failure)),
    }
}
