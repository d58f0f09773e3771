//! Boundary safety nets: unmatched routes and unexpected server errors.
//!
//! Neither handler carries internal detail to the client. The 500 rewrite
//! logs the underlying cause before replacing the body.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpRequest, HttpResponse};
use tracing::error;

use crate::inbound::http::envelope::{InternalErrorResponse, NotFoundResponse};

/// Default service answering 404 with the requested path echoed back.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(NotFoundResponse::new(req.path()))
}

/// Middleware rewriting every 500 response into the generic error envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use profile_api::inbound::http::fallback::internal_error_handlers;
///
/// let _app = App::new().wrap(internal_error_handlers());
/// ```
#[must_use]
pub fn internal_error_handlers<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_internal_error)
}

fn render_internal_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    match res.response().error() {
        Some(cause) => error!(path = %res.request().path(), error = %cause, "unhandled error"),
        None => error!(path = %res.request().path(), "handler returned internal server error"),
    }

    let (req, _) = res.into_parts();
    let response = HttpResponse::InternalServerError().json(InternalErrorResponse::default());
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}
