//! Permissive cross-origin headers added to every response.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Methods advertised in `Access-Control-Allow-Methods`.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
/// Headers advertised in `Access-Control-Allow-Headers`.
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Default-headers middleware allowing any origin.
///
/// Headers already set by a handler are left untouched.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use profile_api::middleware::cors_headers;
///
/// let _app = App::new().wrap(cors_headers());
/// ```
#[must_use]
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
}
