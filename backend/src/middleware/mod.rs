//! Request middleware.
//!
//! Purpose: request lifecycle concerns kept out of handlers: trace
//! identifiers with per-request logging, and cross-origin headers.

pub mod cors;
pub mod trace;

pub use cors::cors_headers;
pub use trace::Trace;
