//! Cat facts outbound adapter.
//!
//! This module provides the HTTP implementation of the `FactSource` port.

mod dto;
mod http_source;

pub use http_source::CatFactHttpSource;
