//! Domain ports implemented by outbound adapters.

mod fact_source;
mod macros;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use fact_source::MockFactSource;
pub use fact_source::{FIXTURE_FACT, FactSource, FactSourceError, FixtureFactSource};
