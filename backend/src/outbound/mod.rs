//! Outbound adapters implementing domain ports for external services.
//!
//! Adapters are thin translators between domain types and transport
//! representations. They contain no business logic.

pub mod cat_facts;
