//! Domain primitives, ports, and the profile use-case.
//!
//! Purpose: keep the profile assembly logic free of HTTP and transport
//! concerns. Inbound adapters call [`ProfileService`]; outbound adapters
//! implement the [`ports::FactSource`] port.
//!
//! Public surface:
//! - Fact (alias to `fact::Fact`): one non-empty fact string.
//! - UserProfile (alias to `user_profile::UserProfile`): static user fields.
//! - ProfileService (alias to `profile_service::ProfileService`): composes a
//!   fact source, the user profile, and a clock.

pub mod fact;
pub mod ports;
pub mod profile_service;
pub mod user_profile;

pub use self::fact::{Fact, FactValidationError};
pub use self::profile_service::{ProfileFailure, ProfileService, ProfileSnapshot};
pub use self::user_profile::UserProfile;
