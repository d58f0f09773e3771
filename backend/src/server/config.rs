//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use profile_api::settings::AppSettings;

/// How long in-flight requests may run after a termination signal.
const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Settings consumed when constructing the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) shutdown_grace: Duration,
}

impl ServerConfig {
    /// Construct a server configuration for the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
        }
    }

    /// Override the graceful shutdown window.
    #[must_use]
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "exercised by server tests")
    )]
    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }
}

impl From<&AppSettings> for ServerConfig {
    fn from(settings: &AppSettings) -> Self {
        Self::new(settings.bind_addr)
    }
}
