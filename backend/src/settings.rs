//! Environment-driven application settings.
//!
//! Values are read once at process start into an immutable [`AppSettings`]
//! which is then handed to the server, the profile service, and the outbound
//! fact source. Reading goes through [`mockable::Env`] so the parsing rules
//! can be tested without touching the process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use mockable::Env;
use tracing::warn;
use url::Url;

use crate::domain::UserProfile;

/// Listening port.
pub const PORT_ENV: &str = "PORT";
/// Listening interface.
pub const BIND_HOST_ENV: &str = "BIND_HOST";
/// Profile email.
pub const USER_EMAIL_ENV: &str = "USER_EMAIL";
/// Profile display name.
pub const USER_NAME_ENV: &str = "USER_NAME";
/// Profile technology stack.
pub const USER_STACK_ENV: &str = "USER_STACK";
/// Upstream fact endpoint.
pub const CAT_API_URL_ENV: &str = "CAT_API_URL";
/// Upstream timeout in milliseconds.
pub const CAT_API_TIMEOUT_ENV: &str = "CAT_API_TIMEOUT";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
/// Endpoint used when `CAT_API_URL` is unset.
pub const DEFAULT_CAT_API_URL: &str = "https://catfact.ninja/fact";
/// Timeout used when `CAT_API_TIMEOUT` is unset or invalid.
pub const DEFAULT_CAT_API_TIMEOUT_MS: u64 = 5000;

const PORT_EXPECTED: &str = "an integer in 0..=65535";
const HOST_EXPECTED: &str = "an IPv4 or IPv6 address";
const URL_EXPECTED: &str = "an absolute http(s) URL";

/// Errors raised while reading settings.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Immutable process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Static user fields echoed by `/me`.
    pub user: UserProfile,
    /// Upstream fact endpoint.
    pub cat_api_url: Url,
    /// Upper bound on one upstream call.
    pub cat_api_timeout: Duration,
}

impl AppSettings {
    /// Read settings from the supplied environment.
    ///
    /// Unset user fields are logged and left out of responses. An unset,
    /// non-numeric, zero, or negative `CAT_API_TIMEOUT` falls back to
    /// [`DEFAULT_CAT_API_TIMEOUT_MS`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mockable::MockEnv;
    /// use profile_api::settings::AppSettings;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "USER_NAME" => Some("Ada".to_owned()),
    ///     "CAT_API_TIMEOUT" => Some("250".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = AppSettings::from_env(&env)?;
    /// assert_eq!(settings.bind_addr.port(), 3000);
    /// assert_eq!(settings.cat_api_timeout.as_millis(), 250);
    /// assert_eq!(settings.user.name.as_deref(), Some("Ada"));
    /// # Ok::<(), profile_api::settings::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] when `PORT`, `BIND_HOST`, or
    /// `CAT_API_URL` hold values that cannot be used.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let host = bind_host_from_env(env)?;
        let port = port_from_env(env)?;
        let user = user_from_env(env);
        let cat_api_url = cat_api_url_from_env(env)?;
        let cat_api_timeout = Duration::from_millis(cat_api_timeout_from_env(env));

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            user,
            cat_api_url,
            cat_api_timeout,
        })
    }
}

fn non_blank<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name).filter(|value| !value.trim().is_empty())
}

fn port_from_env<E: Env>(env: &E) -> Result<u16, ConfigError> {
    match non_blank(env, PORT_ENV) {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value,
                expected: PORT_EXPECTED,
            }),
        None => Ok(DEFAULT_PORT),
    }
}

fn bind_host_from_env<E: Env>(env: &E) -> Result<IpAddr, ConfigError> {
    match non_blank(env, BIND_HOST_ENV) {
        Some(value) => value
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidEnv {
                name: BIND_HOST_ENV,
                value,
                expected: HOST_EXPECTED,
            }),
        None => Ok(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
    }
}

fn user_from_env<E: Env>(env: &E) -> UserProfile {
    let user = UserProfile {
        email: env.string(USER_EMAIL_ENV),
        name: env.string(USER_NAME_ENV),
        stack: env.string(USER_STACK_ENV),
    };
    let missing = user.missing_fields();
    if !missing.is_empty() {
        warn!(
            fields = ?missing,
            "user profile fields not set; they will be omitted from /me"
        );
    }
    user
}

fn cat_api_url_from_env<E: Env>(env: &E) -> Result<Url, ConfigError> {
    let raw = non_blank(env, CAT_API_URL_ENV).unwrap_or_else(|| DEFAULT_CAT_API_URL.to_owned());
    match Url::parse(raw.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        _ => Err(ConfigError::InvalidEnv {
            name: CAT_API_URL_ENV,
            value: raw,
            expected: URL_EXPECTED,
        }),
    }
}

fn cat_api_timeout_from_env<E: Env>(env: &E) -> u64 {
    let Some(value) = non_blank(env, CAT_API_TIMEOUT_ENV) else {
        return DEFAULT_CAT_API_TIMEOUT_MS;
    };
    match value.trim().parse::<i64>() {
        Ok(millis) if millis > 0 => u64::try_from(millis).unwrap_or(DEFAULT_CAT_API_TIMEOUT_MS),
        _ => {
            warn!(
                value = %value,
                default_ms = DEFAULT_CAT_API_TIMEOUT_MS,
                "invalid CAT_API_TIMEOUT; using default"
            );
            DEFAULT_CAT_API_TIMEOUT_MS
        }
    }
}

#[cfg(test)]
mod tests;
