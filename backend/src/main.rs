//! Backend entry-point: reads settings, wires the profile and health
//! endpoints, and serves until a termination signal drains the server.

mod server;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_http_state, create_server, load_settings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings()?;
    let state = build_http_state(&settings)?;
    let config = ServerConfig::from(&settings);

    let server = create_server(state, config)?;
    info!(
        addr = %settings.bind_addr,
        upstream = %settings.cat_api_url,
        timeout_ms = u64::try_from(settings.cat_api_timeout.as_millis()).unwrap_or(u64::MAX),
        "server listening; profile at /me, health at /health"
    );

    server.await?;
    info!("HTTP server closed");
    Ok(())
}
