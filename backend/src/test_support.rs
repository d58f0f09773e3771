//! Test utilities for the crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`, via
//! the `test-support` feature). Provides a fixed clock and an in-process stub
//! of the upstream fact API.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, http::StatusCode, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use url::Url;

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at `2026-03-14T09:26:53Z`.
    #[must_use]
    pub fn fixture() -> Self {
        Self(
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
                .single()
                .unwrap_or_default(),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// How the stub upstream answers every request.
#[derive(Debug, Clone)]
pub enum UpstreamBehaviour {
    /// 200 with `{"fact": <text>, "length": <len>}`.
    Fact(String),
    /// 200 with a distinct fact per request: `fact #<n>`.
    CountingFacts,
    /// The given status with a small JSON error body.
    Status(u16),
    /// 200 with the raw body verbatim.
    RawBody(String),
    /// Sleep, then answer with a fact.
    Delayed(Duration),
}

struct StubState {
    behaviour: UpstreamBehaviour,
    hits: Arc<AtomicUsize>,
}

async fn respond(state: web::Data<StubState>) -> HttpResponse {
    let hit = state.hits.fetch_add(1, Ordering::SeqCst) + 1;
    match &state.behaviour {
        UpstreamBehaviour::Fact(text) => fact_response(text),
        UpstreamBehaviour::CountingFacts => fact_response(&format!("fact #{hit}")),
        UpstreamBehaviour::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).json(serde_json::json!({ "message": "stub failure" }))
        }
        UpstreamBehaviour::RawBody(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body.clone()),
        UpstreamBehaviour::Delayed(delay) => {
            tokio::time::sleep(*delay).await;
            fact_response("late fact")
        }
    }
}

fn fact_response(text: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "fact": text, "length": text.len() }))
}

/// Stub upstream listening on an ephemeral loopback port.
///
/// Must be spawned from within an actix system (e.g. `#[actix_web::test]`).
pub struct StubUpstream {
    url: Url,
    handle: ServerHandle,
    hits: Arc<AtomicUsize>,
}

impl StubUpstream {
    /// Bind and start the stub.
    ///
    /// # Errors
    ///
    /// Propagates socket binding failures.
    pub fn spawn(behaviour: UpstreamBehaviour) -> std::io::Result<Self> {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = web::Data::new(StubState {
            behaviour,
            hits: Arc::clone(&hits),
        });
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(respond))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))?;
        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| std::io::Error::other("stub upstream did not bind"))?;
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Ok(Self {
            url: fact_url(addr)?,
            handle,
            hits,
        })
    }

    /// URL of the stub's fact endpoint.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Number of requests served so far.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Stop the stub without waiting for in-flight requests.
    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// A loopback URL on which nothing is listening.
///
/// # Errors
///
/// Propagates failures binding the temporary loopback socket.
pub fn unreachable_url() -> std::io::Result<Url> {
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    let addr = listener.local_addr()?;
    drop(listener);
    fact_url(addr)
}

fn fact_url(addr: SocketAddr) -> std::io::Result<Url> {
    Url::parse(&format!("http://{addr}/fact")).map_err(std::io::Error::other)
}
