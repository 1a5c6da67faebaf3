//! # franq-api — Axum API Service for the Franchise Network
//!
//! CRUD over three related entities backed by SQLite, with composed detail
//! views and a per-branch max-stock projection.
//!
//! ## API Surface
//!
//! | Prefix                      | Module                  | Domain                  |
//! |-----------------------------|-------------------------|-------------------------|
//! | `/api/franchises/*`         | [`routes::franchises`]  | Franchise CRUD + views  |
//! | `/api/branches/*`           | [`routes::branches`]    | Branch CRUD + views     |
//! | `/api/products/*`           | [`routes::products`]    | Product CRUD + stock    |
//! | `/openapi.json`             | [`openapi`]             | Generated spec          |
//! | `/health/*`                 | here                    | Probes (no JSON body)   |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → TimeoutLayer → DefaultBodyLimit → Handler
//! ```
//!
//! The timeout layer is the request-scoped deadline for every operation;
//! nothing below it carries its own timeout or retry.

pub mod db;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    let api = Router::new()
        .merge(routes::franchises::router())
        .merge(routes::branches::router())
        .merge(routes::products::router())
        .merge(openapi::router())
        // Body size limit: 2 MiB. These payloads are a handful of scalar
        // fields; anything larger is not a legitimate request.
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http());

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api).with_state(state)
}

/// Liveness probe: 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: pings the database through the pool.
///
/// Returns 200 "ready" or 503 with a diagnostic message.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.pool).await {
        tracing::warn!("database health check failed: {e}");
        return (StatusCode::SERVICE_UNAVAILABLE, "database unreachable").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
