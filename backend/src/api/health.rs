//! Health check endpoints

use std::sync::Arc;

use axum::extract::{FromRef, State};
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::config::Config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub service: &'static str,
}

/// Health check - always returns OK if the server is running
async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check - the in-memory stores are ready as soon as the server is
async fn readyz(State(config): State<Arc<Config>>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        ready: true,
        service: config.service.as_str(),
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Arc<Config>: FromRef<S>,
{
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
