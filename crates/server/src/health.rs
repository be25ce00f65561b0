use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::upstream::{get_client, ApiClient};

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub upstream: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Build the health report against a specific client.
pub async fn health_report(api: &ApiClient) -> HealthResponse {
    let upstream = match api.ping().await {
        Ok(()) => "reachable".to_string(),
        Err(e) => format!("error: {}", e.message),
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    HealthResponse {
        status: "ok".to_string(),
        upstream,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// `GET /health` handler.
pub async fn health_check() -> Json<HealthResponse> {
    Json(health_report(get_client()).await)
}
