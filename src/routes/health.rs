//! Health check endpoints for liveness and status probes.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::firebase::FirebaseStatus;
use crate::AppState;

/// Process status report.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub firebase: FirebaseStatus,
}

/// Liveness probe — always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// GET /api/health — never fails; Firebase keys are checked on every call.
pub async fn status(State(state): State<AppState>) -> Json<HealthStatus> {
    let now = Utc::now();
    let uptime_seconds = (now - state.started_at).num_seconds().max(0) as u64;

    Json(HealthStatus {
        status: "healthy",
        timestamp: now,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds,
        firebase: FirebaseStatus::probe(),
    })
}
