//! Dashboard route: aggregated data for the overview page.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::{AppError, OrInternal};
use crate::AppState;

/// GET /api/dashboard — the reporting service's payload, returned verbatim.
pub async fn data(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let data = state
        .reporting
        .dashboard_data()
        .await
        .or_internal("Failed to fetch dashboard data")?;
    Ok(Json(data))
}
