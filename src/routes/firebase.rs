//! Firebase bootstrap route used by the frontend on first load.

use axum::{body::Bytes, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{AppError, OrInternal};
use crate::routes::parse_json;
use crate::services::firebase::{FirebaseStatus, InitAction};

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub success: bool,
    pub message: String,
    pub configured: bool,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/firebase/init
pub async fn init(body: Bytes) -> Result<Json<InitResponse>, AppError> {
    let body = parse_json(&body).or_internal_with_details("Failed to initialize Firebase")?;

    match InitAction::from_body(&body) {
        Some(InitAction::TestConnection) => {
            let status = FirebaseStatus::probe();
            tracing::info!(configured = status.configured, "Firebase connection test");
            Ok(Json(InitResponse {
                success: true,
                message: "Firebase connection test successful".to_string(),
                configured: status.configured,
                timestamp: Utc::now(),
            }))
        }
        None => Err(AppError::BadRequest("Invalid action".to_string())),
    }
}
