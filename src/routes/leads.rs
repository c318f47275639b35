//! Lead routes: bulk operations and export.

use axum::{body::Bytes, Json};
use serde_json::Value;

use crate::errors::{ApiResponse, AppError, OrInternal};
use crate::models::bulk::BulkResult;
use crate::routes::parse_json;

/// POST /api/leads/bulk
pub async fn bulk(body: Bytes) -> Result<Json<ApiResponse<BulkResult>>, AppError> {
    let _payload = parse_json(&body).or_internal("Failed to process bulk leads")?;
    Ok(ApiResponse::success(
        BulkResult::empty(),
        "Bulk lead operation completed",
    ))
}

/// GET /api/leads/export
pub async fn export() -> Json<ApiResponse<Vec<Value>>> {
    ApiResponse::success(Vec::new(), "Leads exported")
}
