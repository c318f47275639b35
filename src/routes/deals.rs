//! Deal routes: bulk operations, export, forecast, and pipeline.

use axum::{body::Bytes, Json};
use serde_json::Value;

use crate::errors::{ApiResponse, AppError, OrInternal};
use crate::models::bulk::BulkResult;
use crate::models::deal::{Forecast, Pipeline};
use crate::routes::parse_json;

/// POST /api/deals/bulk
pub async fn bulk(body: Bytes) -> Result<Json<ApiResponse<BulkResult>>, AppError> {
    let _payload = parse_json(&body).or_internal("Failed to process bulk deals")?;
    Ok(ApiResponse::success(
        BulkResult::empty(),
        "Bulk deal operation completed",
    ))
}

/// GET /api/deals/export
pub async fn export() -> Json<ApiResponse<Vec<Value>>> {
    ApiResponse::success(Vec::new(), "Deals exported")
}

/// GET /api/deals/forecast
pub async fn forecast() -> Json<ApiResponse<Forecast>> {
    ApiResponse::success(Forecast::default(), "Deal forecast retrieved")
}

/// GET /api/deals/pipeline
pub async fn pipeline() -> Json<ApiResponse<Pipeline>> {
    ApiResponse::success(Pipeline::default(), "Deal pipeline retrieved")
}
