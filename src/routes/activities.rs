//! Activity routes: bulk operations and the calendar view.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query},
    Json,
};

use crate::errors::{ApiResponse, AppError, OrInternal};
use crate::models::activity::CalendarRange;
use crate::models::bulk::BulkResult;
use crate::routes::parse_json;

/// POST /api/activities/bulk — accept a bulk payload; nothing is applied yet.
pub async fn bulk(body: Bytes) -> Result<Json<ApiResponse<BulkResult>>, AppError> {
    let _payload = parse_json(&body).or_internal("Failed to process bulk activities")?;
    Ok(ApiResponse::success(
        BulkResult::empty(),
        "Bulk activity operation completed",
    ))
}

/// GET /api/activities/calendar — activities within an optional date window.
///
/// The window is only logged; a malformed query still gets the listing.
pub async fn calendar(
    range: Result<Query<CalendarRange>, QueryRejection>,
) -> Json<ApiResponse<Vec<serde_json::Value>>> {
    match range {
        Ok(Query(range)) => {
            tracing::debug!(start = ?range.start, end = ?range.end, "Calendar activities requested");
        }
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unparseable calendar query");
        }
    }
    ApiResponse::success(Vec::new(), "Calendar activities retrieved")
}
