//! Route definitions for the CRM API.

pub mod activities;
pub mod auth;
pub mod dashboard;
pub mod deals;
pub mod firebase;
pub mod health;
pub mod leads;
pub mod reports;

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::errors::ErrorBody;
use crate::middleware::json_errors;
use crate::middleware::passthrough::{self, PathMatcher, PAGE_MATCHERS};
use crate::AppState;

/// Parse a raw request body as JSON. Bodies are read as bytes so a parse
/// failure flows through the handler's own error mapping rather than axum's
/// extractor rejection.
pub(crate) fn parse_json(body: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(body)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
            details: None,
        }),
    )
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/activities/bulk", post(activities::bulk))
        .route("/activities/calendar", get(activities::calendar))
        .route("/deals/bulk", post(deals::bulk))
        .route("/deals/export", get(deals::export))
        .route("/deals/forecast", get(deals::forecast))
        .route("/deals/pipeline", get(deals::pipeline))
        .route("/leads/bulk", post(leads::bulk))
        .route("/leads/export", get(leads::export))
        .route("/reports", get(reports::list).post(reports::generate))
        .route("/dashboard", get(dashboard::data))
        .route("/health", get(health::status))
        .route("/auth/logout", post(auth::logout))
        .route(
            "/auth/{*rest}",
            get(auth::handled_by_client).post(auth::handled_by_client),
        )
        .route("/firebase/init", post(firebase::init))
        .fallback(not_found)
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match frontend_url.map(HeaderValue::from_str) {
        Some(Ok(origin)) => cors.allow_origin(origin),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "FRONTEND_URL is not a valid origin; allowing any origin");
            cors.allow_origin(Any)
        }
        None => cors.allow_origin(Any),
    }
}

/// Build the full application router with middleware and shared state.
pub fn router(state: AppState) -> Result<Router, regex::Error> {
    let matcher = Arc::new(PathMatcher::new(PAGE_MATCHERS)?);

    let app = Router::new()
        .route("/health/live", get(health::live))
        .nest("/api", api_routes());

    let app = match &state.config.static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving frontend assets");
            let index = ServeFile::new(dir.join("index.html"));
            app.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => app.fallback(not_found),
    };

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(axum::middleware::from_fn(json_errors::json_errors))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_bytes))
        .layer(cors_layer(state.config.frontend_url.as_deref()))
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::disable());

    Ok(app
        .layer(axum::middleware::from_fn_with_state(
            matcher,
            passthrough::passthrough,
        ))
        .layer(layers)
        .with_state(state))
}
