//! Keeps framework-generated API errors inside the `{ "error": ... }` envelope.
//!
//! Axum and tower-http answer some failures themselves before a handler runs:
//! an oversized body is a plain-text 413 and a wrong verb is an empty 405.
//! For `/api` paths those are rewritten into [`ErrorBody`] JSON.

use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::ErrorBody;

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

pub async fn json_errors(request: Request, next: Next) -> Response {
    let api = is_api_path(request.uri().path());
    let response = next.run(request).await;
    if !api || is_json(&response) {
        return response;
    }

    let status = response.status();
    let message = match status {
        StatusCode::PAYLOAD_TOO_LARGE => "Request body too large",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        _ => return response,
    };
    let allow: Option<HeaderValue> = response.headers().get(header::ALLOW).cloned();

    let mut rewritten = (
        status,
        Json(ErrorBody {
            error: message.to_string(),
            details: None,
        }),
    )
        .into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}
