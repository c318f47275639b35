//! Authentication routes.
//!
//! Sign-in state is owned by the client SDK. The server only acknowledges
//! these calls so the frontend's auth client gets a well-formed reply.

use axum::Json;

use crate::errors::ApiResponse;

/// POST /api/auth/logout — the client discards its own session.
pub async fn logout() -> Json<ApiResponse<()>> {
    ApiResponse::success((), "Logged out successfully")
}

/// GET|POST /api/auth/{*rest} — catch-all for the client auth library.
pub async fn handled_by_client() -> Json<ApiResponse<()>> {
    ApiResponse::success((), "Authentication is handled by the client SDK")
}
