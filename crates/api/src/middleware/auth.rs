//! Authentication middleware.
//!
//! Provides middleware for requiring API key authentication on routes.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app::AppState;
use crate::extractors::ApiKeyAuth;

/// Middleware that requires API key authentication.
///
/// This middleware validates the `X-API-Key` header and rejects requests
/// without a valid API key. Authenticated key information is stored in
/// request extensions for use by downstream handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let api_key = req.headers().get("X-API-Key").and_then(|v| v.to_str().ok());

    let api_key = match api_key {
        Some(key) => key.to_string(),
        None => {
            return unauthorized_response("Invalid or missing API key");
        }
    };

    match ApiKeyAuth::validate(&state.config.security, &api_key) {
        Ok(auth) => {
            req.extensions_mut().insert(auth);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}

/// Helper to create unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_response() {
        let response = unauthorized_response("Test message");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
