//! API key authentication extractor.
//!
//! Provides an Axum extractor for validating API keys from requests.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::app::AppState;
use crate::config::SecurityConfig;
use crate::error::ApiError;
use shared::crypto::{extract_key_prefix, sha256_hex};

/// Authenticated API key information.
///
/// This extractor validates the `X-API-Key` header against the configured
/// key digests and provides access to the authenticated key's details.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    /// Key prefix for identification (e.g., "rf_aBcDe").
    pub key_prefix: String,
}

impl ApiKeyAuth {
    /// Validates an API key and returns authentication info.
    ///
    /// This is the core authentication logic, extracted for testability.
    /// Keys must carry the `rf_` prefix; their SHA-256 hex digest must be
    /// listed in `security.api_keys`.
    pub fn validate(security: &SecurityConfig, api_key: &str) -> Result<Self, ApiError> {
        // Validate minimum key length (rf_ prefix + 8 chars minimum)
        let prefix = extract_key_prefix(api_key).ok_or_else(|| {
            ApiError::Unauthorized("Invalid or missing API key".to_string())
        })?;

        let key_hash = sha256_hex(api_key);
        if !security.api_keys.iter().any(|h| h == &key_hash) {
            return Err(ApiError::Unauthorized(
                "Invalid or missing API key".to_string(),
            ));
        }

        Ok(ApiKeyAuth {
            key_prefix: format!("rf_{}", prefix),
        })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for ApiKeyAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Auth info may already be present from the require_auth middleware
        if let Some(auth) = parts.extensions.get::<ApiKeyAuth>() {
            return Ok(auth.clone());
        }

        let api_key = parts
            .headers
            .get("X-API-Key")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Invalid or missing API key".to_string()))?;

        Self::validate(&state.config.security, api_key)
    }
}
