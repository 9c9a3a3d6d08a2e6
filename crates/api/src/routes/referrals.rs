//! Referral routes: granting, listing, redeeming and querying tokens.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::referral::{
    CheckTokensResponse, GrantRequest, GrantResponse, IsReferredResponse, ReferralStatus,
    StatusFilter, TokenSummary, VerifyResponse,
};
use persistence::entities::ReferralStatusDb;
use persistence::repositories::ReferralRepository;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiKeyAuth;
use crate::middleware::metrics::{record_token_granted, record_token_redeemed};

/// Grant a new referral token for a sponsor.
///
/// POST /api/v1/grant
///
/// Requires API key authentication.
pub async fn grant(
    State(state): State<AppState>,
    auth: ApiKeyAuth,
    Json(request): Json<GrantRequest>,
) -> Result<(StatusCode, Json<GrantResponse>), ApiError> {
    grant_inner(state, auth, request).await
}

/// Grant a new referral token for a sponsor, parameters in the query string.
///
/// GET /api/v1/grant
///
/// Functionally identical to the POST variant; kept for callers that cannot
/// send a body.
pub async fn grant_via_query(
    State(state): State<AppState>,
    auth: ApiKeyAuth,
    Query(request): Query<GrantRequest>,
) -> Result<(StatusCode, Json<GrantResponse>), ApiError> {
    grant_inner(state, auth, request).await
}

async fn grant_inner(
    state: AppState,
    auth: ApiKeyAuth,
    request: GrantRequest,
) -> Result<(StatusCode, Json<GrantResponse>), ApiError> {
    request.validate()?;

    let repo = ReferralRepository::new(state.pool.clone());

    // Uniqueness rests on UUID v4 randomness; the unique constraint on
    // referrals.token surfaces a collision as a 409.
    let token = Uuid::new_v4();
    let referral = repo.create_referral(request.sponsor_id, token).await?;

    record_token_granted();
    info!(
        sponsor_id = request.sponsor_id,
        token = %referral.token,
        key_prefix = %auth.key_prefix,
        "Referral token granted"
    );

    Ok((
        StatusCode::CREATED,
        Json(GrantResponse {
            token: referral.token,
            status: referral.status.into(),
            expiry: request.expiry,
        }),
    ))
}

/// Query parameters for the token listing.
#[derive(Debug, Deserialize)]
pub struct CheckTokensQuery {
    pub status: Option<String>,
}

/// List a sponsor's referral tokens.
///
/// GET /api/v1/checkTokens/:sponsor_id?status=available|used|all
///
/// Requires API key authentication. The sponsor is taken from the URL: the
/// API key identifies the calling service, not an end user, so there is no
/// caller identity to bind the path parameter to.
pub async fn check_tokens(
    State(state): State<AppState>,
    _auth: ApiKeyAuth,
    Path(sponsor_id): Path<i64>,
    Query(query): Query<CheckTokensQuery>,
) -> Result<Json<CheckTokensResponse>, ApiError> {
    let filter = StatusFilter::parse(query.status.as_deref())
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let status_db: Option<ReferralStatusDb> = match filter {
        StatusFilter::All => None,
        StatusFilter::Only(status) => Some(status.into()),
    };

    let repo = ReferralRepository::new(state.pool.clone());
    let rows = repo.list_sponsor_tokens(sponsor_id, status_db).await?;

    let tokens: Vec<TokenSummary> = rows
        .into_iter()
        .map(|row| TokenSummary {
            token: row.token,
            created: row.created_at.date_naive().to_string(),
            username: row.username,
            status: row.status.into(),
        })
        .collect();

    info!(
        sponsor_id = sponsor_id,
        token_count = tokens.len(),
        "Listed sponsor tokens"
    );

    Ok(Json(CheckTokensResponse { tokens }))
}

/// Redeem a referral token for a new user.
///
/// GET /api/v1/verify/:user_id/:token
///
/// Requires API key authentication. The `available -> used` transition is a
/// single conditional UPDATE; of two concurrent redemption attempts for the
/// same token at most one can succeed.
pub async fn verify(
    State(state): State<AppState>,
    _auth: ApiKeyAuth,
    Path((user_id, token)): Path<(i64, Uuid)>,
) -> Result<Json<VerifyResponse>, ApiError> {
    if user_id < 1 {
        return Err(ApiError::Validation(
            "user_id must be a positive user id".to_string(),
        ));
    }

    let repo = ReferralRepository::new(state.pool.clone());

    match repo.redeem(token, user_id).await? {
        Some(referral) => {
            record_token_redeemed();
            info!(
                token = %token,
                user_id = user_id,
                sponsor_id = referral.sponsor_id,
                "Referral token redeemed"
            );

            Ok(Json(VerifyResponse {
                verified: true,
                sponsor_id: referral.sponsor_id,
                updated: referral.updated_at,
            }))
        }
        None => {
            // The guard did not match; look the token up to pick the error.
            match repo.find_by_token(token).await? {
                None => Err(ApiError::NotFound("Invalid referral token".to_string())),
                Some(referral) => {
                    let status: ReferralStatus = referral.status.into();
                    Err(ApiError::Conflict(format!("Referral already {}", status)))
                }
            }
        }
    }
}

/// Check whether a user was referred into the system.
///
/// GET /api/v1/isReferred/:user_id
///
/// Public, no authentication required.
pub async fn is_referred(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<IsReferredResponse>, ApiError> {
    let repo = ReferralRepository::new(state.pool.clone());
    let referred = repo.is_referred(user_id).await?;

    Ok(Json(IsReferredResponse { referred }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_created_date_truncation() {
        let created_at = Utc.with_ymd_and_hms(2026, 8, 26, 14, 33, 5).unwrap();
        assert_eq!(created_at.date_naive().to_string(), "2026-08-26");
    }

    #[test]
    fn test_status_filter_maps_to_db_filter() {
        let filter = StatusFilter::parse(Some("used")).unwrap();
        let status_db: Option<ReferralStatusDb> = match filter {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(status.into()),
        };
        assert_eq!(status_db, Some(ReferralStatusDb::Used));
    }

    #[test]
    fn test_already_used_error_message() {
        let status: ReferralStatus = ReferralStatusDb::Used.into();
        assert_eq!(
            format!("Referral already {}", status),
            "Referral already used"
        );
    }
}
