//! Waiting-list routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain::models::waiting_list::{JoinQueueRequest, JoinQueueResponse};
use persistence::repositories::WaitingListRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_waiting_list_signup;

/// Join the waiting list.
///
/// POST /api/v1/joinQueue
///
/// Public, no authentication required.
pub async fn join_queue(
    State(state): State<AppState>,
    Json(request): Json<JoinQueueRequest>,
) -> Result<(StatusCode, Json<JoinQueueResponse>), ApiError> {
    join_queue_inner(state, request).await
}

/// Join the waiting list, parameters in the query string.
///
/// GET /api/v1/joinQueue
///
/// Functionally identical to the POST variant.
pub async fn join_queue_via_query(
    State(state): State<AppState>,
    Query(request): Query<JoinQueueRequest>,
) -> Result<(StatusCode, Json<JoinQueueResponse>), ApiError> {
    join_queue_inner(state, request).await
}

async fn join_queue_inner(
    state: AppState,
    request: JoinQueueRequest,
) -> Result<(StatusCode, Json<JoinQueueResponse>), ApiError> {
    request.validate()?;

    let repo = WaitingListRepository::new(state.pool.clone());
    let entry = repo
        .create_entry(&request.email, &request.phone, request.user_id)
        .await?;

    record_waiting_list_signup();
    info!(
        entry_id = entry.id,
        email = %entry.email,
        "Waiting-list signup recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(JoinQueueResponse {
            success: true,
            message: format!("{} added to the waiting list", entry.email),
        }),
    ))
}
