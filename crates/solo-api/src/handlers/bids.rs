//! Bid API handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use solo_db::parse_object_id;
use solo_models::{Bid, BidPayload, StatusUpdate};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::jobs::{InsertResponse, UpdateResponse};
use crate::state::AppState;

/// POST /add-bids
///
/// Rejected with 400 when the bidder already has a bid on the job; a
/// successful insert bumps the job's bid counter.
pub async fn add_bid(
    State(state): State<AppState>,
    Json(payload): Json<BidPayload>,
) -> ApiResult<Json<InsertResponse>> {
    info!(job_id = %payload.job_id, email = %payload.email, "add_bid");

    let result = state.bids.insert(payload).await?;
    Ok(Json(InsertResponse::from_result(result)))
}

/// Query parameters for the bid listing.
#[derive(Debug, Deserialize)]
pub struct ListBidsQuery {
    /// When true, list bids placed against the party's own jobs instead
    /// of the bids they placed themselves.
    #[serde(default)]
    pub buyer: bool,
}

/// GET /bids/:email
///
/// Bids involving a party. Gated: the path email must match the token
/// claim.
pub async fn list_bids(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Query(params): Query<ListBidsQuery>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Bid>>> {
    if user.email != email {
        return Err(ApiError::forbidden("Access denied"));
    }

    Ok(Json(state.bids.list_for_party(&email, params.buyer).await?))
}

/// PATCH /bid-state-update/:id
///
/// Overwrite a bid's status. No transition rules, no caller check.
pub async fn update_bid_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> ApiResult<Json<UpdateResponse>> {
    let id = parse_object_id(&id)?;
    let result = state.bids.update_status(id, update.status).await?;
    Ok(Json(UpdateResponse::from_result(result)))
}
