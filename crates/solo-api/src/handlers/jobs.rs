//! Job API handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use solo_db::{parse_object_id, JobSearch, SortOrder};
use solo_models::{Job, JobPayload, JobUpdate};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Insert result echoed to the client.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub inserted_id: String,
}

impl InsertResponse {
    pub fn from_result(result: mongodb::results::InsertOneResult) -> Self {
        Self {
            inserted_id: result
                .inserted_id
                .as_object_id()
                .map(|id| id.to_hex())
                .unwrap_or_default(),
        }
    }
}

/// Update result echoed to the client.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

impl UpdateResponse {
    pub fn from_result(result: mongodb::results::UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result
                .upserted_id
                .and_then(|id| id.as_object_id())
                .map(|id| id.to_hex()),
        }
    }
}

/// Delete result echoed to the client.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_count: u64,
}

/// GET /jobs
///
/// Every job, unfiltered.
pub async fn list_jobs(State(state): State<AppState>) -> ApiResult<Json<Vec<Job>>> {
    Ok(Json(state.jobs.list_all().await?))
}

/// GET /jobs/:email
///
/// Jobs posted by a buyer. Gated: the path email must match the token
/// claim.
pub async fn list_jobs_by_buyer(
    State(state): State<AppState>,
    Path(email): Path<String>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Job>>> {
    if user.email != email {
        return Err(ApiError::forbidden("Access denied"));
    }

    Ok(Json(state.jobs.list_by_buyer(&email).await?))
}

/// GET /job/:id
///
/// One job, or `null` when nothing matches.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<Job>>> {
    let id = parse_object_id(&id)?;
    Ok(Json(state.jobs.get(id).await?))
}

/// POST /add-job
pub async fn add_job(
    State(state): State<AppState>,
    Json(payload): Json<JobPayload>,
) -> ApiResult<Json<InsertResponse>> {
    info!(title = %payload.title, buyer = %payload.buyer.email, "add_job");

    let result = state.jobs.insert(payload).await?;
    Ok(Json(InsertResponse::from_result(result)))
}

/// PUT /update-job/:id
///
/// Merge-set of the present fields; creates the document when nothing
/// matches.
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<JobUpdate>,
) -> ApiResult<Json<UpdateResponse>> {
    let id = parse_object_id(&id)?;
    let result = state.jobs.update(id, &patch).await?;
    Ok(Json(UpdateResponse::from_result(result)))
}

/// DELETE /job/:id
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_object_id(&id)?;
    let result = state.jobs.delete(id).await?;
    Ok(Json(DeleteResponse {
        deleted_count: result.deleted_count,
    }))
}

/// Query parameters for the public job feed.
#[derive(Debug, Default, Deserialize)]
pub struct AllJobsQuery {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl AllJobsQuery {
    /// Empty parameters count as absent, matching how the original
    /// treated empty query strings.
    fn into_search(self) -> JobSearch {
        JobSearch {
            category: self.filter.filter(|s| !s.is_empty()),
            search: self.search.filter(|s| !s.is_empty()),
            sort: self.sort.as_deref().and_then(SortOrder::from_param),
        }
    }
}

/// GET /all-jobs
///
/// Public feed with optional category filter, title search, and deadline
/// sort.
pub async fn all_jobs(
    State(state): State<AppState>,
    Query(params): Query<AllJobsQuery>,
) -> ApiResult<Json<Vec<Job>>> {
    let query = params.into_search();
    Ok(Json(state.jobs.search(&query).await?))
}
