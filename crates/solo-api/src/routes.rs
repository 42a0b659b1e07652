//! API routes.
//!
//! Paths are the original public contract and must not change.

use axum::middleware;
use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::auth::{issue_token, logout};
use crate::handlers::bids::{add_bid, list_bids, update_bid_status};
use crate::handlers::health::{greeting, health};
use crate::handlers::jobs::{
    add_job, all_jobs, delete_job, get_job, list_jobs, list_jobs_by_buyer, update_job,
};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let job_routes = Router::new()
        .route("/jobs", get(list_jobs))
        // Private listing, gated on the auth cookie
        .route("/jobs/:email", get(list_jobs_by_buyer))
        .route("/job/:id", get(get_job))
        .route("/job/:id", delete(delete_job))
        .route("/add-job", post(add_job))
        .route("/update-job/:id", put(update_job))
        // Public feed with filter/search/sort
        .route("/all-jobs", get(all_jobs));

    let bid_routes = Router::new()
        .route("/add-bids", post(add_bid))
        // Private listing, gated on the auth cookie
        .route("/bids/:email", get(list_bids))
        .route("/bid-state-update/:id", patch(update_bid_status));

    let auth_routes = Router::new()
        .route("/jwt", post(issue_token))
        .route("/jwt-logout", get(logout));

    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health))
        .merge(job_routes)
        .merge(bid_routes)
        .merge(auth_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
