//! Axum HTTP API server for the SoloSphere job marketplace.
//!
//! This crate provides:
//! - REST endpoints for jobs, bids, and auth cookies
//! - JWT cookie verification with fail-closed extraction
//! - CORS, request logging, and body-size limits

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
