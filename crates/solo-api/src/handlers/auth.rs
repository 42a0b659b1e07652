//! Token issue and logout handlers.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{auth_cookie, clear_cookie};
use crate::error::ApiResult;
use crate::state::AppState;

/// Body of a token request. Clients send their whole profile; only the
/// email lands in the claims, the rest is ignored.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// POST /jwt
///
/// Issue the auth cookie for the given email.
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<TokenRequest>,
) -> ApiResult<(CookieJar, Json<SuccessResponse>)> {
    info!(email = %payload.email, "issue_token");

    let token = state.keys.issue(&payload.email)?;
    let jar = jar.add(auth_cookie(token, state.config.is_production()));

    Ok((jar, Json(SuccessResponse { success: true })))
}

/// GET /jwt-logout
///
/// Clear the auth cookie immediately.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<SuccessResponse>)> {
    let jar = jar.add(clear_cookie(state.config.is_production()));
    Ok((jar, Json(SuccessResponse { success: true })))
}
