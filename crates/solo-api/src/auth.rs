//! JWT cookie authentication.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the auth cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Token lifetime. The original issues year-long sessions.
const TOKEN_TTL_DAYS: i64 = 365;

/// Claims carried by the signed cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated email
    pub email: String,
    /// Issued at
    pub iat: i64,
    /// Expiration
    pub exp: i64,
}

/// Signs and verifies auth tokens with the configured shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for the given email.
    pub fn issue(&self, email: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token's signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;
        Ok(data.claims)
    }
}

/// Authenticated user extracted from the request's cookie jar.
///
/// Extraction fails closed: a missing or invalid cookie rejects the
/// request before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or_else(|| ApiError::unauthorized("Missing auth token"))?;

        let claims = state.keys.verify(&token)?;

        Ok(Self {
            email: claims.email,
        })
    }
}

/// Build the auth cookie.
///
/// Browsers require `SameSite=None; Secure` for cross-origin credentialed
/// requests, so production gets those attributes; development stays
/// same-site strict over plain HTTP.
pub fn auth_cookie(token: String, production: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    if production {
        cookie.set_same_site(SameSite::None);
        cookie.set_secure(true);
    } else {
        cookie.set_same_site(SameSite::Strict);
    }
    cookie
}

/// Build an immediately-expiring cookie that clears the auth token.
pub fn clear_cookie(production: bool) -> Cookie<'static> {
    let mut cookie = auth_cookie(String::new(), production);
    cookie.make_removal();
    cookie
}
