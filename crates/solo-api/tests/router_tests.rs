//! Router integration tests.
//!
//! These drive the real router through `tower::ServiceExt::oneshot`. The
//! store handle is built lazily, so tests that never reach the database
//! run without one; the full round-trip test is ignored unless a local
//! MongoDB is available.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use solo_api::{create_router, ApiConfig, AppState};
use solo_db::MongoStore;

fn test_config() -> ApiConfig {
    ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        jwt_secret: "test-secret".to_string(),
        max_body_size: 1024 * 1024,
        environment: "development".to_string(),
    }
}

async fn test_state() -> AppState {
    let store = MongoStore::with_uri("mongodb://localhost:27017", "solo-db-test")
        .await
        .expect("lazy store handle");
    AppState::with_store(test_config(), store)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn greeting_is_preserved() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello from SoloSphere Server....");
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("X-Request-ID"));
}

#[tokio::test]
async fn private_jobs_require_a_token() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/jobs/alice@example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_string(response).await.contains("detail"));
}

#[tokio::test]
async fn private_jobs_reject_a_mismatched_claim() {
    let state = test_state().await;
    let token = state.keys.issue("bob@example.com").unwrap();
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/jobs/alice@example.com")
                .header(header::COOKIE, format!("token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn private_bids_require_a_token() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/bids/alice@example.com?buyer=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_job_id_is_a_client_error() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/job/not-an-object-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/jobs")
                .header("Origin", "http://localhost:5173")
                .header("Access-Control-Request-Method", "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response.status() == StatusCode::OK || response.status() == StatusCode::NO_CONTENT
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn jwt_issue_sets_the_auth_cookie() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({ "email": "alice@example.com" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("Set-Cookie header");
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));

    assert_eq!(body_string(response).await, r#"{"success":true}"#);
}

#[tokio::test]
async fn jwt_logout_clears_the_cookie() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/jwt-logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("Set-Cookie header");
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
}

/// Full job/bid round trip against a local MongoDB.
#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn duplicate_bid_is_rejected_and_counter_bumped_once() {
    let app = create_router(test_state().await);
    let bidder = format!("{}@example.com", uuid::Uuid::new_v4());

    let job_body = serde_json::json!({
        "title": "Engineer Needed",
        "category": "Web Development",
        "deadline": "2026-09-30",
        "min_price": 100.0,
        "max_price": 250.0,
        "description": "Build a landing page",
        "buyer": { "email": "buyer@example.com" }
    });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add-job")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(job_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let inserted: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    let job_id = inserted["insertedId"].as_str().unwrap().to_string();

    let bid_body = serde_json::json!({
        "jobId": job_id,
        "email": bidder,
        "buyer": "buyer@example.com",
        "price": 150.0,
        "deadline": "2026-10-15",
        "status": "Pending"
    });

    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add-bids")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(bid_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add-bids")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(bid_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    // The counter reflects exactly one accepted bid
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/job/{}", job_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let job: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(job["bid_count"].as_i64(), Some(1));
}
