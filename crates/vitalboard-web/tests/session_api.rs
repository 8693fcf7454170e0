//! Integration tests for the session API endpoints

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use vitalboard_types::CurrentUser;
use vitalboard_web::SessionStore;

fn signed_in_store() -> Arc<SessionStore> {
    Arc::new(SessionStore::signed_in(CurrentUser {
        display_name: Some("Asha".to_string()),
        email: None,
    }))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = vitalboard_web::create_router(signed_in_store());

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["signedIn"], true);
}

#[tokio::test]
async fn test_session_returns_signed_in_user() {
    let router = vitalboard_web::create_router(signed_in_store());

    let request = Request::builder()
        .uri("/api/session")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // camelCase wire format; missing email travels as null, not an error
    assert_eq!(json["displayName"], "Asha");
    assert!(json["email"].is_null());
}

#[tokio::test]
async fn test_session_null_when_signed_out() {
    let router = vitalboard_web::create_router(Arc::new(SessionStore::new()));

    let request = Request::builder()
        .uri("/api/session")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.is_null());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let store = signed_in_store();
    let router = vitalboard_web::create_router(store.clone());

    let logout = Request::builder()
        .method(Method::POST)
        .uri("/api/logout")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(logout).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(store.current().is_none());

    // Subsequent session lookups see the cleared state
    let session = Request::builder()
        .uri("/api/session")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(session).await.unwrap();
    assert!(body_json(response).await.is_null());
}

#[tokio::test]
async fn test_index_serves_theme_tokens() {
    let router = vitalboard_web::create_router(Arc::new(SessionStore::new()));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("--accent:"));
    assert!(html.contains(".sidebar"));
}
