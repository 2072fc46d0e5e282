//! Health endpoint.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_healthy() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert!(response.body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/nope", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
