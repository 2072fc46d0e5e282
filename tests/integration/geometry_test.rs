//! Parametric model endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_roller_geometry() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/geometry/roller",
            Some(json!({ "length": 2000, "rollerSpacing": 100 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["specifications"]["rollerCount"], 20);
    assert_eq!(response.body["scene"]["kind"], "group");
    assert!(response.body["scene"]["children"].as_array().is_some_and(|c| !c.is_empty()));
    assert!(response.body["summary"].as_str().is_some_and(|s| !s.is_empty()));
}

#[tokio::test]
async fn test_overhead_geometry() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/geometry/overhead",
            Some(json!({ "trackLength": 10000, "includeCurves": true, "curveRadius": 500 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let straight = response.body["specifications"]["straightRunLengthMm"]
        .as_f64()
        .expect("straight run");
    let expected = (10000.0 - std::f64::consts::PI * 500.0) / 2.0;
    assert!((straight - expected).abs() < 1e-6);
}

#[tokio::test]
async fn test_geometry_rejects_invalid_configuration() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/geometry/overhead",
            Some(json!({ "driveUnits": 0 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_geometry_rejects_unbounded_part_counts() {
    let app = TestApp::new().await;

    let roller = app
        .request(
            "POST",
            "/api/geometry/roller",
            Some(json!({ "length": 1e12, "rollerSpacing": 1 })),
        )
        .await;
    assert_eq!(roller.status, StatusCode::BAD_REQUEST);
    assert_eq!(roller.body["error"], "VALIDATION_ERROR");

    let overhead = app
        .request(
            "POST",
            "/api/geometry/overhead",
            Some(json!({ "driveUnits": 101 })),
        )
        .await;
    assert_eq!(overhead.status, StatusCode::BAD_REQUEST);
    assert_eq!(overhead.body["error"], "VALIDATION_ERROR");
}
