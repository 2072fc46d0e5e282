//! STEP and JSON download endpoints.

use axum::http::{StatusCode, header};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_roller_step_attachment() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/export/step",
            Some(json!({ "length": 3000, "rollerSpacing": 150 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(header::CONTENT_TYPE), "application/step");
    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        "attachment; filename=\"conveyor.step\""
    );
    assert!(response.text.starts_with("ISO-10303-21;\nHEADER;\n"));
    assert!(response.text.contains("/* Length: 3000 mm */"));
    assert!(response.text.contains("/* Number of Rollers: 20 */"));
    assert!(response.text.contains("#119=CARTESIAN_POINT('Roller20',"));
    assert!(response.text.ends_with("END-ISO-10303-21;"));
}

#[tokio::test]
async fn test_overhead_step_attachment() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/export/overhead-step",
            Some(json!({ "trackLength": 8000, "includeCurves": true })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        "attachment; filename=\"overhead-conveyor.step\""
    );
    assert!(response.text.contains("/* Track Length: 8000 mm */"));
}

#[tokio::test]
async fn test_step_rejects_zero_spacing() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/export/step",
            Some(json!({ "rollerSpacing": 0 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_step_rejects_oversized_configurations() {
    let app = TestApp::new().await;

    let rollers = app
        .request(
            "POST",
            "/api/export/step",
            Some(json!({ "length": 1e12, "rollerSpacing": 1 })),
        )
        .await;
    assert_eq!(rollers.status, StatusCode::BAD_REQUEST);
    assert_eq!(rollers.body["error"], "VALIDATION_ERROR");

    let carriers = app
        .request(
            "POST",
            "/api/export/overhead-step",
            Some(json!({ "numCarriers": 2147483647 })),
        )
        .await;
    assert_eq!(carriers.status, StatusCode::BAD_REQUEST);

    let drives = app
        .request(
            "POST",
            "/api/export/overhead-step",
            Some(json!({ "driveUnits": 2147483647 })),
        )
        .await;
    assert_eq!(drives.status, StatusCode::BAD_REQUEST);
    assert_eq!(drives.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_json_dump_of_overhead_configuration() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/export/json",
            Some(json!({
                "conveyorType": "overhead",
                "overheadConfiguration": { "trackLength": 12000, "numCarriers": 12 }
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        "attachment; filename=\"overhead-conveyor-config.json\""
    );
    assert_eq!(response.body["type"], "overhead");
    assert_eq!(response.body["configuration"]["trackLength"], 12000.0);
    assert!(response.body["exportedAt"].is_string());
    assert!(response.body["specifications"].is_object());
}

#[tokio::test]
async fn test_json_dump_defaults_missing_configuration() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/export/json", Some(json!({ "conveyorType": "roller" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["type"], "roller");
    assert_eq!(response.body["configuration"]["length"], 2000.0);
}
