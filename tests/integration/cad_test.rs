//! CAD drawing upload endpoint.

use axum::body::Body;
use axum::http::StatusCode;
use dxf::entities::{Arc, Entity, EntityType, Line};
use dxf::{Drawing, Point};

use crate::helpers::TestApp;

/// A 2500 mm straight run into a 600 mm radius quarter bend.
fn layout_dxf() -> Vec<u8> {
    let mut drawing = Drawing::new();
    drawing.add_entity(Entity::new(EntityType::Line(Line::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(2500.0, 0.0, 0.0),
    ))));
    drawing.add_entity(Entity::new(EntityType::Arc(Arc::new(
        Point::new(2500.0, 600.0, 0.0),
        600.0,
        270.0,
        360.0,
    ))));
    let mut bytes = Vec::new();
    drawing.save(&mut bytes).expect("save dxf");
    bytes
}

#[tokio::test]
async fn test_import_dxf_layout() {
    let app = TestApp::new().await;

    let response = app.upload_cad("layout.dxf", &layout_dxf()).await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    let body = &response.body;
    assert_eq!(body["success"], true);
    assert_eq!(body["fileName"], "layout.dxf");
    assert_eq!(body["entities"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["trackSections"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["totalTrackLength"], 2500.0);
    assert_eq!(body["curveCount"], 1);
    assert!(body["meshData"]["vertices"].as_array().is_some_and(|v| !v.is_empty()));

    let suggested = &body["suggestedConfig"];
    assert_eq!(suggested["includeCurves"], true);
    assert_eq!(suggested["curveRadius"], 600.0);
    assert_eq!(suggested["suggestedProfile"], "24.000");
}

#[tokio::test]
async fn test_unsupported_extension_is_rejected() {
    let app = TestApp::new().await;

    let response = app.upload_cad("model.step", b"ISO-10303-21;").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(
        response.body["message"],
        "Unsupported file format: .step. Supported formats: .dwg, .dxf"
    );
}

#[tokio::test]
async fn test_dwg_reports_parse_failure() {
    let app = TestApp::new().await;

    let response = app.upload_cad("plant.DWG", b"AC1032").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.body["error"].as_str().expect("error text");
    assert!(error.contains("DWG parsing is not supported"));
    assert!(response.body.get("message").is_none());
}

#[tokio::test]
async fn test_non_multipart_body_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .send("POST", "/api/import/cad", "application/json", Body::from("{}"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Expected form data");
}

#[tokio::test]
async fn test_multipart_without_file_is_rejected() {
    let app = TestApp::new().await;
    let body = "--b\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--b--\r\n";

    let response = app
        .send(
            "POST",
            "/api/import/cad",
            "multipart/form-data; boundary=b",
            Body::from(body),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "No file uploaded");
}
