//! CSV import and export endpoints.

use axum::body::Body;
use axum::http::{StatusCode, header};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_import_overhead_rows() {
    let app = TestApp::new().await;
    let csv = "name,trackLength,heightFromFloor,numCarriers,includeCurves,driveUnits\n\
               Line A,12000,2800,12,TRUE,2\n\
               Line B,abc,,5.7,0,1\n";

    let response = app
        .send("POST", "/api/csv/import", "text/csv", Body::from(csv))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["conveyorType"], "overhead");
    let rows = response.body["configurations"].as_array().expect("rows");
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["name"], "Line A");
    assert_eq!(rows[0]["trackLength"], 12000.0);
    assert_eq!(rows[0]["includeCurves"], true);
    assert_eq!(rows[0]["driveUnits"], 2);

    // Unparseable and empty cells fall back to defaults; integers truncate.
    assert_eq!(rows[1]["trackLength"], 10000.0);
    assert_eq!(rows[1]["heightFromFloor"], 3000.0);
    assert_eq!(rows[1]["numCarriers"], 5);
    assert_eq!(rows[1]["includeCurves"], false);
}

#[tokio::test]
async fn test_import_roller_rows() {
    let app = TestApp::new().await;
    let csv = "name,length,width,driveType\nBed,4000,800,gravity\n";

    let response = app
        .send("POST", "/api/csv/import", "text/csv", Body::from(csv))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["conveyorType"], "roller");
    let row = &response.body["configurations"][0];
    assert_eq!(row["length"], 4000.0);
    assert_eq!(row["driveType"], "gravity");
}

#[tokio::test]
async fn test_export_roller_csv() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/csv/export",
            Some(json!({ "conveyorType": "roller", "length": 2500 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(header::CONTENT_TYPE), "text/csv");
    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        "attachment; filename=\"conveyor-config.csv\""
    );
    let mut lines = response.text.lines();
    assert_eq!(
        lines.next(),
        Some("name,length,width,height,rollerDiameter,rollerSpacing,loadCapacity,driveType")
    );
    assert_eq!(lines.next(), Some("Current,2500,600,750,50,100,300,powered"));
}

#[tokio::test]
async fn test_exported_csv_imports_back() {
    let app = TestApp::new().await;
    let configuration = json!({
        "conveyorType": "overhead",
        "trackLength": 15000,
        "heightFromFloor": 3500,
        "carrierSpacing": 750,
        "loadPerCarrier": 40,
        "numCarriers": 20,
        "includeCurves": true,
        "curveRadius": 800,
        "inclineAngle": 5,
        "declineAngle": 0,
        "driveUnits": 2
    });

    let exported = app
        .request("POST", "/api/csv/export", Some(configuration))
        .await;
    let imported = app
        .send("POST", "/api/csv/import", "text/csv", Body::from(exported.text))
        .await;

    let row = &imported.body["configurations"][0];
    assert_eq!(row["name"], "Current");
    assert_eq!(row["trackLength"], 15000.0);
    assert_eq!(row["carrierSpacing"], 750.0);
    assert_eq!(row["numCarriers"], 20);
    assert_eq!(row["includeCurves"], true);
    assert_eq!(row["curveRadius"], 800.0);
    assert_eq!(row["inclineAngle"], 5.0);
    assert_eq!(row["driveUnits"], 2);
}
