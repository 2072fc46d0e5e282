//! Client-scoped catalog endpoints over the seeded NIKO catalogue.

use axum::http::StatusCode;
use serde_json::Value;

use crate::helpers::TestApp;

fn items(body: &Value) -> &Vec<Value> {
    body.as_array().expect("array body")
}

#[tokio::test]
async fn test_list_clients() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/clients", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let clients = items(&response.body);
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0]["code"], "NIKO");
    assert_eq!(clients[0]["country"], "Greece");
}

#[tokio::test]
async fn test_get_client_by_code() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/clients/NIKO", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "NIKO Conveyor Systems");

    let missing = app.request("GET", "/api/clients/ACME", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");
    assert_eq!(missing.body["message"], "Client not found");
}

#[tokio::test]
async fn test_reference_lists() {
    let app = TestApp::new().await;

    let categories = app.request("GET", "/api/clients/NIKO/categories", None).await;
    assert_eq!(items(&categories.body).len(), 14);

    let materials = app.request("GET", "/api/clients/NIKO/materials", None).await;
    assert_eq!(items(&materials.body).len(), 6);

    let series = app.request("GET", "/api/clients/NIKO/series", None).await;
    let series = items(&series.body);
    assert_eq!(series.len(), 14);
    assert!(series.iter().all(|s| s["material"].is_object()));
}

#[tokio::test]
async fn test_trolleys_filtered_by_series() {
    let app = TestApp::new().await;

    let all = app.request("GET", "/api/clients/NIKO/trolleys", None).await;
    assert_eq!(items(&all.body).len(), 18);

    let response = app
        .request("GET", "/api/clients/NIKO/trolleys?series=27.000", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let trolleys = items(&response.body);
    assert_eq!(trolleys.len(), 2);
    for trolley in trolleys {
        assert_eq!(trolley["series"]["seriesCode"], "27.000");
        assert!(trolley["material"].is_object());
        assert!(trolley["partNumber"].is_string());
    }
}

#[tokio::test]
async fn test_bends_filtered_by_angle() {
    let app = TestApp::new().await;

    let all = app.request("GET", "/api/clients/NIKO/bends", None).await;
    assert_eq!(items(&all.body).len(), 25);

    let right_angles = app
        .request("GET", "/api/clients/NIKO/bends?angle=90", None)
        .await;
    let bends = items(&right_angles.body);
    assert_eq!(bends.len(), 11);
    assert!(bends.iter().all(|b| b["angleDegrees"] == 90));
}

#[tokio::test]
async fn test_switches_for_unknown_series_are_empty() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/clients/NIKO/switches?series=99.000", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(items(&response.body).is_empty());
}

#[tokio::test]
async fn test_parts_by_family_slug() {
    let app = TestApp::new().await;

    let trolleys = app
        .request("GET", "/api/clients/NIKO/parts/trolleys", None)
        .await;
    assert_eq!(trolleys.status, StatusCode::OK);
    assert_eq!(items(&trolleys.body).len(), 18);

    let unknown = app
        .request("GET", "/api/clients/NIKO/parts/widgets", None)
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_search() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/clients/NIKO/products/search?q=Guide", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let results = response.body.as_object().expect("object body");
    assert_eq!(results.len(), 1);
    assert_eq!(items(&results["trolleys"]).len(), 3);

    let scoped = app
        .request(
            "GET",
            "/api/clients/NIKO/products/search?category=trackBends",
            None,
        )
        .await;
    let scoped = scoped.body.as_object().expect("object body");
    assert_eq!(scoped.keys().collect::<Vec<_>>(), vec!["trackBends"]);
}

#[tokio::test]
async fn test_catalog_of_unknown_client_is_not_found() {
    let app = TestApp::new().await;

    for path in [
        "/api/clients/ACME/series",
        "/api/clients/ACME/trolleys",
        "/api/clients/ACME/products/search?q=x",
    ] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }
}
