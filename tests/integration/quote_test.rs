//! Quote submission and listing.

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

fn quote(company: &str) -> Value {
    json!({
        "company": company,
        "contact": "Sam Taylor",
        "email": "sam@example.com",
        "quantity": 2,
        "conveyorType": "overhead",
        "overheadConfiguration": { "trackLength": 12000 },
        "bomItems": [{
            "category": "Trolleys",
            "partNumber": "24.201",
            "description": "2-wheel trolley",
            "quantity": 10,
            "unitPrice": 12.5,
            "canSwap": false,
            "alternativePartNumbers": []
        }]
    })
}

#[tokio::test]
async fn test_submit_and_list_quotes() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/quotes", Some(quote("Acme"))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Quote request received");
    let id = response.body["quoteId"].as_str().expect("quote id").to_string();

    let list = app.request("GET", "/api/quotes", None).await;
    let quotes = list.body.as_array().expect("array");
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0]["id"], id.as_str());
    assert_eq!(quotes[0]["company"], "Acme");

    let file = app.quotes_dir.path().join(format!("quote_{id}.json"));
    let stored: Value =
        serde_json::from_slice(&std::fs::read(file).expect("quote file")).expect("json");
    assert_eq!(stored["company"], "Acme");
    assert_eq!(stored["bomItems"][0]["partNumber"], "24.201");
}

#[tokio::test]
async fn test_invalid_quote_is_rejected() {
    let app = TestApp::new().await;
    let mut body = quote("Acme");
    body["email"] = json!("not-an-email");

    let response = app.request("POST", "/api/quotes", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let list = app.request("GET", "/api/quotes", None).await;
    assert_eq!(list.body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_quotes_reload_from_directory() {
    let app = TestApp::new().await;
    app.request("POST", "/api/quotes", Some(quote("First"))).await;
    app.request("POST", "/api/quotes", Some(quote("Second"))).await;

    let TestApp { quotes_dir, .. } = app;
    let restarted = TestApp::with_quotes_dir(quotes_dir).await;

    let list = restarted.request("GET", "/api/quotes", None).await;
    let companies: Vec<&str> = list
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|q| q["company"].as_str())
        .collect();
    assert_eq!(companies, vec!["First", "Second"]);
}
