//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use conveyor_api::{AppState, build_app};
use conveyor_core::config::AppConfig;
use conveyor_database::DatabasePool;
use conveyor_database::migration::run_migrations;
use conveyor_database::seeder::seed_niko_catalogue;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state, for inspecting services directly
    pub state: AppState,
    /// Quotes directory, removed when the app is dropped
    pub quotes_dir: TempDir,
}

impl TestApp {
    /// Seeded in-memory catalogue with quotes in a fresh temp directory
    pub async fn new() -> Self {
        let quotes_dir = tempfile::tempdir().expect("Failed to create quotes dir");
        Self::with_quotes_dir(quotes_dir).await
    }

    /// Same as [`TestApp::new`] over an existing quotes directory
    pub async fn with_quotes_dir(quotes_dir: TempDir) -> Self {
        let mut config = AppConfig::default();
        config.storage.quotes_dir = quotes_dir.path().to_string_lossy().into_owned();

        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");
        run_migrations(db.pool()).await.expect("Failed to run migrations");
        seed_niko_catalogue(db.pool())
            .await
            .expect("Failed to seed catalogue");

        let state = AppState::build(config, db)
            .await
            .expect("Failed to build app state");
        let router = build_app(state.clone());

        Self {
            router,
            state,
            quotes_dir,
        }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, "application/json", Body::from(body_str))
            .await
    }

    /// Make a request with an arbitrary content type and raw body
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: Body,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, content_type)
            .body(body)
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 64 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }

    /// Upload one file as multipart form data to `/api/import/cad`
    pub async fn upload_cad(&self, file_name: &str, content: &[u8]) -> TestResponse {
        const BOUNDARY: &str = "conveyor-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        self.send(
            "POST",
            "/api/import/cad",
            &format!("multipart/form-data; boundary={BOUNDARY}"),
            Body::from(body),
        )
        .await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: header::HeaderName) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}
