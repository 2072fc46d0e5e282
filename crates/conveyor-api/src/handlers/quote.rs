//! Quote handlers.

use axum::Json;
use axum::extract::State;

use conveyor_entity::quote::QuoteRequest;
use conveyor_service::QuoteReceipt;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/quotes
pub async fn submit(
    State(state): State<AppState>,
    Json(quote): Json<QuoteRequest>,
) -> Result<Json<QuoteReceipt>, ApiError> {
    Ok(Json(state.quotes.submit(quote).await?))
}

/// GET /api/quotes
pub async fn list(State(state): State<AppState>) -> Json<Vec<QuoteRequest>> {
    Json(state.quotes.list().await)
}
