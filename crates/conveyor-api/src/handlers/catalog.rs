//! Product catalog handlers, all scoped by client code.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::{Map, Value};

use conveyor_entity::catalog::{
    Bracket, Category, Client, FlightBar, Material, PartFamily, Switch, TrackBend, Trolley,
};
use conveyor_service::{PartView, SeriesView};

use crate::dto::request::{BendQuery, SearchQuery, SeriesQuery};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/clients
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, ApiError> {
    Ok(Json(state.catalog.list_clients().await?))
}

/// GET /api/clients/{code}
pub async fn get_client(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Client>, ApiError> {
    Ok(Json(state.catalog.get_client(&code).await?))
}

/// GET /api/clients/{code}/categories
pub async fn categories(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.catalog.categories(&code).await?))
}

/// GET /api/clients/{code}/materials
pub async fn materials(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<Material>>, ApiError> {
    Ok(Json(state.catalog.materials(&code).await?))
}

/// GET /api/clients/{code}/series
pub async fn series(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<SeriesView>>, ApiError> {
    Ok(Json(state.catalog.series(&code).await?))
}

/// GET /api/clients/{code}/trolleys
pub async fn trolleys(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<PartView<Trolley>>>, ApiError> {
    let parts = state.catalog.parts(&code, query.series.as_deref()).await?;
    Ok(Json(parts))
}

/// GET /api/clients/{code}/bends
pub async fn bends(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<BendQuery>,
) -> Result<Json<Vec<PartView<TrackBend>>>, ApiError> {
    let parts = state
        .catalog
        .bends(&code, query.series.as_deref(), query.angle)
        .await?;
    Ok(Json(parts))
}

/// GET /api/clients/{code}/brackets
pub async fn brackets(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<PartView<Bracket>>>, ApiError> {
    let parts = state.catalog.parts(&code, query.series.as_deref()).await?;
    Ok(Json(parts))
}

/// GET /api/clients/{code}/switches
pub async fn switches(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<PartView<Switch>>>, ApiError> {
    let parts = state.catalog.parts(&code, query.series.as_deref()).await?;
    Ok(Json(parts))
}

/// GET /api/clients/{code}/flightbars
pub async fn flightbars(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<PartView<FlightBar>>>, ApiError> {
    let parts = state.catalog.parts(&code, query.series.as_deref()).await?;
    Ok(Json(parts))
}

/// GET /api/clients/{code}/parts/{family}
pub async fn parts_by_family(
    State(state): State<AppState>,
    Path((code, family)): Path<(String, String)>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Value>, ApiError> {
    let family: PartFamily = family.parse()?;
    let parts = state
        .catalog
        .parts_by_family(&code, family, query.series.as_deref())
        .await?;
    Ok(Json(parts))
}

/// GET /api/clients/{code}/products/search
pub async fn search(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let results = state
        .catalog
        .search(&code, query.q.as_deref(), query.category.as_deref())
        .await?;
    Ok(Json(results))
}
