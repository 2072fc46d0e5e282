//! Route definitions for the conveyor configurator HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with every route bound to `state`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(export_routes())
        .merge(geometry_routes())
        .merge(csv_routes())
        .merge(quote_routes())
        .merge(cad_routes())
        .merge(catalog_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// STEP and JSON downloads
fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/export/step", post(handlers::export::roller_step))
        .route("/export/overhead-step", post(handlers::export::overhead_step))
        .route("/export/json", post(handlers::export::json_dump))
}

fn geometry_routes() -> Router<AppState> {
    Router::new()
        .route("/geometry/roller", post(handlers::geometry::roller))
        .route("/geometry/overhead", post(handlers::geometry::overhead))
}

fn csv_routes() -> Router<AppState> {
    Router::new()
        .route("/csv/import", post(handlers::csv::import))
        .route("/csv/export", post(handlers::csv::export))
}

fn quote_routes() -> Router<AppState> {
    Router::new().route(
        "/quotes",
        post(handlers::quote::submit).get(handlers::quote::list),
    )
}

fn cad_routes() -> Router<AppState> {
    Router::new().route("/import/cad", post(handlers::cad::import))
}

/// Client-scoped catalog lookups
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(handlers::catalog::list_clients))
        .route("/clients/{code}", get(handlers::catalog::get_client))
        .route("/clients/{code}/categories", get(handlers::catalog::categories))
        .route("/clients/{code}/materials", get(handlers::catalog::materials))
        .route("/clients/{code}/series", get(handlers::catalog::series))
        .route("/clients/{code}/trolleys", get(handlers::catalog::trolleys))
        .route("/clients/{code}/bends", get(handlers::catalog::bends))
        .route("/clients/{code}/brackets", get(handlers::catalog::brackets))
        .route("/clients/{code}/switches", get(handlers::catalog::switches))
        .route("/clients/{code}/flightbars", get(handlers::catalog::flightbars))
        .route(
            "/clients/{code}/parts/{family}",
            get(handlers::catalog::parts_by_family),
        )
        .route(
            "/clients/{code}/products/search",
            get(handlers::catalog::search),
        )
}
