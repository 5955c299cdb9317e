//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::error;

use crate::map::Marker;

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the directory served under `/static` (marker icons).
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/map", get(map_config))
        .route("/api/stations", get(stations))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The map page.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexTemplate {
        api_key: state.api_key.as_deref().map(str::to_owned),
    };
    let html = page.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Map view, theme and city-centre marker.
async fn map_config(State(state): State<AppState>) -> Json<MapResponse> {
    Json(MapResponse::from_config(&state.map))
}

/// One marker per station.
async fn stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state.stations.iter().map(Marker::station).collect();
    Json(StationsResponse { stations })
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("No route for {}", uri.path()),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
