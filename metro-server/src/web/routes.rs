//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeFile;
use tracing::{debug, error, info, warn};

use crate::planner::{Planner, SearchOutcome};
use crate::stations::StationMatch;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

const DEFAULT_SEARCH_LIMIT: usize = 20;
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
///
/// `stations_file` is served verbatim at `/data/stations.json` for the map.
pub fn create_router(state: AppState, stations_file: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/search_stations", get(search_stations))
        .route("/api/find_route", get(find_route))
        .route_service("/data/stations.json", ServeFile::new(stations_file))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the route form.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        station_count: state.network.graph.len(),
        lines: state
            .network
            .graph
            .lines()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;
    Ok(Html(html))
}

/// Station name autocomplete.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<Vec<StationMatch>> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);
    Json(state.station_names.search(&req.query, limit))
}

/// Plan a route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<FindRouteRequest>,
) -> Result<Json<FindRouteResponse>, AppError> {
    plan_route(&state, &req).map(Json)
}

/// Run one route search for a request.
///
/// Searches are CPU-bound but short; they run inline on the request task.
pub(crate) fn plan_route(
    state: &AppState,
    req: &FindRouteRequest,
) -> Result<FindRouteResponse, AppError> {
    let (start, end) = req.endpoints().ok_or_else(|| AppError::BadRequest {
        message: "Missing start or end station".to_string(),
    })?;
    let end_line = req.end_line();

    let planner = Planner::new(&state.network, &state.config);
    match planner.find_path(start, end, end_line) {
        SearchOutcome::Found(route) => {
            debug!(
                start,
                end,
                cost = route.total_cost,
                transfers = route.transfer_count,
                explored = route.states_explored,
                "route found"
            );
            Ok(FindRouteResponse::from_route(&route))
        }
        SearchOutcome::NotFound(reason) => {
            info!(start, end, ?end_line, %reason, "no route");
            Err(AppError::NotFound {
                message: "No route found".to_string(),
            })
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
