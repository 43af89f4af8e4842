//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::planner::{Optimization, PlanError, TravelPlan};
use crate::store::{RouteRecord, StationRecord};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route/find", get(find_route))
        .route("/route/all", get(all_routes))
        .route("/route/by_name/:name", get(routes_by_name))
        .route("/station/all", get(all_stations))
        .route("/station/by_name/:name", get(stations_by_name))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find itineraries between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<FindRouteRequest>,
) -> Result<Json<TravelPlan>, AppError> {
    let optimization = Optimization::from_key(req.optimization.as_deref().unwrap_or_default());

    let plan = state
        .finder
        .find_routes(&req.origin, &req.destination, optimization)?;

    Ok(Json(plan))
}

/// All route records.
async fn all_routes(State(state): State<AppState>) -> Json<Vec<RouteRecord>> {
    Json(state.store.snapshot().routes.clone())
}

/// Routes whose display name contains the fragment, case-insensitively.
async fn routes_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<RouteRecord>>, AppError> {
    let fragment = non_empty_fragment(&name)?;

    let matches = state
        .store
        .snapshot()
        .routes
        .iter()
        .filter(|route| route.name.to_lowercase().contains(&fragment))
        .cloned()
        .collect();

    Ok(Json(matches))
}

/// All station records.
async fn all_stations(State(state): State<AppState>) -> Json<Vec<StationRecord>> {
    Json(state.store.snapshot().stations.clone())
}

/// Stations whose display name contains the fragment, case-insensitively.
async fn stations_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<StationRecord>>, AppError> {
    let fragment = non_empty_fragment(&name)?;

    let matches = state
        .store
        .snapshot()
        .stations
        .iter()
        .filter(|station| station.name.to_lowercase().contains(&fragment))
        .cloned()
        .collect();

    Ok(Json(matches))
}

fn non_empty_fragment(name: &str) -> Result<String, AppError> {
    if name.is_empty() {
        return Err(AppError::BadRequest {
            message: "The name cannot be empty.".to_string(),
        });
    }
    Ok(name.to_lowercase())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        // Both planner outcomes surface as 404 with the planner's message
        // as the error payload.
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::debug!(%status, %message, "request rejected");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
