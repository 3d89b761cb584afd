use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::service_area::{CityRecord, Resolution, ResolveError};

use super::state::AppState;

/// Default radius in miles when the caller omits the parameter.
const DEFAULT_RADIUS_MILES: f64 = 30.0;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /api/service-areas ──────────────────────────────────────

#[derive(Deserialize)]
pub struct ServiceAreasQuery {
    pub city: Option<String>,
    pub state: Option<String>,
    pub radius: Option<f64>,
}

pub async fn service_areas(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ServiceAreasQuery>,
) -> Result<Json<Resolution>, ApiError> {
    let start = Instant::now();

    let city = params.city.as_deref().unwrap_or("").trim();
    if city.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing 'city' parameter"));
    }
    let state_code = params.state.as_deref().unwrap_or("").trim();
    if state_code.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing 'state' parameter"));
    }
    let radius = params.radius.unwrap_or(DEFAULT_RADIUS_MILES);

    let resolution = match state.resolver.resolve(city, state_code, radius) {
        Ok(r) => r,
        Err(e @ ResolveError::CityNotFound { .. }) => {
            return Err(api_error(StatusCode::NOT_FOUND, e.to_string()));
        }
        Err(e @ ResolveError::InvalidRadius(_)) => {
            return Err(api_error(StatusCode::BAD_REQUEST, e.to_string()));
        }
    };

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/service-areas city={} state={} radius={} -> {} cities in {} counties ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        city,
        state_code,
        radius,
        resolution.cities_found,
        resolution.service_areas.len(),
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(resolution))
}

// ─── GET /api/cities ─────────────────────────────────────────────

pub async fn city_list(State(state): State<Arc<AppState>>) -> Json<Vec<CityRecord>> {
    Json(state.resolver.gazetteer().records().to_vec())
}
