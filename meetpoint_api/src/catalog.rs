use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use meetpoint_core::{campus::CampusLocation, subway::Station};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_locations(State(state): State<Arc<AppState>>) -> Json<Vec<CampusLocation>> {
    Json(state.campus.campus().locations())
}

pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<CampusLocation>, ApiError> {
    let label = state
        .campus
        .campus()
        .label_of(&code)
        .ok_or_else(|| ApiError::NotFound(format!("No campus location {code}")))?
        .to_string();

    Ok(Json(CampusLocation { code, label }))
}

pub async fn list_stations(State(state): State<Arc<AppState>>) -> Json<Vec<Station>> {
    Json(state.subway.network().stations())
}

pub async fn get_station(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Station>, ApiError> {
    let lines = state
        .subway
        .network()
        .lines_of(&name)
        .ok_or_else(|| ApiError::NotFound(format!("No station {name}")))?
        .iter()
        .cloned()
        .collect();

    Ok(Json(Station { name, lines }))
}
