use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::{get_location, get_station, list_locations, list_stations};
use crate::recommend::recommend_handler::{campus_handler, subway_handler};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/recommend/campus", post(campus_handler))
        .route("/recommend/subway", post(subway_handler))
        .route("/campus/locations", get(list_locations))
        .route("/campus/locations/{code}", get(get_location))
        .route("/subway/stations", get(list_stations))
        .route("/subway/stations/{name}", get(get_station))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
