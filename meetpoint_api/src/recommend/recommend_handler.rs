use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

use super::{RecommendRequestBody, RecommendResponse};

pub async fn campus_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecommendRequestBody>,
) -> Result<RecommendResponse, ApiError> {
    let (seller, buyer) = body.validate()?;

    let recommendation = state.campus.recommend(seller, buyer);
    info!(seller, buyer, found = recommendation.is_found(), "campus recommendation");

    Ok(RecommendResponse(recommendation))
}

pub async fn subway_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecommendRequestBody>,
) -> Result<RecommendResponse, ApiError> {
    let (seller, buyer) = body.validate()?;

    let recommendation = state.subway.recommend(seller, buyer);
    info!(seller, buyer, found = recommendation.is_found(), "subway recommendation");

    Ok(RecommendResponse(recommendation))
}
