pub mod recommend_handler;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use meetpoint_core::Recommendation;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct RecommendRequestBody {
    seller: String,
    buyer: String,
}

impl RecommendRequestBody {
    fn validate(&self) -> Result<(&str, &str), ApiError> {
        let seller = self.seller.trim();
        let buyer = self.buyer.trim();

        if seller.is_empty() {
            return Err(ApiError::BadRequest(String::from(
                "seller location must not be empty",
            )));
        }

        if buyer.is_empty() {
            return Err(ApiError::BadRequest(String::from(
                "buyer location must not be empty",
            )));
        }

        Ok((seller, buyer))
    }
}

/// A missing recommendation is still a successful answer; the frontend
/// reads `status` to decide what to show.
pub struct RecommendResponse(Recommendation);

impl IntoResponse for RecommendResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}
