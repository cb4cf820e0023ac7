use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_review::ReviewRequest;
use super::ApiError;
use super::ApiSuccess;
use super::StatusResponseData;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::ReviewId;
use crate::inbound::http::router::AppState;

pub async fn replace_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    Json(body): Json<ReviewRequest>,
) -> Result<ApiSuccess<StatusResponseData>, ApiError> {
    let review_id = ReviewId::from_string(&review_id).map_err(ReviewError::from)?;

    state
        .review_service
        .replace_review(&review_id, body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, StatusResponseData::success()))
}
