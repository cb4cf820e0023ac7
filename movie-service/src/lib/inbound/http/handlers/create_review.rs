use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::models::MovieId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Rating;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewDraft;
use crate::inbound::http::router::AppState;
use crate::user::models::UserId;

pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<ReviewRequest>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    state
        .review_service
        .create_review(body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::CREATED, review.into()))
}

/// Review body shared by create and replace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewRequest {
    user_id: String,
    movie_id: String,
    rating: f64,
    #[serde(default)]
    comment: Option<String>,
}

impl ReviewRequest {
    pub fn try_into_draft(self) -> Result<ReviewDraft, ReviewError> {
        Ok(ReviewDraft {
            user_id: UserId::from_string(&self.user_id)?,
            movie_id: MovieId::from_string(&self.movie_id)?,
            rating: Rating::new(self.rating)?,
            comment: self.comment,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewData {
    pub id: String,
    pub user_id: String,
    pub movie_id: String,
    pub rating: f64,
    pub comment: Option<String>,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.to_string(),
            user_id: review.user_id.to_string(),
            movie_id: review.movie_id.to_string(),
            rating: review.rating.value(),
            comment: review.comment.clone(),
        }
    }
}
