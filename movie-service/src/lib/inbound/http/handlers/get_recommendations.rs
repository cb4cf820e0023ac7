use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::models::Recommendation;
use crate::inbound::http::router::AppState;
use crate::user::models::UserId;

pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<RecommendationsResponseData>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(RecommendationError::from)?;

    state
        .recommendation_service
        .recommendations_for(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|recommendations| {
            ApiSuccess::new(
                StatusCode::OK,
                RecommendationsResponseData {
                    status: "success".to_string(),
                    recommendations: recommendations.iter().map(RecommendationData::from).collect(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationsResponseData {
    pub status: String,
    pub recommendations: Vec<RecommendationData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationData {
    pub user_id: String,
    pub movie_id: String,
}

impl From<&Recommendation> for RecommendationData {
    fn from(recommendation: &Recommendation) -> Self {
        Self {
            user_id: recommendation.user_id.to_string(),
            movie_id: recommendation.movie_id.to_string(),
        }
    }
}
