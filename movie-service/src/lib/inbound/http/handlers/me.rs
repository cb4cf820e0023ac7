use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<MeResponseData>, ApiError> {
    let not_authenticated = || ApiError::Unauthorized("Not authenticated".to_string());

    let username = Username::new(user.username).map_err(|_| not_authenticated())?;

    // A valid token whose subject has no record left is treated as unauthenticated.
    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => not_authenticated(),
            other => ApiError::from(other),
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MeResponseData {
            username: user.username.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub username: String,
}
