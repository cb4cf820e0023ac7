use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::StatusResponseData;
use crate::domain::user::models::Password;
use crate::domain::user::models::ReplaceUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn replace_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(user_id): Path<String>,
    Json(body): Json<ReplaceUserRequest>,
) -> Result<ApiSuccess<StatusResponseData>, ApiError> {
    let caller = Username::new(caller.username)
        .map_err(|_| ApiError::Unauthorized("Not authenticated".to_string()))?;
    let user_id = UserId::from_string(&user_id).map_err(UserError::from)?;

    state
        .user_service
        .replace_user(&caller, &user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, StatusResponseData::success()))
}

/// Full replacement body: both fields are required and `username` must be unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplaceUserRequest {
    username: String,
    password: String,
}

impl ReplaceUserRequest {
    fn try_into_command(self) -> Result<ReplaceUserCommand, UserError> {
        Ok(ReplaceUserCommand {
            username: Username::new(self.username)?,
            password: Password::new(self.password)?,
        })
    }
}
