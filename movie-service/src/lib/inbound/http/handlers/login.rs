use auth::AccessToken;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::INVALID_CREDENTIALS;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginForm>,
) -> Result<ApiSuccess<AccessToken>, ApiError> {
    // A name that could never have been registered is just another unknown user.
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let user = state
        .user_service
        .authenticate(&username, &body.password)
        .await
        .map_err(|e| {
            if is_credential_rejection(&e) {
                tracing::info!(username = %username, "Login rejected");
            }
            ApiError::from(e)
        })?;

    let token = state
        .authenticator
        .issue_token(user.username.as_str())
        .map_err(ApiError::from)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(ApiSuccess::new(StatusCode::OK, token))
}

/// Form-encoded credentials (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

/// Unknown user or wrong password; everything else is a server-side failure.
fn is_credential_rejection(err: &UserError) -> bool {
    matches!(
        err,
        UserError::NotFoundByUsername(_) | UserError::InvalidCredentials
    )
}
