use auth::JwtError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::movie::errors::MovieError;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::review::errors::ReviewError;
use crate::user::errors::PasswordError;
use crate::user::errors::UserError;

pub mod create_movie;
pub mod create_review;
pub mod delete_movie;
pub mod delete_review;
pub mod get_recommendations;
pub mod list_movies;
pub mod login;
pub mod me;
pub mod register;
pub mod replace_review;
pub mod replace_user;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// `{"status": "success"}` acknowledgement for updates and deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponseData {
    pub status: String,
}

impl StatusResponseData {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiErrorBody::new(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFoundByUsername(_) | UserError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            UserError::UsernameAlreadyExists(_) => {
                ApiError::BadRequest("Username already exists".to_string())
            }
            UserError::NotOwner(_) => {
                ApiError::Forbidden("Users may only replace their own record".to_string())
            }
            UserError::InvalidUserId(_) | UserError::UsernameImmutable(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::InvalidUsername(_) | UserError::Password(PasswordError::Empty) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Password(PasswordError::HashingFailed(_))
            | UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::InvalidMovieId(_) => ApiError::BadRequest(err.to_string()),
            MovieError::InvalidTitle(_) => ApiError::UnprocessableEntity(err.to_string()),
            MovieError::NotFound(_) => ApiError::NotFound("Movie not found".to_string()),
            MovieError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::InvalidReviewId(_)
            | ReviewError::InvalidUserId(_)
            | ReviewError::InvalidMovieId(_) => ApiError::BadRequest(err.to_string()),
            ReviewError::InvalidRating(_) => ApiError::UnprocessableEntity(err.to_string()),
            ReviewError::AlreadyExists { .. } => ApiError::BadRequest(
                "Review already exists for this user and movie".to_string(),
            ),
            ReviewError::NotFound(_) => ApiError::NotFound("Review not found".to_string()),
            ReviewError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<RecommendationError> for ApiError {
    fn from(err: RecommendationError) -> Self {
        match err {
            RecommendationError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            RecommendationError::UserNotFound(_) => {
                ApiError::NotFound("User not found".to_string())
            }
            RecommendationError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingFailed(_) => ApiError::InternalServerError(err.to_string()),
            JwtError::InvalidSignature | JwtError::Expired | JwtError::Malformed(_) => {
                ApiError::Unauthorized(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    status_code: u16,
    message: String,
}

impl ApiErrorBody {
    pub fn new(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            message,
        }
    }
}
