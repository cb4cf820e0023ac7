use thiserror::Error;

use crate::user::errors::UserError;
use crate::user::errors::UserIdError;

#[derive(Debug, Clone, Error)]
pub enum RecommendationError {
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserError> for RecommendationError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(e) => RecommendationError::InvalidUserId(e),
            UserError::NotFound(id) => RecommendationError::UserNotFound(id),
            other => RecommendationError::DatabaseError(other.to_string()),
        }
    }
}
