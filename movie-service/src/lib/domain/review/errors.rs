use thiserror::Error;

use crate::domain::movie::errors::MovieIdError;
use crate::user::errors::UserIdError;

/// Error for ReviewId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Rating validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RatingError {
    #[error("Rating must be a finite number")]
    NotFinite,

    #[error("Rating out of range: expected {min} to {max}, got {actual}")]
    OutOfRange { min: f64, max: f64, actual: f64 },
}

/// Top-level error for all review-related operations
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("Invalid review ID: {0}")]
    InvalidReviewId(#[from] ReviewIdError),

    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid movie ID: {0}")]
    InvalidMovieId(#[from] MovieIdError),

    #[error("Invalid rating: {0}")]
    InvalidRating(#[from] RatingError),

    #[error("Review already exists for user {user_id} and movie {movie_id}")]
    AlreadyExists { user_id: String, movie_id: String },

    #[error("Review not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
