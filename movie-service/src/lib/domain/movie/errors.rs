use thiserror::Error;

/// Error for MovieId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for MovieTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieTitleError {
    #[error("Movie title must not be empty")]
    Empty,
}

/// Top-level error for all movie-related operations
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Invalid movie ID: {0}")]
    InvalidMovieId(#[from] MovieIdError),

    #[error("Invalid movie title: {0}")]
    InvalidTitle(#[from] MovieTitleError),

    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
