use std::fmt;

use uuid::Uuid;

use crate::domain::movie::errors::MovieIdError;
use crate::domain::movie::errors::MovieTitleError;

/// Catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: MovieTitle,
    pub year: i32,
    pub genres: Vec<String>,
    pub director: String,
    pub plot: String,
    pub actors: Vec<String>,
}

impl Movie {
    /// Assign a fresh identifier to a new catalog entry.
    pub fn from_new(movie: NewMovie) -> Self {
        Self {
            id: MovieId::new(),
            title: movie.title,
            year: movie.year,
            genres: movie.genres,
            director: movie.director,
            plot: movie.plot,
            actors: movie.actors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovieId(pub Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, MovieIdError> {
        Uuid::parse_str(s)
            .map(MovieId)
            .map_err(|e| MovieIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-blank movie title, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieTitle(String);

impl MovieTitle {
    pub fn new(title: String) -> Result<Self, MovieTitleError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(MovieTitleError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated input for a catalog insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: MovieTitle,
    pub year: i32,
    pub genres: Vec<String>,
    pub director: String,
    pub plot: String,
    pub actors: Vec<String>,
}
