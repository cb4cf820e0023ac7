use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::NewMovie;

/// Port for movie catalog operations.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// List every movie in the catalog.
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;

    /// Insert a movie and return it with its assigned identifier.
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, MovieError>;

    /// Remove a movie.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    async fn delete_movie(&self, id: &MovieId) -> Result<(), MovieError>;
}

/// Persistence operations for the movie catalog.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    async fn create(&self, movie: Movie) -> Result<Movie, MovieError>;

    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;

    /// # Returns
    /// `true` when a row was removed
    async fn delete(&self, id: &MovieId) -> Result<bool, MovieError>;
}
