use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::NewMovie;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::movie::ports::MovieServicePort;

pub struct MovieService<MR>
where
    MR: MovieRepository,
{
    repository: Arc<MR>,
}

impl<MR> MovieService<MR>
where
    MR: MovieRepository,
{
    pub fn new(repository: Arc<MR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<MR> MovieServicePort for MovieService<MR>
where
    MR: MovieRepository,
{
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        self.repository.list_all().await
    }

    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, MovieError> {
        let created_movie = self.repository.create(Movie::from_new(movie)).await?;

        tracing::info!(
            movie_id = %created_movie.id,
            title = %created_movie.title,
            "Movie created"
        );

        Ok(created_movie)
    }

    async fn delete_movie(&self, id: &MovieId) -> Result<(), MovieError> {
        if !self.repository.delete(id).await? {
            return Err(MovieError::NotFound(id.to_string()));
        }

        tracing::info!(movie_id = %id, "Movie deleted");

        Ok(())
    }
}
