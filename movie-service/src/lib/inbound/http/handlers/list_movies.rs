use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::models::Movie;
use crate::inbound::http::router::AppState;

pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<MovieData>>, ApiError> {
    state
        .movie_service
        .list_movies()
        .await
        .map_err(ApiError::from)
        .map(|movies| ApiSuccess::new(StatusCode::OK, movies.iter().map(MovieData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieData {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genres: Vec<String>,
    pub director: String,
    pub plot: String,
    pub actors: Vec<String>,
}

impl From<&Movie> for MovieData {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title.as_str().to_string(),
            year: movie.year,
            genres: movie.genres.clone(),
            director: movie.director.clone(),
            plot: movie.plot.clone(),
            actors: movie.actors.clone(),
        }
    }
}
