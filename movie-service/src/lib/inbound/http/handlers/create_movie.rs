use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::MovieTitle;
use crate::domain::movie::models::NewMovie;
use crate::inbound::http::router::AppState;

pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<CreateMovieRequest>,
) -> Result<ApiSuccess<CreateMovieResponseData>, ApiError> {
    state
        .movie_service
        .create_movie(body.try_into_new_movie()?)
        .await
        .map_err(ApiError::from)
        .map(|movie| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreateMovieResponseData {
                    id: movie.id.to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateMovieRequest {
    title: String,
    year: i32,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    director: String,
    #[serde(default)]
    plot: String,
    #[serde(default)]
    actors: Vec<String>,
}

impl CreateMovieRequest {
    fn try_into_new_movie(self) -> Result<NewMovie, MovieError> {
        Ok(NewMovie {
            title: MovieTitle::new(self.title)?,
            year: self.year,
            genres: self.genres,
            director: self.director,
            plot: self.plot,
            actors: self.actors,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMovieResponseData {
    pub id: String,
}
