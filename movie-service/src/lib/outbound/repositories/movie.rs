use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::MovieTitle;
use crate::domain::movie::ports::MovieRepository;

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_movie(row: PgRow) -> Result<Movie, MovieError> {
        Ok(Movie {
            id: MovieId(row.get("id")),
            title: MovieTitle::new(row.get("title"))?,
            year: row.get("year"),
            genres: row.get("genres"),
            director: row.get("director"),
            plot: row.get("plot"),
            actors: row.get("actors"),
        })
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn create(&self, movie: Movie) -> Result<Movie, MovieError> {
        sqlx::query(
            r#"
            INSERT INTO movies (id, title, year, genres, director, plot, actors)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(movie.id.0)
        .bind(movie.title.as_str())
        .bind(movie.year)
        .bind(&movie.genres)
        .bind(&movie.director)
        .bind(&movie.plot)
        .bind(&movie.actors)
        .execute(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(movie)
    }

    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, year, genres, director, plot, actors
            FROM movies
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_movie).collect()
    }

    async fn delete(&self, id: &MovieId) -> Result<bool, MovieError> {
        let result = sqlx::query(
            r#"
            DELETE FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
