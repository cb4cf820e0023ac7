use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::movie::models::MovieId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Rating;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::user::models::UserId;

const USER_MOVIE_CONSTRAINT: &str = "reviews_user_id_movie_id_key";

pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_review(row: PgRow) -> Result<Review, ReviewError> {
        Ok(Review {
            id: ReviewId(row.get("id")),
            user_id: UserId(row.get("user_id")),
            movie_id: MovieId(row.get("movie_id")),
            rating: Rating::new(row.get("rating"))?,
            comment: row.get("comment"),
        })
    }

    fn map_write_error(e: sqlx::Error, review: &Review) -> ReviewError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() && db_err.constraint() == Some(USER_MOVIE_CONSTRAINT) {
                return ReviewError::AlreadyExists {
                    user_id: review.user_id.to_string(),
                    movie_id: review.movie_id.to_string(),
                };
            }
        }
        ReviewError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, ReviewError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, user_id, movie_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(review.id.0)
        .bind(review.user_id.0)
        .bind(review.movie_id.0)
        .bind(review.rating.value())
        .bind(&review.comment)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &review))?;

        Ok(review)
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, movie_id, rating, comment
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_review).transpose()
    }

    async fn find_by_user_and_movie(
        &self,
        user_id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<Review>, ReviewError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, movie_id, rating, comment
            FROM reviews
            WHERE user_id = $1 AND movie_id = $2
            "#,
        )
        .bind(user_id.0)
        .bind(movie_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_review).transpose()
    }

    async fn update(&self, review: Review) -> Result<Review, ReviewError> {
        let result = sqlx::query(
            r#"
            UPDATE reviews
            SET user_id = $2, movie_id = $3, rating = $4, comment = $5
            WHERE id = $1
            "#,
        )
        .bind(review.id.0)
        .bind(review.user_id.0)
        .bind(review.movie_id.0)
        .bind(review.rating.value())
        .bind(&review.comment)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &review))?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound(review.id.to_string()));
        }

        Ok(review)
    }

    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewError> {
        let result = sqlx::query(
            r#"
            DELETE FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
