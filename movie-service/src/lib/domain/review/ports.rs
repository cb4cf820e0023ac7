use async_trait::async_trait;

use crate::domain::movie::models::MovieId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewDraft;
use crate::domain::review::models::ReviewId;
use crate::user::models::UserId;

/// Port for review operations.
#[async_trait]
pub trait ReviewServicePort: Send + Sync + 'static {
    /// Create a review.
    ///
    /// # Errors
    /// * `AlreadyExists` - The user already reviewed this movie
    /// * `DatabaseError` - Database operation failed
    async fn create_review(&self, draft: ReviewDraft) -> Result<Review, ReviewError>;

    /// Replace the content of an existing review.
    ///
    /// # Errors
    /// * `NotFound` - Review does not exist
    /// * `AlreadyExists` - Another review already covers the new pair
    /// * `DatabaseError` - Database operation failed
    async fn replace_review(&self, id: &ReviewId, draft: ReviewDraft)
        -> Result<Review, ReviewError>;

    /// # Errors
    /// * `NotFound` - Review does not exist
    async fn delete_review(&self, id: &ReviewId) -> Result<(), ReviewError>;
}

/// Persistence operations for reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync + 'static {
    /// # Errors
    /// * `AlreadyExists` - Store rejected a duplicate (user, movie) pair
    async fn create(&self, review: Review) -> Result<Review, ReviewError>;

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError>;

    async fn find_by_user_and_movie(
        &self,
        user_id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<Review>, ReviewError>;

    /// # Errors
    /// * `NotFound` - Review does not exist
    /// * `AlreadyExists` - Store rejected a duplicate (user, movie) pair
    async fn update(&self, review: Review) -> Result<Review, ReviewError>;

    /// # Returns
    /// `true` when a row was removed
    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewError>;
}
