use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewDraft;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::review::ports::ReviewServicePort;

pub struct ReviewService<RR>
where
    RR: ReviewRepository,
{
    repository: Arc<RR>,
}

impl<RR> ReviewService<RR>
where
    RR: ReviewRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }

    async fn ensure_pair_free(
        &self,
        draft: &ReviewDraft,
        owner: Option<&ReviewId>,
    ) -> Result<(), ReviewError> {
        let existing = self
            .repository
            .find_by_user_and_movie(&draft.user_id, &draft.movie_id)
            .await?;

        match existing {
            Some(review) if Some(&review.id) != owner => Err(ReviewError::AlreadyExists {
                user_id: draft.user_id.to_string(),
                movie_id: draft.movie_id.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<RR> ReviewServicePort for ReviewService<RR>
where
    RR: ReviewRepository,
{
    async fn create_review(&self, draft: ReviewDraft) -> Result<Review, ReviewError> {
        self.ensure_pair_free(&draft, None).await?;

        let created_review = self.repository.create(Review::from_draft(draft)).await?;

        tracing::info!(
            review_id = %created_review.id,
            user_id = %created_review.user_id,
            movie_id = %created_review.movie_id,
            "Review created"
        );

        Ok(created_review)
    }

    async fn replace_review(
        &self,
        id: &ReviewId,
        draft: ReviewDraft,
    ) -> Result<Review, ReviewError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ReviewError::NotFound(id.to_string()));
        }

        self.ensure_pair_free(&draft, Some(id)).await?;

        let updated_review = self.repository.update(Review::with_id(*id, draft)).await?;

        tracing::info!(review_id = %updated_review.id, "Review replaced");

        Ok(updated_review)
    }

    async fn delete_review(&self, id: &ReviewId) -> Result<(), ReviewError> {
        if !self.repository.delete(id).await? {
            return Err(ReviewError::NotFound(id.to_string()));
        }

        tracing::info!(review_id = %id, "Review deleted");

        Ok(())
    }
}
