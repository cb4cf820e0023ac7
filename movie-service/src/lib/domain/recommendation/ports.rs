use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::models::Recommendation;
use crate::user::models::UserId;

#[async_trait]
pub trait RecommendationServicePort: Send + Sync + 'static {
    /// Recommendations for an existing user.
    ///
    /// No ranking is computed yet, so the list is always empty.
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn recommendations_for(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Recommendation>, RecommendationError>;
}
