use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::models::Recommendation;
use crate::domain::recommendation::ports::RecommendationServicePort;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

pub struct RecommendationService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
}

impl<UR> RecommendationService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<UR> RecommendationServicePort for RecommendationService<UR>
where
    UR: UserRepository,
{
    async fn recommendations_for(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(RecommendationError::UserNotFound(user_id.to_string()));
        }

        tracing::debug!(user_id = %user_id, "No recommendation source configured");

        Ok(Vec::new())
    }
}
