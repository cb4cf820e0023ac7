use crate::domain::movie::models::MovieId;
use crate::user::models::UserId;

/// A movie suggested to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub user_id: UserId,
    pub movie_id: MovieId,
}
