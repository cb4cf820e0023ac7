use std::fmt;

use uuid::Uuid;

use crate::domain::movie::models::MovieId;
use crate::domain::review::errors::RatingError;
use crate::domain::review::errors::ReviewIdError;
use crate::user::models::UserId;

/// A user's review of a single movie.
///
/// At most one review exists per (`user_id`, `movie_id`) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: Rating,
    pub comment: Option<String>,
}

impl Review {
    pub fn from_draft(draft: ReviewDraft) -> Self {
        Self::with_id(ReviewId::new(), draft)
    }

    /// Rebuild a review under an existing identifier.
    pub fn with_id(id: ReviewId, draft: ReviewDraft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            movie_id: draft.movie_id,
            rating: draft.rating,
            comment: draft.comment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ReviewIdError> {
        Uuid::parse_str(s)
            .map(ReviewId)
            .map_err(|e| ReviewIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Score between 0.0 and 10.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating(f64);

impl Rating {
    const MIN: f64 = 0.0;
    const MAX: f64 = 10.0;

    /// # Errors
    /// * `NotFinite` - NaN or infinite
    /// * `OutOfRange` - Outside 0.0 to 10.0
    pub fn new(value: f64) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::NotFinite);
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RatingError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Validated review content, used for both create and replace.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: Rating,
    pub comment: Option<String>,
}
