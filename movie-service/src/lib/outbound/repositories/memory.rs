//! In-process stores backed by `RwLock<HashMap>`.
//!
//! Selected with `database.backend = "memory"` and used by the integration
//! tests. Uniqueness is re-checked under the write lock, so concurrent
//! inserts of the same key resolve to exactly one winner.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::user::errors::UserError;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::Username;
use crate::user::ports::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<HashMap<MovieId, Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn create(&self, movie: Movie) -> Result<Movie, MovieError> {
        self.movies.write().await.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let mut movies: Vec<Movie> = self.movies.read().await.values().cloned().collect();
        movies.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(movies)
    }

    async fn delete(&self, id: &MovieId) -> Result<bool, MovieError> {
        Ok(self.movies.write().await.remove(id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: RwLock<HashMap<ReviewId, Review>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn pair_taken(
        reviews: &HashMap<ReviewId, Review>,
        review: &Review,
    ) -> Option<ReviewError> {
        reviews
            .values()
            .any(|r| {
                r.id != review.id && r.user_id == review.user_id && r.movie_id == review.movie_id
            })
            .then(|| ReviewError::AlreadyExists {
                user_id: review.user_id.to_string(),
                movie_id: review.movie_id.to_string(),
            })
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, ReviewError> {
        let mut reviews = self.reviews.write().await;

        if let Some(err) = Self::pair_taken(&reviews, &review) {
            return Err(err);
        }

        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError> {
        Ok(self.reviews.read().await.get(id).cloned())
    }

    async fn find_by_user_and_movie(
        &self,
        user_id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<Review>, ReviewError> {
        Ok(self
            .reviews
            .read()
            .await
            .values()
            .find(|r| &r.user_id == user_id && &r.movie_id == movie_id)
            .cloned())
    }

    async fn update(&self, review: Review) -> Result<Review, ReviewError> {
        let mut reviews = self.reviews.write().await;

        if !reviews.contains_key(&review.id) {
            return Err(ReviewError::NotFound(review.id.to_string()));
        }
        if let Some(err) = Self::pair_taken(&reviews, &review) {
            return Err(err);
        }

        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewError> {
        Ok(self.reviews.write().await.remove(id).is_some())
    }
}
