use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::ReplaceUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::PasswordError;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Orchestrates the user store and the credential hasher for registration
/// and login. Token issuance stays at the HTTP boundary.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token settings
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn hash_password(&self, password: &Password) -> Result<String, UserError> {
        self.authenticator
            .hash_password(password.expose())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()).into())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self.hash_password(&command.password)?;
        let created_user = self
            .repository
            .create(User::new(command.username, password_hash))
            .await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn authenticate(&self, username: &Username, password: &str) -> Result<User, UserError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            self.authenticator.verify_unknown_user(password);
            return Err(UserError::NotFoundByUsername(username.to_string()));
        };

        if !self
            .authenticator
            .verify_password(password, &user.password_hash)
        {
            tracing::debug!(username = %username, "Password verification failed");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn replace_user(
        &self,
        caller: &Username,
        id: &UserId,
        command: ReplaceUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if user.username != *caller {
            tracing::warn!(user_id = %id, caller = %caller, "Replace attempted by non-owner");
            return Err(UserError::NotOwner(id.to_string()));
        }

        if user.username != command.username {
            return Err(UserError::UsernameImmutable(command.username.to_string()));
        }

        user.password_hash = self.hash_password(&command.password)?;

        let updated_user = self.repository.update(user).await?;

        tracing::info!(user_id = %updated_user.id, "User replaced");

        Ok(updated_user)
    }
}
