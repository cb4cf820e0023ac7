use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::ReplaceUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// Checks that the username is free, hashes the password and persists
    /// the record. The check and the insert are separate store calls.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and return the matching user.
    ///
    /// # Arguments
    /// * `username` - Exact username to look up
    /// * `password` - Plaintext password to verify
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `InvalidCredentials` - Password does not match
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, username: &Username, password: &str) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Replace the stored credentials of the caller's own record.
    ///
    /// The username is the token subject, so it is fixed for the lifetime of
    /// the record: the command must repeat it unchanged and only the password
    /// is re-hashed.
    ///
    /// # Arguments
    /// * `caller` - Authenticated token subject
    /// * `id` - Record to replace
    /// * `command` - Replacement username (unchanged) and new password
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `NotOwner` - Record belongs to another user
    /// * `UsernameImmutable` - Command carries a different username
    /// * `DatabaseError` - Database operation failed
    async fn replace_user(
        &self,
        caller: &Username,
        id: &UserId,
        command: ReplaceUserCommand,
    ) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Store rejected a duplicate username
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by exact username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Overwrite an existing user in storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;
}
