use serde::Serialize;

use crate::config::AuthConfig;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token type reported alongside every access token.
pub const BEARER: &str = "bearer";

const DUMMY_PASSWORD: &str = "no-such-user-placeholder";

/// Authentication coordinator combining password hashing and token handling.
///
/// Built once from [`AuthConfig`] and shared by reference; holds no mutable
/// state.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    // Placeholder PHC string hashed with the configured cost.
    dummy_hash: Option<String>,
}

/// Access token returned after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl Authenticator {
    /// Create a new authenticator from validated settings.
    pub fn new(config: &AuthConfig) -> Self {
        let password_hasher = PasswordHasher::from_config(config);
        let dummy_hash = password_hasher
            .hash(DUMMY_PASSWORD)
            .map_err(|e| tracing::warn!(error = %e, "Failed to prepare placeholder hash"))
            .ok();

        Self {
            password_hasher,
            jwt_handler: JwtHandler::from_config(config),
            dummy_hash,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Run a full verification for a user that does not exist.
    ///
    /// Always returns `false`; it only spends the same Argon2 work as
    /// [`Authenticator::verify_password`] on a real record.
    pub fn verify_unknown_user(&self, password: &str) -> bool {
        if let Some(dummy_hash) = &self.dummy_hash {
            let _ = self.password_hasher.verify(password, dummy_hash);
        }
        false
    }

    /// Issue a bearer token for an authenticated subject.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<AccessToken, JwtError> {
        let access_token = self.jwt_handler.issue(subject)?;

        Ok(AccessToken {
            access_token,
            token_type: BEARER.to_string(),
        })
    }

    /// Validate a bearer token and return its subject.
    ///
    /// # Errors
    /// * `InvalidSignature`, `Expired`, `Malformed`
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        self.jwt_handler.verify(token)
    }
}
