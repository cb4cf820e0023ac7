//! Authentication utilities library
//!
//! Provides the authentication primitives used by the movie service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (JWT, HS256)
//! - Validated settings shared by both
//!
//! User lookup lives in the service; this crate never touches storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("my_password", "not-a-hash"));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(60));
//! let token = handler.issue("alice").unwrap();
//! assert_eq!(handler.verify(&token).unwrap(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthConfig, Authenticator};
//!
//! let config = AuthConfig::new("secret_key_at_least_32_bytes_long!", 60).unwrap();
//! let auth = Authenticator::new(&config);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! assert!(auth.verify_password("password123", &hash));
//! let token = auth.issue_token("alice").unwrap();
//!
//! // Protected request: validate token
//! let subject = auth.validate_token(&token.access_token).unwrap();
//! assert_eq!(subject, "alice");
//! ```

pub mod authenticator;
pub mod config;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AccessToken;
pub use authenticator::Authenticator;
pub use config::AuthConfig;
pub use config::ConfigError;
pub use config::HashingCost;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
