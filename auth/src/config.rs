use std::fmt;

use argon2::Params;
use chrono::Duration;
use thiserror::Error;

/// Error type for authentication configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Token signing secret is missing or empty")]
    MissingSecret,

    #[error("Token lifetime must be positive, got {0} minutes")]
    InvalidTokenTtl(i64),

    #[error("Invalid password hashing cost: {0}")]
    InvalidHashingCost(String),
}

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingCost {
    /// Memory size in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl HashingCost {
    fn to_params(self) -> Result<Params, ConfigError> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| ConfigError::InvalidHashingCost(e.to_string()))
    }
}

impl Default for HashingCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Process-wide authentication settings.
///
/// Built once at startup from the service configuration and handed to the
/// password hasher and the token handler. Construction fails instead of
/// falling back to a default secret.
#[derive(Clone)]
pub struct AuthConfig {
    secret: Vec<u8>,
    token_ttl: Duration,
    hashing_params: Params,
}

impl AuthConfig {
    /// Validate and build authentication settings.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret
    /// * `token_ttl_minutes` - Lifetime of issued access tokens
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty or whitespace only
    /// * `InvalidTokenTtl` - Lifetime is zero or negative
    pub fn new(secret: impl Into<Vec<u8>>, token_ttl_minutes: i64) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(ConfigError::MissingSecret);
        }

        if token_ttl_minutes <= 0 {
            return Err(ConfigError::InvalidTokenTtl(token_ttl_minutes));
        }

        Ok(Self {
            secret,
            token_ttl: Duration::minutes(token_ttl_minutes),
            hashing_params: Params::default(),
        })
    }

    /// Override the Argon2 cost used for new hashes.
    ///
    /// # Errors
    /// * `InvalidHashingCost` - Parameters rejected by Argon2
    pub fn with_hashing_cost(mut self, cost: HashingCost) -> Result<Self, ConfigError> {
        self.hashing_params = cost.to_params()?;
        Ok(self)
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn hashing_params(&self) -> &Params {
        &self.hashing_params
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"[redacted]")
            .field("token_ttl", &self.token_ttl)
            .field("hashing_params", &self.hashing_params)
            .finish()
    }
}
