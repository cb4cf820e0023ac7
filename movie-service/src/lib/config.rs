use std::env;
use std::fmt;

use auth::AuthConfig;
use auth::HashingCost;
use config::builder::ConfigBuilder;
use config::builder::DefaultState;
use config::Config as RawConfig;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password_hashing: Option<PasswordHashingConfig>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: Option<String>,
    pub expiration_minutes: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &self.secret.as_ref().map(|_| "[redacted]"))
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

/// Argon2 cost override. Omit to use the library defaults.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct PasswordHashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl From<PasswordHashingConfig> for HashingCost {
    fn from(cost: PasswordHashingConfig) -> Self {
        HashingCost {
            memory_kib: cost.memory_kib,
            iterations: cost.iterations,
            parallelism: cost.parallelism,
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. `SECRET_KEY` (alias for `jwt.secret`)
    /// 2. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, JWT__SECRET, etc.)
    /// 3. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"));

        Self::build(builder, env::var("SECRET_KEY").ok())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        RawConfig::builder()
            .set_default("database.backend", "postgres")?
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 8000)?
            .set_default("jwt.expiration_minutes", 60)
    }

    fn build(
        builder: ConfigBuilder<DefaultState>,
        secret_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_override_option("jwt.secret", secret_key)?
            .build()?
            .try_deserialize()
    }

    /// Validate the authentication settings.
    ///
    /// # Errors
    /// * `MissingSecret` - No secret configured, or it is blank
    /// * `InvalidTokenTtl` - Non-positive token lifetime
    /// * `InvalidHashingCost` - Argon2 rejected the configured cost
    pub fn auth_config(&self) -> Result<AuthConfig, auth::ConfigError> {
        let secret = self.jwt.secret.clone().unwrap_or_default();
        let auth_config = AuthConfig::new(secret, self.jwt.expiration_minutes)?;

        match self.password_hashing {
            Some(cost) => auth_config.with_hashing_cost(cost.into()),
            None => Ok(auth_config),
        }
    }
}
