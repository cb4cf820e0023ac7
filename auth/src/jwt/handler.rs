use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;
use crate::config::AuthConfig;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256). Tokens are stateless: nothing is stored
/// server-side and there is no revocation.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    token_ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            token_ttl,
        }
    }

    /// Create a handler from validated authentication settings.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.secret(), config.token_ttl())
    }

    /// Issue a token for `subject`, expiring after the configured TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, self.token_ttl))
    }

    /// Verify a token and return its subject.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `Expired` - `exp` is in the past
    /// * `Malformed` - Token cannot be decoded or lacks `sub`/`exp`
    pub fn verify(&self, token: &str) -> Result<String, JwtError> {
        self.decode(token).map(|claims| claims.sub)
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The signature is checked before the expiry, so a forged token is
    /// reported as `InvalidSignature` even when it is also expired.
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }
}
