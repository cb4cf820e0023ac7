use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token payload.
///
/// Only `sub` and `exp` are required when decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create claims with an explicit expiration timestamp.
    pub fn new(subject: impl ToString, exp: i64) -> Self {
        Self {
            sub: subject.to_string(),
            exp,
            iat: None,
        }
    }

    /// Create claims for a subject expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Authenticated identity (username)
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Claims with sub, exp, and iat set
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.to_string(),
            exp: (now + ttl).timestamp(),
            iat: Some(now.timestamp()),
        }
    }
}
