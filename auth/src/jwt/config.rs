use std::fmt;

use chrono::Duration;

/// Placeholder signing secret used when none is configured.
pub const DEFAULT_SECRET: &str = "mysecretkey";

/// Default token lifetime in seconds (15 minutes).
pub const DEFAULT_TTL_SECONDS: i64 = 15 * 60;

/// Longest accepted token lifetime in seconds (one year).
pub const MAX_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Immutable signing configuration, built once at startup and injected into
/// the token service.
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    ttl: Duration,
}

impl TokenConfig {
    /// # Arguments
    /// * `secret` - HMAC secret; changing it invalidates every issued token
    /// * `ttl` - How long an issued token remains valid
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET, Duration::seconds(DEFAULT_TTL_SECONDS))
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[redacted]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
