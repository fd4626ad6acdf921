use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims embedded in an access token.
///
/// Serialized with the registered RFC 7519 names (`sub`, `iat`, `exp`) so the
/// payload stays readable by any standard JWT decoder. Fields are private:
/// claims are immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    #[serde(rename = "sub")]
    subject: String,

    /// Issued at (Unix timestamp)
    #[serde(rename = "iat")]
    issued_at: i64,

    /// Expiration time (Unix timestamp)
    #[serde(rename = "exp")]
    expires_at: i64,
}

impl Claims {
    /// Create claims from explicit timestamps.
    ///
    /// # Arguments
    /// * `subject` - Identity the token is issued for
    /// * `issued_at` - Unix timestamp of issuance
    /// * `expires_at` - Unix timestamp after which the token is rejected
    pub fn new(subject: impl Into<String>, issued_at: i64, expires_at: i64) -> Self {
        Self {
            subject: subject.into(),
            issued_at,
            expires_at,
        }
    }

    /// Create claims valid for `ttl` starting at `now`.
    ///
    /// Returns `None` when `now + ttl` falls outside the representable date range.
    pub fn issue(subject: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expiration = now.checked_add_signed(ttl)?;
        Some(Self::new(subject, now.timestamp(), expiration.timestamp()))
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issued_at(&self) -> i64 {
        self.issued_at
    }

    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// Expiry is inclusive: a token whose `exp` equals the current second is
    /// already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.expires_at <= current_timestamp
    }
}
