pub mod claims;
pub mod config;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use config::TokenConfig;
pub use errors::TokenError;
pub use handler::JwtHandler;

/// Issues and validates signed access tokens.
///
/// Implementations are stateless over their inputs plus read-only
/// configuration, so one instance is shared across all request tasks.
pub trait TokenService: Send + Sync + 'static {
    /// Issue a token whose claims name `subject`, valid from now for the
    /// configured TTL.
    ///
    /// # Errors
    /// * `SigningFailed` - Signing the claims failed
    fn issue(&self, subject: &str) -> Result<String, TokenError>;

    /// Validate `token` and return its claims.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be decoded
    /// * `SignatureInvalid` - Signature does not verify
    /// * `Expired` - Validity window has elapsed
    fn validate(&self, token: &str) -> Result<Claims, TokenError>;
}
