use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::config::TokenConfig;
use super::errors::TokenError;
use super::TokenService;

/// JWT token handler for issuing and validating access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Tokens use the compact
/// `header.claims.signature` form with base64url segments.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler from injected configuration.
    ///
    /// # Arguments
    /// * `config` - Signing secret and token lifetime
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - The default placeholder secret must be overridden outside development
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret()),
            decoding_key: DecodingKey::from_secret(config.secret()),
            algorithm: Algorithm::HS256,
            ttl: config.ttl(),
        }
    }

    /// Issue a token for `subject` as of `now`.
    ///
    /// # Errors
    /// * `SigningFailed` - Expiry is out of range, or claims could not be encoded or signed
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::issue(subject, now, self.ttl).ok_or_else(|| {
            TokenError::SigningFailed("token expiry is out of range".to_string())
        })?;
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Validate a token as of `now`.
    ///
    /// The signature is verified before any claim is trusted; expiry is only
    /// evaluated on a correctly signed token.
    ///
    /// # Errors
    /// * `Malformed` - Token structure, header or claims cannot be decoded
    /// * `SignatureInvalid` - Signature does not match the configured secret
    /// * `Expired` - Signature is valid but `exp <= now`
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked in validate_at against the caller's clock, with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "iat", "exp"]);
        validation
    }
}

impl TokenService for JwtHandler {
    fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler(secret: &str) -> JwtHandler {
        JwtHandler::new(&TokenConfig::new(secret, Duration::minutes(15)))
    }

    #[test]
    fn test_issue_and_validate() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");

        let token = handler.issue("alice").expect("Failed to issue token");
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);

        let claims = handler.validate(&token).expect("Failed to validate token");
        assert_eq!(claims.subject(), "alice");
        assert_eq!(claims.expires_at() - claims.issued_at(), 15 * 60);
    }

    #[test]
    fn test_validate_after_ttl_is_expired() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");
        let issued = Utc::now();

        let token = handler.issue_at("alice", issued).unwrap();

        let just_before = issued + Duration::minutes(15) - Duration::seconds(1);
        assert!(handler.validate_at(&token, just_before).is_ok());

        let at_expiry = issued + Duration::minutes(15);
        assert_eq!(
            handler.validate_at(&token, at_expiry),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_issue_with_unrepresentable_ttl() {
        let handler = JwtHandler::new(&TokenConfig::new(
            "my_secret_key_at_least_32_bytes_long!",
            Duration::seconds(9_000_000_000_000),
        ));

        assert!(matches!(
            handler.issue("alice"),
            Err(TokenError::SigningFailed(_))
        ));
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let handler1 = handler("secret1_at_least_32_bytes_long_key!");
        let handler2 = handler("secret2_at_least_32_bytes_long_key!");

        let token = handler1.issue("alice").unwrap();

        assert_eq!(handler2.validate(&token), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_signature_checked_before_expiry() {
        let handler1 = handler("secret1_at_least_32_bytes_long_key!");
        let handler2 = handler("secret2_at_least_32_bytes_long_key!");

        let long_ago = Utc::now() - Duration::days(1);
        let token = handler1.issue_at("alice", long_ago).unwrap();

        assert_eq!(handler1.validate(&token), Err(TokenError::Expired));
        assert_eq!(handler2.validate(&token), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_swapped_claims_segment_fails_signature() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");

        let alice = handler.issue("alice").unwrap();
        let mallory = handler.issue("mallory").unwrap();

        let alice_parts: Vec<&str> = alice.split('.').collect();
        let mallory_parts: Vec<&str> = mallory.split('.').collect();
        let forged = format!("{}.{}.{}", alice_parts[0], mallory_parts[1], alice_parts[2]);

        assert_eq!(handler.validate(&forged), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_validate_malformed_token() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");

        for token in ["", "not-a-token", "invalid.token.string", "a.b"] {
            assert!(
                matches!(handler.validate(token), Err(TokenError::Malformed(_))),
                "expected Malformed for {:?}",
                token
            );
        }
    }

    #[test]
    fn test_validate_rejects_other_algorithm() {
        let secret = "my_secret_key_at_least_32_bytes_long!";
        let handler = handler(secret);

        let claims = Claims::issue("alice", Utc::now(), Duration::minutes(5)).unwrap();
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            handler.validate(&token),
            Err(TokenError::Malformed(_))
        ));
    }
}
