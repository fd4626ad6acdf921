//! Deterministic stand-ins for the cryptographic services.
//!
//! These let flows built on [`CredentialHasher`] and [`TokenService`] be
//! tested without paying for Argon2 or depending on the wall clock. They
//! provide no security whatsoever.

use crate::jwt::Claims;
use crate::jwt::TokenError;
use crate::jwt::TokenService;
use crate::password::CredentialHasher;
use crate::password::PasswordError;

const FAKE_HASH_PREFIX: &str = "fake-hash$";
const FAKE_TOKEN_PREFIX: &str = "fake-token.";

/// Token accepted by [`FakeTokenService`] as correctly signed but expired.
pub const EXPIRED_TOKEN: &str = "fake-expired-token";

/// Token accepted by [`FakeTokenService`] as structurally valid but forged.
pub const FORGED_TOKEN: &str = "fake-forged-token";

/// Hasher whose output is a fixed prefix plus the plaintext.
#[derive(Debug, Clone, Default)]
pub struct FakeCredentialHasher {
    fail: bool,
}

impl FakeCredentialHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A hasher whose `hash_password` always fails.
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl CredentialHasher for FakeCredentialHasher {
    fn hash_password(&self, plaintext: &str) -> Result<String, PasswordError> {
        if self.fail {
            return Err(PasswordError::HashingFailed("fake hasher failure".to_string()));
        }
        Ok(format!("{}{}", FAKE_HASH_PREFIX, plaintext))
    }

    fn compare_passwords(&self, hash: &str, plaintext: &str) -> bool {
        hash.strip_prefix(FAKE_HASH_PREFIX) == Some(plaintext)
    }
}

/// Token service whose tokens are `fake-token.<subject>`.
///
/// Validation never expires a token it issued; [`EXPIRED_TOKEN`] and
/// [`FORGED_TOKEN`] exercise the other outcomes.
#[derive(Debug, Clone, Default)]
pub struct FakeTokenService {
    fail: bool,
}

impl FakeTokenService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token service whose `issue` always fails.
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl TokenService for FakeTokenService {
    fn issue(&self, subject: &str) -> Result<String, TokenError> {
        if self.fail {
            return Err(TokenError::SigningFailed("fake signer failure".to_string()));
        }
        Ok(format!("{}{}", FAKE_TOKEN_PREFIX, subject))
    }

    fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        match token {
            EXPIRED_TOKEN => Err(TokenError::Expired),
            FORGED_TOKEN => Err(TokenError::SignatureInvalid),
            _ => token
                .strip_prefix(FAKE_TOKEN_PREFIX)
                .filter(|subject| !subject.is_empty())
                .map(|subject| Claims::new(subject, 0, i64::MAX))
                .ok_or_else(|| TokenError::Malformed("not a fake token".to_string())),
        }
    }
}
