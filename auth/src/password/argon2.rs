use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;
use super::CredentialHasher;

/// Password hashing implementation.
///
/// Argon2id with the library's default cost parameters and a fresh 16-byte
/// salt per hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Argon2Hasher {
    /// Hash a plaintext password.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Salt generation or hashing failed
    fn hash_password(&self, plaintext: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC hash.
    ///
    /// Output comparison inside `verify_password` is constant-time. A stored
    /// hash that does not parse is treated as a mismatch.
    fn compare_passwords(&self, hash: &str, plaintext: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
                return false;
            }
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let password = "my_secure_password";

        let hash = hasher
            .hash_password(password)
            .expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher.compare_passwords(&hash, password));
        assert!(!hasher.compare_passwords(&hash, "wrong_password"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash_password("same_password").unwrap();
        let second = hasher.hash_password("same_password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.compare_passwords(&first, "same_password"));
        assert!(hasher.compare_passwords(&second, "same_password"));
    }

    #[test]
    fn test_empty_password_round_trip() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash_password("").unwrap();

        assert!(hasher.compare_passwords(&hash, ""));
        assert!(!hasher.compare_passwords(&hash, " "));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = Argon2Hasher::new();
        assert!(!hasher.compare_passwords("invalid_hash", "password"));
    }
}
