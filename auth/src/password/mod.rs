pub mod argon2;
pub mod errors;

pub use self::argon2::Argon2Hasher;
pub use errors::PasswordError;

/// One-way salted password hashing.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash `plaintext` with a freshly generated salt embedded in the output.
    ///
    /// # Errors
    /// * `HashingFailed` - Entropy or resource exhaustion
    fn hash_password(&self, plaintext: &str) -> Result<String, PasswordError>;

    /// Check `plaintext` against a hash produced by `hash_password`.
    ///
    /// Never fails: a mismatch or an unusable hash returns `false`.
    fn compare_passwords(&self, hash: &str, plaintext: &str) -> bool;
}
