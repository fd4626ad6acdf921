//! Authentication utilities library
//!
//! Stateless token authentication building blocks:
//! - Password hashing (Argon2id) behind the `CredentialHasher` capability
//! - Signed, time-limited access tokens (HS256 JWT) behind `TokenService`
//! - `AuthenticationGate`, the bearer-token check applied to protected requests
//!
//! Nothing here reads the environment: secrets and lifetimes arrive through
//! `TokenConfig`, constructed by the hosting service.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{Argon2Hasher, CredentialHasher};
//!
//! let hasher = Argon2Hasher::new();
//! let hash = hasher.hash_password("my_password").unwrap();
//! assert!(hasher.compare_passwords(&hash, "my_password"));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{JwtHandler, TokenConfig, TokenService};
//!
//! let handler = JwtHandler::new(&TokenConfig::default());
//! let token = handler.issue("alice").unwrap();
//! let claims = handler.validate(&token).unwrap();
//! assert_eq!(claims.subject(), "alice");
//! ```
//!
//! ## Gate
//! ```
//! use std::sync::Arc;
//! use auth::{AuthenticationGate, JwtHandler, TokenConfig, TokenService};
//!
//! let handler = Arc::new(JwtHandler::new(&TokenConfig::default()));
//! let token = handler.issue("alice").unwrap();
//!
//! let gate = AuthenticationGate::new(handler);
//! let identity = gate.check(Some(&format!("Bearer {}", token))).unwrap();
//! assert_eq!(identity.subject, "alice");
//! ```

pub mod gate;
pub mod jwt;
pub mod password;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used items
pub use gate::AuthenticatedIdentity;
pub use gate::AuthenticationGate;
pub use gate::GateError;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenConfig;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use password::Argon2Hasher;
pub use password::CredentialHasher;
pub use password::PasswordError;
