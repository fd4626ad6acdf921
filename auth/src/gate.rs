use std::sync::Arc;

use thiserror::Error;

use crate::jwt::TokenService;

const BEARER: &str = "bearer";

/// Identity established by a validated token, scoped to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub subject: String,
}

/// Reasons the gate refuses a request.
///
/// Token validation failures are deliberately folded into
/// `InvalidCredential`; which check failed is not observable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("No bearer credential was presented")]
    MissingCredential,

    #[error("Bearer credential was rejected")]
    InvalidCredential,
}

/// Framework-independent request gate.
///
/// Takes the raw `Authorization` header value and either yields the
/// authenticated identity or a `GateError`. Holds no mutable state; cloning
/// shares the underlying token service.
#[derive(Clone)]
pub struct AuthenticationGate {
    token_service: Arc<dyn TokenService>,
}

impl AuthenticationGate {
    pub fn new(token_service: Arc<dyn TokenService>) -> Self {
        Self { token_service }
    }

    /// Authenticate a request from its `Authorization` header value.
    ///
    /// # Errors
    /// * `MissingCredential` - Header absent, blank, or carries an empty bearer value
    /// * `InvalidCredential` - Token failed validation for any reason
    pub fn check(&self, authorization: Option<&str>) -> Result<AuthenticatedIdentity, GateError> {
        let token = bearer_token(authorization)?;

        let claims = self
            .token_service
            .validate(token)
            .map_err(|_| GateError::InvalidCredential)?;

        Ok(AuthenticatedIdentity {
            subject: claims.subject().to_string(),
        })
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The `Bearer` marker is matched case-insensitively and surrounding
/// whitespace is ignored. A value without the marker is returned as-is and
/// left for validation to reject.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, GateError> {
    let value = authorization
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(GateError::MissingCredential)?;

    let token = match value.get(..BEARER.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER) => value[BEARER.len()..].trim(),
        _ => value,
    };

    if token.is_empty() {
        return Err(GateError::MissingCredential);
    }

    Ok(token)
}
