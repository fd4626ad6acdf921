use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::inbound::http::router::AppState;

const UNAUTHORIZED_MESSAGE: &str = "Missing or invalid bearer token";

/// Middleware that runs the authentication gate and stores the resulting
/// `auth::AuthenticatedIdentity` in request extensions.
///
/// Every refusal produces the same 401 body.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let identity = state.gate.check(authorization).map_err(|e| {
        tracing::warn!(reason = %e, "Request rejected by authentication gate");
        ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
    })?;

    tracing::debug!(subject = %identity.subject, "Request authenticated");
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
