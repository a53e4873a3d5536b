use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use service_core::error::AppError;

use crate::services::{AccessTokenClaims, TokenError};
use crate::AppState;

/// Path prefixes exempt from authentication: health probe, API
/// documentation, machine-readable schema.
pub const PUBLIC_PATH_PREFIXES: &[&str] = &["/health", "/docs", "/.well-known/openapi.json"];

/// Middleware enforcing bearer-token authentication on every route outside
/// the public allow-list. On success the decoded claims are attached to the
/// request extensions for downstream handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();
    if PUBLIC_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match token {
        Some(token) => token,
        None => {
            tracing::info!("Missing or invalid authentication credentials");
            return Err(AppError::Unauthorized(anyhow::anyhow!(
                "Authentication required. Please log in."
            )));
        }
    };

    let claims = match state.jwt.validate_token(token) {
        Ok(claims) => claims,
        Err(TokenError::Expired) => {
            tracing::info!("Expired bearer token");
            return Err(AppError::Unauthorized(anyhow::anyhow!(
                "Session expired. Please log in again."
            )));
        }
        Err(TokenError::Invalid) => {
            tracing::info!("Invalid bearer token");
            return Err(AppError::Unauthorized(anyhow::anyhow!(
                "Invalid authentication token."
            )));
        }
        Err(TokenError::Other(e)) => {
            tracing::info!(error = %e, "Unhandled authentication failure");
            return Err(AppError::Unauthorized(anyhow::anyhow!(
                "Authentication failed. Please log in."
            )));
        }
    };

    // Attach the principal for downstream handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Extractor yielding the authenticated principal attached by
/// `auth_middleware`. Fails as unauthenticated if a handler is reached
/// without one, which is unreachable behind the middleware but required of
/// any handler mounted outside it.
pub struct AuthUser(pub AccessTokenClaims);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<AccessTokenClaims>().ok_or_else(|| {
            tracing::info!("No authenticated principal attached to request");
            AppError::Unauthorized(anyhow::anyhow!("Authentication required. Please log in."))
        })?;

        Ok(AuthUser(claims.clone()))
    }
}
