use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use thiserror::Error;

use crate::config::JwtConfig;

/// JWT validation service for shared-secret bearer tokens.
///
/// Signature and expiry are always verified; tokens signed with a different
/// secret or algorithm than configured are rejected. Validation is a pure
/// function of (token, secret, algorithm, current time).
#[derive(Clone)]
pub struct JwtService {
    decoding_key: DecodingKey,
    validation: Validation,
}

/// Decoded access-token payload, attached to the request for the lifetime of
/// one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Display username
    #[serde(default)]
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
}

/// Classified token validation failure.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token validation failed: {0}")]
    Other(jsonwebtoken::errors::Error),
}

impl JwtService {
    /// Create a new JWT service from the configured secret and algorithm.
    pub fn new(config: &JwtConfig) -> Result<Self, AppError> {
        let algorithm: Algorithm = config.algorithm.parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Unsupported JWT algorithm '{}': {}",
                config.algorithm,
                e
            ))
        })?;

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        })
    }

    /// Validate and decode a bearer token.
    pub fn validate_token(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        let token_data = decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.into_kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => TokenError::Invalid,
                kind => TokenError::Other(kind.into()),
            })?;

        Ok(token_data.claims)
    }
}
