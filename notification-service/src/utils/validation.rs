use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// Query extractor that runs `validator` rules after deserialization.
///
/// Deserialization failures map to 400; rule violations map to the 422
/// invalid-request-data shape via `AppError::ValidationError`.
pub struct ValidatedQuery<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Query parse error: {}", e)))?;

        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}
