use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::{ErrorResponse, ListNotificationTypesQuery};
use crate::middleware::AuthUser;
use crate::models::NotificationTypeListResponse;
use crate::utils::ValidatedQuery;
use crate::AppState;

/// Get all available notification types and their localized descriptions.
///
/// Unavailable types are hidden; deprecated types are returned with their
/// deprecation reason.
#[utoipa::path(
    get,
    path = "/api/notifications/",
    params(ListNotificationTypesQuery),
    responses(
        (status = 200, description = "List of notification types", body = NotificationTypeListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Invalid request data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn list_notification_types(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidatedQuery(query): ValidatedQuery<ListNotificationTypesQuery>,
) -> Result<Json<NotificationTypeListResponse>, AppError> {
    tracing::debug!(
        user = %claims.sub,
        lang = %query.lang,
        "Listing notification types"
    );

    let response = state.catalog.list_notification_types(&query.lang).await?;

    Ok(Json(response))
}
