use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters for the notification type listing.
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct ListNotificationTypesQuery {
    /// Language code for localization (e.g. 'en', 'fr'). Validated for
    /// shape only; the response always carries the full descriptions map.
    #[validate(length(
        min = 2,
        max = 5,
        message = "Language code must be between 2 and 5 characters"
    ))]
    #[serde(default = "default_lang")]
    #[param(example = "en")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

/// Standard error response shape.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Authentication required. Please log in.")]
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub errors: Option<Vec<serde_json::Value>>,
}
