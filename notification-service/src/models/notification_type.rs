//! NotificationType model - the notification type catalog entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::HashMap;
use utoipa::ToSchema;

/// A named category of notification the platform can send.
///
/// `key` is the stable programmatic name clients rely on; `descriptions`
/// holds one entry per language code, with `"en"` expected in practice.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationType {
    pub id: i32,
    pub key: String,
    pub descriptions: Json<HashMap<String, String>>,
    pub available: bool,
    pub deprecated: bool,
    pub deprecated_reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl NotificationType {
    /// Localized description with fallback: the requested language if
    /// present, else `"en"`, else the empty string.
    pub fn description_for(&self, lang: &str) -> &str {
        self.descriptions
            .get(lang)
            .or_else(|| self.descriptions.get("en"))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Fields for inserting a new notification type (seeding and tests; the API
/// surface itself is read-only).
#[derive(Debug, Clone)]
pub struct NewNotificationType {
    pub key: String,
    pub descriptions: HashMap<String, String>,
    pub available: bool,
    pub deprecated: bool,
    pub deprecated_reason: Option<String>,
}

/// Notification type as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationTypeResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "email_alert")]
    pub key: String,
    /// All localized variants; selection for display is a client concern.
    pub descriptions: HashMap<String, String>,
    pub available: bool,
    pub deprecated: bool,
    #[schema(example = "Replaced by push notifications")]
    pub deprecated_reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<NotificationType> for NotificationTypeResponse {
    fn from(nt: NotificationType) -> Self {
        Self {
            id: nt.id,
            key: nt.key,
            descriptions: nt.descriptions.0,
            available: nt.available,
            deprecated: nt.deprecated,
            deprecated_reason: nt.deprecated_reason,
            created_at: nt.created_at,
            updated_at: nt.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationTypeListResponse {
    pub notification_types: Vec<NotificationTypeResponse>,
}
