//! Catalog assembly: turns stored notification type records into the
//! client-facing listing.

use std::sync::Arc;

use crate::models::{NotificationTypeListResponse, NotificationTypeResponse};
use crate::services::database::NotificationTypeStore;
use crate::services::error::ServiceError;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn NotificationTypeStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn NotificationTypeStore>) -> Self {
        Self { store }
    }

    /// List all available notification types.
    ///
    /// Unavailable records are hidden; deprecated records are kept and carry
    /// their `deprecated_reason`. The result is sorted ascending by `key` so
    /// clients get a stable ordering. The full `descriptions` map is returned
    /// regardless of `lang`, which is validated for shape at the HTTP
    /// boundary.
    pub async fn list_notification_types(
        &self,
        lang: &str,
    ) -> Result<NotificationTypeListResponse, ServiceError> {
        let records = self.store.fetch_all().await?;

        let mut notification_types: Vec<NotificationTypeResponse> = records
            .into_iter()
            .filter(|record| record.available)
            .map(NotificationTypeResponse::from)
            .collect();

        notification_types.sort_by(|a, b| a.key.cmp(&b.key));

        tracing::debug!(
            lang = %lang,
            count = notification_types.len(),
            "Assembled notification type catalog"
        );

        Ok(NotificationTypeListResponse { notification_types })
    }
}
