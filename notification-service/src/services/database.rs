//! Notification type record store: trait, PostgreSQL implementation, and an
//! in-memory implementation for tests and local development.

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::types::Json;

use crate::models::{NewNotificationType, NotificationType};
use crate::services::error::ServiceError;

/// Capability set the catalog logic needs from persistent storage. Filtering
/// and ordering are business logic and deliberately not pushed down here.
#[async_trait]
pub trait NotificationTypeStore: Send + Sync {
    /// Fetch every stored notification type record, unfiltered.
    async fn fetch_all(&self) -> Result<Vec<NotificationType>, ServiceError>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new store from a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Health check - ping the database.
    pub async fn health_check(&self) -> Result<(), ServiceError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new notification type. Records are maintained out of band;
    /// this exists for seeding and tests, not for the API surface.
    pub async fn insert_notification_type(
        &self,
        record: &NewNotificationType,
    ) -> Result<NotificationType, ServiceError> {
        let inserted = sqlx::query_as::<_, NotificationType>(
            r#"
            INSERT INTO notification_types (key, descriptions, available, deprecated, deprecated_reason)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&record.key)
        .bind(Json(&record.descriptions))
        .bind(record.available)
        .bind(record.deprecated)
        .bind(&record.deprecated_reason)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }
}

#[async_trait]
impl NotificationTypeStore for Database {
    async fn fetch_all(&self) -> Result<Vec<NotificationType>, ServiceError> {
        let records = sqlx::query_as::<_, NotificationType>("SELECT * FROM notification_types")
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }
}

/// In-memory store for tests and local development. `failing()` yields a
/// store whose every fetch reports a database failure.
pub struct InMemoryStore {
    records: Vec<NotificationType>,
    fail: bool,
}

impl InMemoryStore {
    pub fn new(records: Vec<NotificationType>) -> Self {
        Self {
            records,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl NotificationTypeStore for InMemoryStore {
    async fn fetch_all(&self) -> Result<Vec<NotificationType>, ServiceError> {
        if self.fail {
            return Err(ServiceError::Database(anyhow::anyhow!(
                "simulated store failure"
            )));
        }
        Ok(self.records.clone())
    }
}
