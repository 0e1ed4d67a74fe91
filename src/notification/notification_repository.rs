use super::notification_models::{Notification, NotificationWithAlert};
use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, user_id: Uuid, alert_id: Uuid) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM alert_notifications WHERE user_id = $1 AND alert_id = $2)"
        )
        .bind(user_id)
        .bind(alert_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Conditional insert against the UNIQUE (user_id, alert_id) index.
    /// Returns None when another trigger already created the row; callers
    /// treat that as a benign no-op, not an error.
    pub async fn insert(&self, user_id: Uuid, alert_id: Uuid) -> Result<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO alert_notifications (user_id, alert_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, alert_id) DO NOTHING
             RETURNING *"
        )
        .bind(user_id)
        .bind(alert_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notification)
    }

    pub async fn find_all_by_user(
        &self,
        user_id: Uuid,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<NotificationWithAlert>> {
        let notifications = sqlx::query_as::<_, NotificationWithAlert>(
            "SELECT n.id, n.user_id, n.alert_id, n.is_read, n.created_at, n.read_at,
                    a.title AS alert_title, a.severity
             FROM alert_notifications n
             LEFT JOIN alerts a ON a.id = n.alert_id
             WHERE n.user_id = $1
             ORDER BY n.created_at DESC
             LIMIT $2 OFFSET $3"
        )
        .bind(user_id)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM alert_notifications WHERE user_id = $1"
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn find_unread_by_user(&self, user_id: Uuid) -> Result<Vec<NotificationWithAlert>> {
        let notifications = sqlx::query_as::<_, NotificationWithAlert>(
            "SELECT n.id, n.user_id, n.alert_id, n.is_read, n.created_at, n.read_at,
                    a.title AS alert_title, a.severity
             FROM alert_notifications n
             LEFT JOIN alerts a ON a.id = n.alert_id
             WHERE n.user_id = $1 AND n.is_read = false
             ORDER BY n.created_at DESC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    /// Idempotent: re-marking keeps the original read_at stamp. Scoped by
    /// user_id so callers can only flip their own rows.
    pub async fn mark_as_read(&self, id: Uuid, user_id: Uuid) -> Result<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            "UPDATE alert_notifications
             SET is_read = true, read_at = COALESCE(read_at, NOW())
             WHERE id = $1 AND user_id = $2
             RETURNING *"
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notification)
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE alert_notifications
             SET is_read = true, read_at = NOW()
             WHERE user_id = $1 AND is_read = false"
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
