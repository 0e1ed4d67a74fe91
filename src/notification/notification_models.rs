use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// At most one row ever exists per (user_id, alert_id) pair; the unique
/// index on the table is the authoritative guard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub alert_id: Uuid,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// Notification row joined with its alert's display fields. The join is a
/// LEFT JOIN so rows survive alert deactivation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NotificationWithAlert {
    pub id: Uuid,
    pub user_id: Uuid,
    pub alert_id: Uuid,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub alert_title: Option<String>,
    pub severity: Option<String>,
}
