use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One row per user, upserted on every report. Consent gates matching, not
/// storage: coordinates may be present while `location_allowed` is false.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserLocation {
    pub user_id: Uuid,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_allowed: bool,
    pub last_updated: DateTime<Utc>,
}
