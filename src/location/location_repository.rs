use super::location_models::UserLocation;
use crate::error::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserLocation>> {
        let location = sqlx::query_as::<_, UserLocation>(
            "SELECT * FROM user_locations WHERE user_id = $1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    /// One row per user; an absent consent flag keeps the stored value
    /// (defaults to true on first report).
    pub async fn upsert(
        &self,
        user_id: Uuid,
        latitude: f64,
        longitude: f64,
        location_allowed: Option<bool>,
    ) -> Result<UserLocation> {
        let location = sqlx::query_as::<_, UserLocation>(
            "INSERT INTO user_locations (user_id, latitude, longitude, location_allowed)
             VALUES ($1, $2, $3, COALESCE($4, true))
             ON CONFLICT (user_id) DO UPDATE SET
                latitude = $2,
                longitude = $3,
                location_allowed = COALESCE($4, user_locations.location_allowed),
                last_updated = NOW()
             RETURNING *"
        )
        .bind(user_id)
        .bind(latitude)
        .bind(longitude)
        .bind(location_allowed)
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    /// Consenting users with a usable position reported since `since`.
    /// Consent is enforced here so the rescan never sees gated rows.
    pub async fn active_since(&self, since: DateTime<Utc>) -> Result<Vec<UserLocation>> {
        let locations = sqlx::query_as::<_, UserLocation>(
            "SELECT * FROM user_locations
             WHERE location_allowed = true
               AND last_updated >= $1
               AND latitude IS NOT NULL
               AND longitude IS NOT NULL"
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }
}
