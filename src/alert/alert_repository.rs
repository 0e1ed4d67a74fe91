use super::alert_models::Alert;
use crate::error::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct AlertRepository {
    pool: PgPool,
}

impl AlertRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        authority_id: Uuid,
        title: &str,
        description: Option<&str>,
        guidance: Option<&str>,
        severity: &str,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
        start_at: DateTime<Utc>,
        end_at: Option<DateTime<Utc>>,
    ) -> Result<Alert> {
        let alert = sqlx::query_as::<_, Alert>(
            "INSERT INTO alerts (authority_id, title, description, guidance, severity,
                                 latitude, longitude, radius_km, start_at, end_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *"
        )
        .bind(authority_id)
        .bind(title)
        .bind(description)
        .bind(guidance)
        .bind(severity)
        .bind(latitude)
        .bind(longitude)
        .bind(radius_km)
        .bind(start_at)
        .bind(end_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(alert)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Alert>> {
        let alert = sqlx::query_as::<_, Alert>("SELECT * FROM alerts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(alert)
    }

    /// Alerts whose active window covers `now`. The radius filter runs
    /// in-process on top of this coarse fetch.
    pub async fn find_live(&self, now: DateTime<Utc>) -> Result<Vec<Alert>> {
        let alerts = sqlx::query_as::<_, Alert>(
            "SELECT * FROM alerts
             WHERE active = true
               AND start_at <= $1
               AND (end_at IS NULL OR end_at >= $1)"
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;
        Ok(alerts)
    }

    pub async fn update(
        &self,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        guidance: Option<&str>,
        severity: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius_km: Option<f64>,
        start_at: Option<DateTime<Utc>>,
        end_at: Option<DateTime<Utc>>,
    ) -> Result<Alert> {
        let alert = sqlx::query_as::<_, Alert>(
            "UPDATE alerts SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                guidance = COALESCE($3, guidance),
                severity = COALESCE($4, severity),
                latitude = COALESCE($5, latitude),
                longitude = COALESCE($6, longitude),
                radius_km = COALESCE($7, radius_km),
                start_at = COALESCE($8, start_at),
                end_at = COALESCE($9, end_at),
                updated_at = NOW()
             WHERE id = $10
             RETURNING *"
        )
        .bind(title)
        .bind(description)
        .bind(guidance)
        .bind(severity)
        .bind(latitude)
        .bind(longitude)
        .bind(radius_km)
        .bind(start_at)
        .bind(end_at)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(alert)
    }

    /// Deactivation stamps the end of the active window; alerts are never
    /// hard-deleted while notifications reference them.
    pub async fn deactivate(&self, id: Uuid) -> Result<Option<Alert>> {
        let alert = sqlx::query_as::<_, Alert>(
            "UPDATE alerts SET active = false, end_at = NOW(), updated_at = NOW()
             WHERE id = $1
             RETURNING *"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(alert)
    }
}
