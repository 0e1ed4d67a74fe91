use super::alert_dto::{CreateAlertRequest, UpdateAlertRequest};
use super::alert_models::{Alert, AlertSeverity};
use super::alert_repository::AlertRepository;
use crate::error::{AppError, Result};
use crate::geo;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Service layer for alert publishing and geofence matching.
#[derive(Clone)]
pub struct AlertService {
    repo: AlertRepository,
}

impl AlertService {
    pub fn new(repo: AlertRepository) -> Self {
        Self { repo }
    }

    /// All alerts that are live at `now` and whose geofence contains the
    /// given point. Empty when nothing matches; never an error for "no
    /// alerts".
    pub async fn find_live_alerts_containing(
        &self,
        latitude: f64,
        longitude: f64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Alert>> {
        let live = self.repo.find_live(now).await?;

        Ok(live
            .into_iter()
            .filter(|alert| {
                geo::within_radius(latitude, longitude, alert.latitude, alert.longitude, alert.radius_km)
            })
            .collect())
    }

    pub async fn create_alert(&self, authority_id: Uuid, payload: CreateAlertRequest) -> Result<Alert> {
        let severity = match payload.severity.as_deref() {
            Some(value) => value
                .parse::<AlertSeverity>()
                .map_err(AppError::Validation)?,
            None => AlertSeverity::Medium,
        };
        let start_at = payload.start_at.unwrap_or_else(Utc::now);

        self.repo
            .create(
                authority_id,
                &payload.title,
                payload.description.as_deref(),
                payload.guidance.as_deref(),
                &severity.to_string(),
                payload.latitude,
                payload.longitude,
                payload.radius_km,
                start_at,
                payload.end_at,
            )
            .await
    }

    pub async fn get_alert(&self, alert_id: Uuid) -> Result<Alert> {
        self.repo
            .find_by_id(alert_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Alert not found".into()))
    }

    pub async fn update_alert(
        &self,
        authority_id: Uuid,
        alert_id: Uuid,
        payload: UpdateAlertRequest,
    ) -> Result<Alert> {
        let severity = payload
            .severity
            .as_deref()
            .map(str::parse::<AlertSeverity>)
            .transpose()
            .map_err(AppError::Validation)?
            .map(|s| s.to_string());

        let existing = self.get_alert(alert_id).await?;
        if existing.authority_id != authority_id {
            return Err(AppError::Forbidden("Alert belongs to another authority".into()));
        }

        self.repo
            .update(
                alert_id,
                payload.title.as_deref(),
                payload.description.as_deref(),
                payload.guidance.as_deref(),
                severity.as_deref(),
                payload.latitude,
                payload.longitude,
                payload.radius_km,
                payload.start_at,
                payload.end_at,
            )
            .await
    }

    pub async fn deactivate_alert(&self, authority_id: Uuid, alert_id: Uuid) -> Result<Alert> {
        let existing = self.get_alert(alert_id).await?;
        if existing.authority_id != authority_id {
            return Err(AppError::Forbidden("Alert belongs to another authority".into()));
        }

        self.repo
            .deactivate(alert_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Alert not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Severity is checked before any query runs, so a lazy pool that never
    // connects is enough to exercise the rejection path.
    fn service() -> AlertService {
        let pool = sqlx::PgPool::connect_lazy("postgres://localhost/unreachable").unwrap();
        AlertService::new(AlertRepository::new(pool))
    }

    fn create_request(severity: Option<&str>) -> CreateAlertRequest {
        CreateAlertRequest {
            title: "Dengue outbreak".to_string(),
            description: None,
            guidance: None,
            severity: severity.map(str::to_string),
            latitude: 23.8103,
            longitude: 90.4125,
            radius_km: 5.0,
            start_at: None,
            end_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_alert_rejects_unknown_severity() {
        let err = service()
            .create_alert(Uuid::new_v4(), create_request(Some("Bogus")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_alert_rejects_unknown_severity() {
        let payload = UpdateAlertRequest {
            title: None,
            description: None,
            guidance: None,
            severity: Some("Severe".to_string()),
            latitude: None,
            longitude: None,
            radius_km: None,
            start_at: None,
            end_at: None,
        };

        let err = service()
            .update_alert(Uuid::new_v4(), Uuid::new_v4(), payload)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
