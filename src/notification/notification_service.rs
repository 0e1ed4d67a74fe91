use super::notification_dto::DispatchedNotification;
use super::notification_repository::NotificationRepository;
use crate::alert::AlertService;
use crate::error::Result;
use crate::geo;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Creates at-most-one notification per (user, alert) pair. Both the
/// reactive path and the periodic rescan funnel through here, so the
/// dedup decision has a single owner.
#[derive(Clone)]
pub struct NotificationService {
    alert_service: AlertService,
    notification_repository: NotificationRepository,
}

impl NotificationService {
    pub fn new(
        alert_service: AlertService,
        notification_repository: NotificationRepository,
    ) -> Self {
        Self {
            alert_service,
            notification_repository,
        }
    }

    /// Matches the position against live geofences and records a
    /// notification for every alert the user has not been notified of yet.
    /// An empty result is the normal quiet outcome.
    ///
    /// Safe under concurrent calls for the same user: the exists() check is
    /// an optimization, and the conditional insert returning None means the
    /// racing trigger won the row. Either way the pair ends up with exactly
    /// one notification.
    pub async fn process_location(
        &self,
        user_id: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<DispatchedNotification>> {
        let now = Utc::now();
        let candidates = self
            .alert_service
            .find_live_alerts_containing(latitude, longitude, now)
            .await?;

        let mut created = Vec::new();

        for alert in candidates {
            if self.notification_repository.exists(user_id, alert.id).await? {
                continue;
            }

            let Some(notification) = self
                .notification_repository
                .insert(user_id, alert.id)
                .await?
            else {
                continue;
            };

            info!("Notified user {} of alert {}", user_id, alert.id);

            created.push(DispatchedNotification {
                distance_km: geo::distance_km(latitude, longitude, alert.latitude, alert.longitude),
                alert_title: alert.title,
                severity: alert.severity,
                notification,
            });
        }

        Ok(created)
    }
}
