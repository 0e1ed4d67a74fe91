use super::location_dto::ReportLocationRequest;
use super::location_models::UserLocation;
use super::location_repository::LocationRepository;
use crate::error::Result;
use crate::geo;
use crate::notification::NotificationService;
use tracing::error;
use uuid::Uuid;

/// Movement below this distance is treated as GPS jitter and does not
/// trigger matching. The stored location still advances.
const SIGNIFICANT_MOVE_KM: f64 = 0.1;

/// A first-ever report is always significant; afterwards only moves beyond
/// the hysteresis threshold are.
pub fn is_significant_move(old: Option<(f64, f64)>, latitude: f64, longitude: f64) -> bool {
    match old {
        Some((old_lat, old_lon)) => {
            geo::distance_km(old_lat, old_lon, latitude, longitude) > SIGNIFICANT_MOVE_KM
        }
        None => true,
    }
}

/// Service layer for location reports. Persists the update synchronously and
/// hands significant moves to the dispatcher in the background.
#[derive(Clone)]
pub struct LocationService {
    repo: LocationRepository,
    dispatcher: NotificationService,
}

impl LocationService {
    pub fn new(repo: LocationRepository, dispatcher: NotificationService) -> Self {
        Self { repo, dispatcher }
    }

    /// Upserts the user's position and, when the move is significant and the
    /// user consents, spawns geofence matching. The caller gets an ack as
    /// soon as the upsert lands; dispatch failures are logged, never
    /// surfaced, and never roll back the stored location.
    pub async fn report_location(
        &self,
        user_id: Uuid,
        payload: ReportLocationRequest,
    ) -> Result<UserLocation> {
        let existing = self.repo.find_by_user(user_id).await?;
        let old_position = existing
            .as_ref()
            .and_then(|loc| loc.latitude.zip(loc.longitude));

        let changed = is_significant_move(old_position, payload.latitude, payload.longitude);

        let location = self
            .repo
            .upsert(user_id, payload.latitude, payload.longitude, payload.location_allowed)
            .await?;

        if changed && location.location_allowed {
            let dispatcher = self.dispatcher.clone();
            let latitude = payload.latitude;
            let longitude = payload.longitude;

            tokio::spawn(async move {
                if let Err(e) = dispatcher.process_location(user_id, latitude, longitude).await {
                    error!("Notification dispatch failed for user {}: {:?}", user_id, e);
                }
            });
        }

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_report_is_significant() {
        assert!(is_significant_move(None, 23.8103, 90.4125));
    }

    #[test]
    fn test_same_position_is_not_significant() {
        assert!(!is_significant_move(Some((23.8103, 90.4125)), 23.8103, 90.4125));
    }

    #[test]
    fn test_fifty_meter_jitter_is_not_significant() {
        // ~50 m north of the old position, below the 100 m threshold
        assert!(!is_significant_move(Some((23.8103, 90.4125)), 23.81075, 90.4125));
    }

    #[test]
    fn test_move_beyond_threshold_is_significant() {
        // ~1.1 km north
        assert!(is_significant_move(Some((23.8103, 90.4125)), 23.8203, 90.4125));
    }
}
