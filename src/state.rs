use crate::alert::{AlertRepository, AlertService};
use crate::db::DbPool;
use crate::location::{LocationRepository, LocationService};
use crate::notification::{NotificationRepository, NotificationService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Arc<Config>,
    pub alert_repository: AlertRepository,
    pub location_repository: LocationRepository,
    pub notification_repository: NotificationRepository,
    pub alert_service: AlertService,
    pub location_service: LocationService,
    pub notification_service: NotificationService,
}

#[derive(Clone)]
pub struct Config {
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set"),
        }
    }
}
