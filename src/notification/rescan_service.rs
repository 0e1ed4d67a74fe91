use super::notification_service::NotificationService;
use crate::location::LocationRepository;
use crate::state::AppState;
use chrono::{Duration, Utc};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

/// Users whose last report is older than this are skipped by the rescan.
const RESCAN_WINDOW_HOURS: i64 = 1;

/// Upper bound on one user's matching pass so a stuck store call cannot
/// stall the rest of the batch.
const PER_USER_TIMEOUT_SECS: u64 = 10;

/// Safety net for the reactive path: alerts published after a user's last
/// location report, and dispatches that failed in the background, are
/// picked up here. Runs every 15 minutes.
pub async fn start_rescan_service(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 */15 * * * *", move |_uuid, _l| {
        let state = state.clone();

        Box::pin(async move {
            if let Err(e) = run_rescan(&state.location_repository, &state.notification_service).await {
                error!("Rescan failed: {:?}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Rescan service started");
    Ok(())
}

/// One full pass over recently active, consenting users. Each user runs in
/// its own failure boundary: an error or timeout is logged and the scan
/// moves on, so one bad row never aborts the batch.
pub async fn run_rescan(
    locations: &LocationRepository,
    dispatcher: &NotificationService,
) -> crate::error::Result<()> {
    let since = Utc::now() - Duration::hours(RESCAN_WINDOW_HOURS);
    let users = locations.active_since(since).await?;

    info!("Rescanning {} recently active users", users.len());

    for location in users {
        let (latitude, longitude) = match (location.latitude, location.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => continue,
        };

        let result = tokio::time::timeout(
            std::time::Duration::from_secs(PER_USER_TIMEOUT_SECS),
            dispatcher.process_location(location.user_id, latitude, longitude),
        )
        .await;

        match result {
            Ok(Ok(created)) => {
                if !created.is_empty() {
                    info!(
                        "Rescan created {} notifications for user {}",
                        created.len(),
                        location.user_id
                    );
                }
            }
            Ok(Err(e)) => {
                error!("Rescan failed for user {}: {:?}", location.user_id, e);
            }
            Err(_) => {
                error!("Rescan timed out for user {}", location.user_id);
            }
        }
    }

    Ok(())
}
