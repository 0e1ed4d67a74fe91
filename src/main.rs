mod alert;
mod auth;
mod db;
mod error;
mod geo;
mod location;
mod middleware;
mod notification;
mod routes;
mod state;

use db::{create_pool, run_migrations};
use notification::start_rescan_service;
use routes::create_router;
use state::{AppState, Config};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,health_alerts=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());

    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = create_pool(&database_url).await?;

    // Run migrations
    tracing::info!("Running migrations...");
    run_migrations(&db).await?;

    // Create repositories
    let alert_repository = alert::AlertRepository::new(db.clone());
    let location_repository = location::LocationRepository::new(db.clone());
    let notification_repository = notification::NotificationRepository::new(db.clone());

    // Create services
    let alert_service = alert::AlertService::new(alert_repository.clone());
    let notification_service = notification::NotificationService::new(
        alert_service.clone(),
        notification_repository.clone(),
    );
    let location_service = location::LocationService::new(
        location_repository.clone(),
        notification_service.clone(),
    );

    // Create application state
    let state = AppState {
        db: db.clone(),
        config: config.clone(),
        alert_repository,
        location_repository,
        notification_repository,
        alert_service,
        location_service,
        notification_service,
    };

    // Start the periodic geofence rescan
    let rescan_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = start_rescan_service(rescan_state).await {
            tracing::error!("Rescan service error: {:?}", e);
        }
    });

    // Create router
    let app = create_router(state);

    // Start server
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
