use crate::{
    alert::{alert_dto::*, alert_handlers, Alert, AlertSeverity},
    location::{location_dto::*, location_handlers, UserLocation},
    middleware::auth_middleware,
    notification::{
        notification_dto::{DispatchedNotification, PaginatedNotifications},
        notification_handlers, Notification, NotificationWithAlert,
    },
    state::AppState,
};
use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        alert_handlers::create_alert,
        alert_handlers::get_alert,
        alert_handlers::update_alert,
        alert_handlers::deactivate_alert,
        alert_handlers::get_nearby_alerts,
        location_handlers::report_location,
        location_handlers::get_my_location,
        notification_handlers::get_notifications,
        notification_handlers::get_unread_notifications,
        notification_handlers::mark_notification_read,
        notification_handlers::mark_all_notifications_read,
    ),
    components(
        schemas(
            CreateAlertRequest,
            UpdateAlertRequest,
            NearbyAlertResponse,
            ReportLocationRequest,
            Alert,
            AlertSeverity,
            UserLocation,
            Notification,
            NotificationWithAlert,
            DispatchedNotification,
            PaginatedNotifications,
        )
    ),
    tags(
        (name = "alerts", description = "Health alert publishing and geofence queries"),
        (name = "location", description = "User location reporting"),
        (name = "notifications", description = "Alert notification read state")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            )
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let alert_routes = Router::new()
        .route("/", post(alert_handlers::create_alert))
        .route("/nearby", get(alert_handlers::get_nearby_alerts))
        .route(
            "/:id",
            get(alert_handlers::get_alert).patch(alert_handlers::update_alert),
        )
        .route("/:id/deactivate", post(alert_handlers::deactivate_alert))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let location_routes = Router::new()
        .route(
            "/",
            post(location_handlers::report_location).get(location_handlers::get_my_location),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let notification_routes = Router::new()
        .route("/", get(notification_handlers::get_notifications))
        .route("/unread", get(notification_handlers::get_unread_notifications))
        .route("/read-all", patch(notification_handlers::mark_all_notifications_read))
        .route("/:id/read", patch(notification_handlers::mark_notification_read))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = Router::new()
        .nest("/alerts", alert_routes)
        .nest("/location", location_routes)
        .nest("/notifications", notification_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
