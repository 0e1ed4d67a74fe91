use super::alert_dto::{CreateAlertRequest, NearbyAlertResponse, UpdateAlertRequest};
use super::alert_models::Alert;
use crate::{
    error::{AppError, Result},
    geo,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

/// Publish a new alert owned by the acting authority
#[utoipa::path(
    post,
    path = "/api/alerts",
    request_body = CreateAlertRequest,
    responses(
        (status = 201, description = "Alert created", body = Alert),
        (status = 400, description = "Invalid alert payload"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "alerts",
    security(("bearer_auth" = []))
)]
pub async fn create_alert(
    State(state): State<AppState>,
    Extension(authority_id): Extension<Uuid>,
    Json(payload): Json<CreateAlertRequest>,
) -> Result<(StatusCode, Json<Alert>)> {
    payload.validate()?;

    let alert = state.alert_service.create_alert(authority_id, payload).await?;

    Ok((StatusCode::CREATED, Json(alert)))
}

/// Get a single alert by id
#[utoipa::path(
    get,
    path = "/api/alerts/{id}",
    params(
        ("id" = Uuid, Path, description = "Alert ID")
    ),
    responses(
        (status = 200, description = "Alert", body = Alert),
        (status = 404, description = "Alert not found"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "alerts",
    security(("bearer_auth" = []))
)]
pub async fn get_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<Uuid>,
) -> Result<Json<Alert>> {
    let alert = state.alert_service.get_alert(alert_id).await?;

    Ok(Json(alert))
}

/// Partially update an alert (owning authority only)
#[utoipa::path(
    patch,
    path = "/api/alerts/{id}",
    params(
        ("id" = Uuid, Path, description = "Alert ID")
    ),
    request_body = UpdateAlertRequest,
    responses(
        (status = 200, description = "Alert updated", body = Alert),
        (status = 403, description = "Alert belongs to another authority"),
        (status = 404, description = "Alert not found"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "alerts",
    security(("bearer_auth" = []))
)]
pub async fn update_alert(
    State(state): State<AppState>,
    Extension(authority_id): Extension<Uuid>,
    Path(alert_id): Path<Uuid>,
    Json(payload): Json<UpdateAlertRequest>,
) -> Result<Json<Alert>> {
    payload.validate()?;

    let alert = state
        .alert_service
        .update_alert(authority_id, alert_id, payload)
        .await?;

    Ok(Json(alert))
}

/// Deactivate an alert, closing its active window (owning authority only)
#[utoipa::path(
    post,
    path = "/api/alerts/{id}/deactivate",
    params(
        ("id" = Uuid, Path, description = "Alert ID")
    ),
    responses(
        (status = 200, description = "Alert deactivated", body = Alert),
        (status = 403, description = "Alert belongs to another authority"),
        (status = 404, description = "Alert not found"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "alerts",
    security(("bearer_auth" = []))
)]
pub async fn deactivate_alert(
    State(state): State<AppState>,
    Extension(authority_id): Extension<Uuid>,
    Path(alert_id): Path<Uuid>,
) -> Result<Json<Alert>> {
    let alert = state
        .alert_service
        .deactivate_alert(authority_id, alert_id)
        .await?;

    Ok(Json(alert))
}

/// Live alerts whose geofence contains the authenticated user's stored location
#[utoipa::path(
    get,
    path = "/api/alerts/nearby",
    responses(
        (status = 200, description = "Live alerts around the user", body = Vec<NearbyAlertResponse>),
        (status = 400, description = "No usable location on record"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "alerts",
    security(("bearer_auth" = []))
)]
pub async fn get_nearby_alerts(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
) -> Result<Json<Vec<NearbyAlertResponse>>> {
    let location = state
        .location_repository
        .find_by_user(user_id)
        .await?
        .ok_or_else(|| AppError::BadRequest("No location on record".to_string()))?;

    if !location.location_allowed {
        return Err(AppError::BadRequest("Location sharing is disabled".to_string()));
    }

    let (latitude, longitude) = match (location.latitude, location.longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(AppError::BadRequest("No location on record".to_string())),
    };

    let alerts = state
        .alert_service
        .find_live_alerts_containing(latitude, longitude, Utc::now())
        .await?;

    let nearby = alerts
        .into_iter()
        .map(|alert| {
            let distance_km = geo::distance_km(latitude, longitude, alert.latitude, alert.longitude);
            NearbyAlertResponse { alert, distance_km }
        })
        .collect();

    Ok(Json(nearby))
}
