use super::location_dto::ReportLocationRequest;
use super::location_models::UserLocation;
use crate::{
    error::{AppError, Result},
    state::AppState,
};
use axum::{extract::State, Extension, Json};
use uuid::Uuid;
use validator::Validate;

/// Report the authenticated user's current location
#[utoipa::path(
    post,
    path = "/api/location",
    request_body = ReportLocationRequest,
    responses(
        (status = 200, description = "Location stored", body = UserLocation),
        (status = 400, description = "Coordinates out of range"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "location",
    security(("bearer_auth" = []))
)]
pub async fn report_location(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    Json(payload): Json<ReportLocationRequest>,
) -> Result<Json<UserLocation>> {
    payload.validate()?;

    let location = state.location_service.report_location(user_id, payload).await?;

    Ok(Json(location))
}

/// Get the authenticated user's stored location
#[utoipa::path(
    get,
    path = "/api/location",
    responses(
        (status = 200, description = "Stored location", body = UserLocation),
        (status = 404, description = "No location on record"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "location",
    security(("bearer_auth" = []))
)]
pub async fn get_my_location(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
) -> Result<Json<UserLocation>> {
    let location = state
        .location_repository
        .find_by_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No location on record".to_string()))?;

    Ok(Json(location))
}
