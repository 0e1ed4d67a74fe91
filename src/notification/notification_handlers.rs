use super::notification_dto::{PaginatedNotifications, PaginatedResponse, PaginationQuery};
use super::notification_models::{Notification, NotificationWithAlert};
use crate::{
    error::{AppError, Result},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

/// Get the authenticated user's notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paged notifications", body = PaginatedNotifications),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    Query(paging): Query<PaginationQuery>,
) -> Result<Json<PaginatedResponse<NotificationWithAlert>>> {
    let page = paging.page();
    let limit = paging.limit();

    let notifications = state
        .notification_repository
        .find_all_by_user(user_id, limit, paging.offset())
        .await?;
    let total = state.notification_repository.count_by_user(user_id).await?;

    Ok(Json(PaginatedResponse::new(notifications, total, page, limit)))
}

/// Get the authenticated user's unread notifications
#[utoipa::path(
    get,
    path = "/api/notifications/unread",
    responses(
        (status = 200, description = "Unread notifications", body = Vec<NotificationWithAlert>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn get_unread_notifications(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
) -> Result<Json<Vec<NotificationWithAlert>>> {
    let notifications = state
        .notification_repository
        .find_unread_by_user(user_id)
        .await?;

    Ok(Json(notifications))
}

/// Mark one notification as read (owner only, idempotent)
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = Notification),
        (status = 404, description = "Notification not found"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<Notification>> {
    let notification = state
        .notification_repository
        .mark_as_read(notification_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    Ok(Json(notification))
}

/// Mark all of the authenticated user's notifications as read
#[utoipa::path(
    patch,
    path = "/api/notifications/read-all",
    responses(
        (status = 200, description = "Unread notifications marked as read"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
) -> Result<Json<Value>> {
    let updated = state.notification_repository.mark_all_read(user_id).await?;

    Ok(Json(json!({ "updated": updated })))
}
