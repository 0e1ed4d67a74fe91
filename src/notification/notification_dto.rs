use super::notification_models::{Notification, NotificationWithAlert};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PaginationQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }

    // Widened before multiplying so an absurd page value cannot overflow
    pub fn offset(&self) -> u32 {
        let offset = (self.page() as u64 - 1) * self.limit() as u64;
        offset.min(u32::MAX as u64) as u32
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[aliases(PaginatedNotifications = PaginatedResponse<NotificationWithAlert>)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: i64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

/// Payload for a notification created by the dispatcher, carrying the live
/// distance between the user and the alert center at dispatch time.
#[derive(Debug, Serialize, ToSchema)]
pub struct DispatchedNotification {
    pub notification: Notification,
    pub alert_title: String,
    pub severity: String,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let q = PaginationQuery { page: None, limit: None };
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 20);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_pagination_clamps_limit() {
        let q = PaginationQuery { page: Some(3), limit: Some(500) };
        assert_eq!(q.limit(), 100);
        assert_eq!(q.offset(), 200);
    }

    #[test]
    fn test_pagination_zero_page_treated_as_first() {
        let q = PaginationQuery { page: Some(0), limit: Some(10) };
        assert_eq!(q.page(), 1);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_pagination_huge_page_does_not_overflow() {
        let q = PaginationQuery { page: Some(u32::MAX), limit: Some(100) };
        assert_eq!(q.offset(), u32::MAX);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let resp: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 21, 1, 10);
        assert_eq!(resp.total_pages, 3);

        let resp: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 20, 1, 10);
        assert_eq!(resp.total_pages, 2);

        let resp: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 0, 1, 10);
        assert_eq!(resp.total_pages, 0);
    }
}
