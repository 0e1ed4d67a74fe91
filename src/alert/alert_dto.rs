use super::alert_models::Alert;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAlertRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    pub description: Option<String>,
    pub guidance: Option<String>,
    pub severity: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 0.001, max = 20000.0))]
    pub radius_km: f64,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAlertRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub guidance: Option<String>,
    pub severity: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[validate(range(min = 0.001, max = 20000.0))]
    pub radius_km: Option<f64>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NearbyAlertResponse {
    pub alert: Alert,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(latitude: f64, longitude: f64, radius_km: f64) -> CreateAlertRequest {
        CreateAlertRequest {
            title: "Flood warning".to_string(),
            description: None,
            guidance: None,
            severity: None,
            latitude,
            longitude,
            radius_km,
            start_at: None,
            end_at: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request(23.8103, 90.4125, 5.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        assert!(request(90.5, 90.4125, 5.0).validate().is_err());
        assert!(request(-91.0, 90.4125, 5.0).validate().is_err());
    }

    #[test]
    fn test_out_of_range_longitude_rejected() {
        assert!(request(23.8103, 180.5, 5.0).validate().is_err());
    }

    #[test]
    fn test_zero_radius_rejected() {
        assert!(request(23.8103, 90.4125, 0.0).validate().is_err());
    }
}
