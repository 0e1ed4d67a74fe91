use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReportLocationRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub location_allowed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates_pass() {
        let req = ReportLocationRequest {
            latitude: 23.8103,
            longitude: 90.4125,
            location_allowed: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_latitude_out_of_range_rejected() {
        let req = ReportLocationRequest {
            latitude: 91.0,
            longitude: 90.4125,
            location_allowed: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_longitude_out_of_range_rejected() {
        let req = ReportLocationRequest {
            latitude: 23.8103,
            longitude: -180.5,
            location_allowed: None,
        };
        assert!(req.validate().is_err());
    }
}
