use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::str::FromStr for AlertSeverity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Low" => Ok(AlertSeverity::Low),
            "Medium" => Ok(AlertSeverity::Medium),
            "High" => Ok(AlertSeverity::High),
            "Critical" => Ok(AlertSeverity::Critical),
            other => Err(format!("Unknown severity: {}", other)),
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Low => write!(f, "Low"),
            AlertSeverity::Medium => write!(f, "Medium"),
            AlertSeverity::High => write!(f, "High"),
            AlertSeverity::Critical => write!(f, "Critical"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Alert {
    pub id: Uuid,
    pub authority_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub guidance: Option<String>,
    pub severity: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub active: bool,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alert {
    /// An alert matches only while it is live: active, started, and not past
    /// its end time (no end time means open-ended).
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.active
            && self.start_at <= now
            && self.end_at.map_or(true, |end| end >= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn alert(active: bool, start_at: DateTime<Utc>, end_at: Option<DateTime<Utc>>) -> Alert {
        let now = Utc::now();
        Alert {
            id: Uuid::new_v4(),
            authority_id: Uuid::new_v4(),
            title: "Dengue outbreak".to_string(),
            description: None,
            guidance: None,
            severity: AlertSeverity::Medium.to_string(),
            latitude: 23.8103,
            longitude: 90.4125,
            radius_km: 5.0,
            active,
            start_at,
            end_at,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(AlertSeverity::Low.to_string(), "Low");
        assert_eq!(AlertSeverity::Medium.to_string(), "Medium");
        assert_eq!(AlertSeverity::High.to_string(), "High");
        assert_eq!(AlertSeverity::Critical.to_string(), "Critical");
    }

    #[test]
    fn test_severity_parses_known_levels() {
        assert_eq!("Low".parse::<AlertSeverity>().unwrap(), AlertSeverity::Low);
        assert_eq!("Medium".parse::<AlertSeverity>().unwrap(), AlertSeverity::Medium);
        assert_eq!("High".parse::<AlertSeverity>().unwrap(), AlertSeverity::High);
        assert_eq!("Critical".parse::<AlertSeverity>().unwrap(), AlertSeverity::Critical);
    }

    #[test]
    fn test_severity_rejects_unknown_level() {
        assert!("Bogus".parse::<AlertSeverity>().is_err());
        assert!("low".parse::<AlertSeverity>().is_err());
        assert!("".parse::<AlertSeverity>().is_err());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(AlertSeverity::Low < AlertSeverity::Medium);
        assert!(AlertSeverity::Medium < AlertSeverity::High);
        assert!(AlertSeverity::High < AlertSeverity::Critical);
    }

    #[test]
    fn test_is_live_open_ended() {
        let now = Utc::now();
        let a = alert(true, now - Duration::hours(1), None);
        assert!(a.is_live(now));
    }

    #[test]
    fn test_is_live_inactive_never_matches() {
        let now = Utc::now();
        let a = alert(false, now - Duration::hours(1), None);
        assert!(!a.is_live(now));
    }

    #[test]
    fn test_is_live_future_start() {
        let now = Utc::now();
        let a = alert(true, now + Duration::hours(1), None);
        assert!(!a.is_live(now));
    }

    #[test]
    fn test_is_live_past_end() {
        let now = Utc::now();
        let a = alert(true, now - Duration::hours(2), Some(now - Duration::hours(1)));
        assert!(!a.is_live(now));
    }

    #[test]
    fn test_is_live_within_window() {
        let now = Utc::now();
        let a = alert(true, now - Duration::hours(1), Some(now + Duration::hours(1)));
        assert!(a.is_live(now));
    }
}
