//! Great-circle distance math used by the geofence matcher and the
//! location-change hysteresis check.
//!
//! Haversine on a spherical Earth (R = 6371 km). Geofences spanning the
//! antimeridian (±180° longitude) or the poles will under-match; callers
//! validate coordinate ranges upstream.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two (lat, lon) points in degrees.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// True when (lat, lon) lies inside the circle of `radius_km` around the center.
pub fn within_radius(lat: f64, lon: f64, center_lat: f64, center_lon: f64, radius_km: f64) -> bool {
    distance_km(lat, lon, center_lat, center_lon) <= radius_km
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_zero_for_identical_points() {
        assert_eq!(distance_km(23.8103, 90.4125, 23.8103, 90.4125), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let d1 = distance_km(23.8103, 90.4125, 23.9, 90.9);
        let d2 = distance_km(23.9, 90.9, 23.8103, 90.4125);
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_known_distance_dhaka_area() {
        // ~50 km between central Dhaka and a point to the north-east
        let d = distance_km(23.8103, 90.4125, 23.9, 90.9);
        assert!(d > 45.0 && d < 55.0, "got {}", d);
    }

    #[test]
    fn test_within_radius_at_center() {
        assert!(within_radius(23.8103, 90.4125, 23.8103, 90.4125, 5.0));
    }

    #[test]
    fn test_within_radius_inside_and_outside() {
        // ~1.1 km north of the center
        assert!(within_radius(23.8203, 90.4125, 23.8103, 90.4125, 5.0));
        // ~51 km away, well outside a 5 km fence
        assert!(!within_radius(23.9, 90.9, 23.8103, 90.4125, 5.0));
    }
}
