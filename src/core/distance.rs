use crate::models::Coordinates;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers, via the
/// Haversine formula.
#[inline]
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_haversine_zero_distance() {
        let berlin = point(52.52, 13.405);
        assert!(haversine_km(berlin, berlin) < 0.01);
    }

    #[test]
    fn test_haversine_london_to_paris() {
        // Distance from London to Paris (approximately 344 km)
        let london = point(51.5074, -0.1278);
        let paris = point(48.8566, 2.3522);

        let distance = haversine_km(london, paris);
        assert!(
            (distance - 344.0).abs() < 10.0,
            "Distance should be ~344km, got {}",
            distance
        );
    }

    #[test]
    fn test_haversine_one_degree_longitude_at_equator() {
        // One degree of longitude on the equator is ~111.19 km
        let distance = haversine_km(point(0.0, 0.0), point(0.0, 1.0));
        assert!(
            (distance - 111.19).abs() < 0.1,
            "Distance should be ~111.19km, got {}",
            distance
        );
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = point(40.7128, -74.0060);
        let b = point(40.6782, -73.9442);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }
}
