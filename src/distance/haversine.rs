//! Great-circle distance via the Haversine formula.

use crate::error::DispatchError;
use crate::models::Coordinate;

use super::DistanceUnit;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in the given unit.
///
/// Uses the Haversine formula on a sphere of radius 6371 km. Symmetric in
/// its arguments, and exactly zero when `a == b`.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::{haversine_distance, DistanceUnit};
/// use u_dispatch::models::Coordinate;
///
/// let new_york = Coordinate::new(40.7128, -74.0060).unwrap();
/// let los_angeles = Coordinate::new(34.0522, -118.2437).unwrap();
///
/// let km = haversine_distance(new_york, los_angeles, DistanceUnit::Kilometers);
/// assert!((km - 3935.75).abs() < 1.0);
///
/// let miles = haversine_distance(new_york, los_angeles, DistanceUnit::Miles);
/// assert!((miles - km * 0.621371).abs() < 1e-9);
/// ```
pub fn haversine_distance(a: Coordinate, b: Coordinate, unit: DistanceUnit) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = (b.lat() - a.lat()).to_radians();
    let dlon = (b.lon() - a.lon()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c * unit.factor()
}

/// Great-circle distance from raw latitude/longitude values and a unit name.
///
/// Convenience wrapper for callers that have not yet built [`Coordinate`]s:
/// validates both coordinate pairs and parses the unit string before
/// delegating to [`haversine_distance`].
///
/// # Errors
///
/// [`DispatchError::InvalidCoordinate`] if either latitude is outside
/// [-90, 90] or either longitude outside [-180, 180];
/// [`DispatchError::InvalidUnit`] for an unrecognized unit string.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::distance;
///
/// let d = distance(40.7128, -74.0060, 34.0522, -118.2437, "miles").unwrap();
/// assert!((d - 2445.56).abs() < 1.0);
///
/// assert!(distance(91.0, 0.0, 0.0, 0.0, "km").is_err());
/// assert!(distance(0.0, 0.0, 1.0, 1.0, "cubits").is_err());
/// ```
pub fn distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: &str,
) -> Result<f64, DispatchError> {
    let a = Coordinate::new(lat1, lon1)?;
    let b = Coordinate::new(lat2, lon2)?;
    let unit: DistanceUnit = unit.parse()?;
    Ok(haversine_distance(a, b, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid test coordinate")
    }

    #[test]
    fn test_known_distances() {
        let new_york = coord(40.7128, -74.0060);
        let los_angeles = coord(34.0522, -118.2437);
        let d = haversine_distance(new_york, los_angeles, DistanceUnit::Kilometers);
        assert!((d - 3935.746254).abs() < 1e-3);

        let london = coord(51.5074, -0.1278);
        let paris = coord(48.8566, 2.3522);
        let d = haversine_distance(london, paris, DistanceUnit::Kilometers);
        assert!((d - 343.556060).abs() < 1e-3);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_distance(coord(0.0, 0.0), coord(1.0, 0.0), DistanceUnit::Kilometers);
        assert!((d - 111.194927).abs() < 1e-3);
    }

    #[test]
    fn test_same_point_is_zero() {
        let p = coord(40.7128, -74.0060);
        assert_eq!(haversine_distance(p, p, DistanceUnit::Kilometers), 0.0);
        assert_eq!(haversine_distance(p, p, DistanceUnit::Feet), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = coord(40.7128, -74.0060);
        let b = coord(34.0522, -118.2437);
        assert_eq!(
            haversine_distance(a, b, DistanceUnit::Kilometers),
            haversine_distance(b, a, DistanceUnit::Kilometers)
        );
    }

    #[test]
    fn test_unit_scaling() {
        let a = coord(40.7128, -74.0060);
        let b = coord(34.0522, -118.2437);
        let km = haversine_distance(a, b, DistanceUnit::Kilometers);
        assert!(
            (haversine_distance(a, b, DistanceUnit::Miles) - km * 0.621371).abs() < 1e-9
        );
        assert!(
            (haversine_distance(a, b, DistanceUnit::Meters) - km * 1000.0).abs() < 1e-6
        );
        assert!(
            (haversine_distance(a, b, DistanceUnit::Feet) - km * 3280.84).abs() < 1e-5
        );
    }

    #[test]
    fn test_raw_value_wrapper() {
        let d = distance(40.7128, -74.0060, 34.0522, -118.2437, "km").expect("valid inputs");
        assert!((d - 3935.746254).abs() < 1e-3);
    }

    #[test]
    fn test_raw_value_wrapper_errors() {
        assert!(matches!(
            distance(91.0, 0.0, 0.0, 0.0, "km"),
            Err(DispatchError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            distance(0.0, 0.0, 0.0, 181.0, "km"),
            Err(DispatchError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            distance(0.0, 0.0, 1.0, 1.0, "smoots"),
            Err(DispatchError::InvalidUnit(_))
        ));
    }
}
