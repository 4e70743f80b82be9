//! Geographic coordinate with range validation.

use serde::Serialize;

use crate::error::DispatchError;

/// A validated latitude/longitude pair in decimal degrees.
///
/// Construction rejects latitudes outside [-90, 90] and longitudes outside
/// [-180, 180], so every `Coordinate` in circulation is geographically valid
/// and distance computations never need to re-check their inputs.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Coordinate;
///
/// let c = Coordinate::new(40.7128, -74.0060).unwrap();
/// assert_eq!(c.lat(), 40.7128);
/// assert_eq!(c.lon(), -74.0060);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -181.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate, validating the geographic range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DispatchError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(DispatchError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}
