//! Vehicle type with a current geographic position.

use serde::Serialize;

use crate::error::DispatchError;

use super::Coordinate;

/// A delivery vehicle identified by ID and current position.
///
/// The position is fixed for the duration of a solve; [`relocate`] exists to
/// move a vehicle between solves (e.g. after it finishes a route).
///
/// [`relocate`]: Vehicle::relocate
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Vehicle;
///
/// let v = Vehicle::new("VEH001", 40.0, -74.0).unwrap();
/// assert_eq!(v.id(), "VEH001");
/// assert_eq!(v.position().lat(), 40.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    id: String,
    position: Coordinate,
}

impl Vehicle {
    /// Creates a vehicle at the given position, validating the coordinate.
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Result<Self, DispatchError> {
        Ok(Self {
            id: id.into(),
            position: Coordinate::new(lat, lon)?,
        })
    }

    /// Vehicle ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current position.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Moves the vehicle to a new position.
    ///
    /// Validates before mutating: on an out-of-range coordinate the vehicle
    /// keeps its previous position and the error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_dispatch::models::Vehicle;
    ///
    /// let mut v = Vehicle::new("VEH001", 40.0, -74.0).unwrap();
    /// v.relocate(40.5, -74.5).unwrap();
    /// assert_eq!(v.position().lat(), 40.5);
    ///
    /// assert!(v.relocate(99.0, 0.0).is_err());
    /// assert_eq!(v.position().lat(), 40.5);
    /// ```
    pub fn relocate(&mut self, lat: f64, lon: f64) -> Result<(), DispatchError> {
        self.position = Coordinate::new(lat, lon)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new("VEH001", 40.7128, -74.0060).expect("valid vehicle");
        assert_eq!(v.id(), "VEH001");
        assert_eq!(v.position().lat(), 40.7128);
        assert_eq!(v.position().lon(), -74.0060);
    }

    #[test]
    fn test_vehicle_invalid_position() {
        assert!(Vehicle::new("VEH001", -91.0, 0.0).is_err());
    }

    #[test]
    fn test_vehicle_relocate() {
        let mut v = Vehicle::new("VEH001", 40.0, -74.0).expect("valid vehicle");
        v.relocate(41.0, -73.0).expect("valid relocation");
        assert_eq!(v.position().lat(), 41.0);
        assert_eq!(v.position().lon(), -73.0);
    }

    #[test]
    fn test_vehicle_relocate_invalid_keeps_position() {
        let mut v = Vehicle::new("VEH001", 40.0, -74.0).expect("valid vehicle");
        assert!(v.relocate(40.0, 181.0).is_err());
        assert_eq!(v.position().lat(), 40.0);
        assert_eq!(v.position().lon(), -74.0);
    }
}
