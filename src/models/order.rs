//! Delivery order with pickup and dropoff locations.

use serde::Serialize;

use crate::error::DispatchError;

use super::Coordinate;

/// A delivery order: pick up at one location, drop off at another.
///
/// Immutable after construction. The ID is free-form; uniqueness within a
/// problem instance is the caller's responsibility (request validation lives
/// in the layer that builds the order list).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Order;
///
/// let order = Order::new("ORD001", 40.7128, -74.0060, 40.7589, -73.9851).unwrap();
/// assert_eq!(order.id(), "ORD001");
/// assert_eq!(order.pickup().lat(), 40.7128);
/// assert_eq!(order.dropoff().lon(), -73.9851);
///
/// assert!(Order::new("BAD", 91.0, 0.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: String,
    pickup: Coordinate,
    dropoff: Coordinate,
}

impl Order {
    /// Creates an order, validating both coordinate pairs.
    pub fn new(
        id: impl Into<String>,
        pickup_lat: f64,
        pickup_lon: f64,
        dropoff_lat: f64,
        dropoff_lon: f64,
    ) -> Result<Self, DispatchError> {
        Ok(Self {
            id: id.into(),
            pickup: Coordinate::new(pickup_lat, pickup_lon)?,
            dropoff: Coordinate::new(dropoff_lat, dropoff_lon)?,
        })
    }

    /// Order ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pickup location.
    pub fn pickup(&self) -> Coordinate {
        self.pickup
    }

    /// Dropoff location.
    pub fn dropoff(&self) -> Coordinate {
        self.dropoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let o = Order::new("ORD001", 40.1, -74.1, 40.2, -74.2).expect("valid order");
        assert_eq!(o.id(), "ORD001");
        assert_eq!(o.pickup().lat(), 40.1);
        assert_eq!(o.pickup().lon(), -74.1);
        assert_eq!(o.dropoff().lat(), 40.2);
        assert_eq!(o.dropoff().lon(), -74.2);
    }

    #[test]
    fn test_order_invalid_pickup_latitude() {
        let err = Order::new("ORD001", 91.0, -74.1, 40.2, -74.2).unwrap_err();
        assert_eq!(
            err,
            DispatchError::InvalidCoordinate {
                lat: 91.0,
                lon: -74.1
            }
        );
    }

    #[test]
    fn test_order_invalid_dropoff_longitude() {
        assert!(Order::new("ORD001", 40.1, -74.1, 40.2, -200.0).is_err());
    }
}
