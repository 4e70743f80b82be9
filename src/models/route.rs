//! Route output type: the order sequence assigned to one vehicle.

use serde::Serialize;

/// An ordered sequence of orders assigned to a single vehicle, with its
/// travel distance.
///
/// This is the output shape of both solvers: order IDs in visit order (each
/// order is visited pickup-then-dropoff before the next one) plus the total
/// distance of the vehicle-start → pickup → dropoff → ... chain. The working
/// representation used during optimization is [`Assignment`].
///
/// [`Assignment`]: super::Assignment
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Route;
///
/// let mut route = Route::new("VEH001");
/// route.push_order("ORD002");
/// route.push_order("ORD001");
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.order_ids(), ["ORD002", "ORD001"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    vehicle_id: String,
    order_ids: Vec<String>,
    total_distance: f64,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            order_ids: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Appends an order to the end of this route.
    pub fn push_order(&mut self, order_id: impl Into<String>) {
        self.order_ids.push(order_id.into());
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    /// Returns the order IDs in visit order.
    pub fn order_ids(&self) -> &[String] {
        &self.order_ids
    }

    /// Returns the number of orders on this route.
    pub fn len(&self) -> usize {
        self.order_ids.len()
    }

    /// Returns `true` if this route has no orders.
    pub fn is_empty(&self) -> bool {
        self.order_ids.is_empty()
    }

    /// Total distance of this route (set by the evaluator).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sets the total distance (used by the evaluator).
    pub fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }
}
