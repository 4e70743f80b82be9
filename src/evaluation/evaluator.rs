//! Cost evaluator: total travel distance of an assignment.

use crate::distance::{haversine_distance, DistanceUnit};
use crate::models::{Assignment, Coordinate, Order, Route, Vehicle};

/// Computes the travel cost of assignments and routes.
///
/// The cost of one route is the distance of the chain starting at the
/// vehicle's position: travel to the first order's pickup, pickup to
/// dropoff, then on to the next order's pickup, and so on. An empty route
/// costs nothing. The total cost of an assignment is the sum over all
/// routes; it is the energy minimized by the annealing solver. Purely
/// additive — there are no penalty terms.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceUnit;
/// use u_dispatch::evaluation::CostEvaluator;
/// use u_dispatch::models::{Assignment, Order, Vehicle};
///
/// let vehicles = vec![
///     Vehicle::new("VEH001", 40.0, -74.0).unwrap(),
///     Vehicle::new("VEH002", 41.0, -73.0).unwrap(),
/// ];
/// let orders = vec![
///     Order::new("ORD001", 40.1, -74.1, 40.2, -74.2).unwrap(),
///     Order::new("ORD002", 40.3, -74.3, 40.4, -74.4).unwrap(),
/// ];
///
/// let evaluator = CostEvaluator::new(&vehicles, &orders, DistanceUnit::Kilometers);
/// let assignment = Assignment::from_routes(vec![vec![0], vec![1]]);
/// let cost = evaluator.total_cost(&assignment);
/// assert!((cost - 176.464).abs() < 0.01);
/// ```
pub struct CostEvaluator<'a> {
    vehicles: &'a [Vehicle],
    orders: &'a [Order],
    unit: DistanceUnit,
}

impl<'a> CostEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(vehicles: &'a [Vehicle], orders: &'a [Order], unit: DistanceUnit) -> Self {
        Self {
            vehicles,
            orders,
            unit,
        }
    }

    /// Total travel distance of an assignment across all vehicles.
    ///
    /// # Panics
    ///
    /// Panics if the assignment has more routes than there are vehicles, or
    /// if a route references an order index outside the order slice.
    pub fn total_cost(&self, assignment: &Assignment) -> f64 {
        assignment
            .routes()
            .iter()
            .enumerate()
            .map(|(vehicle_idx, route)| self.route_cost(vehicle_idx, route))
            .sum()
    }

    /// Travel distance of one vehicle's route. Empty routes cost 0.
    pub fn route_cost(&self, vehicle_idx: usize, route: &[usize]) -> f64 {
        let mut current = self.vehicles[vehicle_idx].position();
        let mut total = 0.0;
        for &order_idx in route {
            let order = &self.orders[order_idx];
            total += self.leg(current, order.pickup());
            total += self.leg(order.pickup(), order.dropoff());
            current = order.dropoff();
        }
        total
    }

    /// Builds the output [`Route`] for one vehicle, with its total distance.
    pub fn build_route(&self, vehicle_idx: usize, route: &[usize]) -> Route {
        let mut out = Route::new(self.vehicles[vehicle_idx].id());
        for &order_idx in route {
            out.push_order(self.orders[order_idx].id());
        }
        out.set_total_distance(self.route_cost(vehicle_idx, route));
        out
    }

    fn leg(&self, from: Coordinate, to: Coordinate) -> f64 {
        haversine_distance(from, to, self.unit)
    }
}
