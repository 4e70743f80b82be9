//! Greedy nearest-neighbor baseline.
//!
//! Assigns orders to vehicles round-robin: each vehicle in turn receives the
//! unassigned order whose pickup is nearest to the vehicle's current
//! position (its start location, or the dropoff of the last order it was
//! given). Deterministic, fast, and usually well above the annealed optimum;
//! it serves as the baseline the annealing solver is compared against.
//!
//! # Complexity
//!
//! O(n²) distance evaluations where n = number of orders.

use log::{debug, trace};

use crate::distance::{haversine_distance, DistanceUnit};
use crate::error::DispatchError;
use crate::evaluation::CostEvaluator;
use crate::models::{Order, Route, Vehicle};

/// Result of the greedy baseline: one route per vehicle plus any orders it
/// could not place.
///
/// With no capacity or time constraints every order is placeable, so
/// `unassigned` is empty in practice; the field is part of the contract so
/// constrained variants can share it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GreedySolution {
    routes: Vec<Route>,
    unassigned: Vec<String>,
}

impl GreedySolution {
    /// Routes in vehicle order (empty routes included).
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// IDs of orders that could not be assigned.
    pub fn unassigned(&self) -> &[String] {
        &self.unassigned
    }

    /// Total travel distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(Route::total_distance).sum()
    }
}

/// Assigns orders to vehicles with the greedy nearest-neighbor heuristic.
///
/// # Errors
///
/// [`DispatchError::EmptyVehicleSet`] / [`DispatchError::EmptyOrderSet`] if
/// either slice is empty.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::nearest_neighbor;
/// use u_dispatch::distance::DistanceUnit;
/// use u_dispatch::models::{Order, Vehicle};
///
/// let vehicles = vec![Vehicle::new("VEH001", 40.7128, -74.0060).unwrap()];
/// let orders = vec![
///     Order::new("ORD001", 40.7580, -73.9855, 40.7614, -73.9776).unwrap(),
/// ];
///
/// let solution = nearest_neighbor(&vehicles, &orders, DistanceUnit::Kilometers).unwrap();
/// assert_eq!(solution.routes().len(), 1);
/// assert_eq!(solution.routes()[0].order_ids(), ["ORD001"]);
/// assert!(solution.unassigned().is_empty());
/// ```
pub fn nearest_neighbor(
    vehicles: &[Vehicle],
    orders: &[Order],
    unit: DistanceUnit,
) -> Result<GreedySolution, DispatchError> {
    if vehicles.is_empty() {
        return Err(DispatchError::EmptyVehicleSet);
    }
    if orders.is_empty() {
        return Err(DispatchError::EmptyOrderSet);
    }

    let mut sequences: Vec<Vec<usize>> = vec![Vec::new(); vehicles.len()];
    let mut assigned = vec![false; orders.len()];
    let mut remaining = orders.len();
    let mut vehicle_idx = 0;

    while remaining > 0 {
        let current = match sequences[vehicle_idx].last() {
            Some(&last) => orders[last].dropoff(),
            None => vehicles[vehicle_idx].position(),
        };

        // Nearest unassigned pickup from the current position.
        let mut best: Option<(usize, f64)> = None;
        for (i, order) in orders.iter().enumerate() {
            if assigned[i] {
                continue;
            }
            let d = haversine_distance(current, order.pickup(), unit);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }

        match best {
            Some((next, d)) => {
                trace!(
                    "assigned order {} to vehicle {} ({:.3} {} to pickup)",
                    orders[next].id(),
                    vehicles[vehicle_idx].id(),
                    d,
                    unit
                );
                sequences[vehicle_idx].push(next);
                assigned[next] = true;
                remaining -= 1;
            }
            None => break,
        }

        vehicle_idx = (vehicle_idx + 1) % vehicles.len();
    }

    let evaluator = CostEvaluator::new(vehicles, orders, unit);
    let routes: Vec<Route> = sequences
        .iter()
        .enumerate()
        .map(|(i, seq)| evaluator.build_route(i, seq))
        .collect();
    let unassigned: Vec<String> = orders
        .iter()
        .enumerate()
        .filter(|(i, _)| !assigned[*i])
        .map(|(_, o)| o.id().to_string())
        .collect();

    let solution = GreedySolution { routes, unassigned };
    debug!(
        "greedy nearest-neighbor placed {}/{} orders, total distance {:.3} {}",
        orders.len() - solution.unassigned.len(),
        orders.len(),
        solution.total_distance(),
        unit
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str, lat: f64, lon: f64) -> Vehicle {
        Vehicle::new(id, lat, lon).expect("valid vehicle")
    }

    fn order(id: &str, p: (f64, f64), d: (f64, f64)) -> Order {
        Order::new(id, p.0, p.1, d.0, d.1).expect("valid order")
    }

    #[test]
    fn test_greedy_single_order() {
        let vehicles = vec![vehicle("VEH001", 40.0, -74.0)];
        let orders = vec![order("ORD001", (40.05, -74.05), (40.1, -74.1))];
        let sol = nearest_neighbor(&vehicles, &orders, DistanceUnit::Kilometers)
            .expect("solvable instance");
        assert_eq!(sol.routes().len(), 1);
        assert_eq!(sol.routes()[0].order_ids(), ["ORD001"]);
        assert!(sol.unassigned().is_empty());
        // start -> pickup -> dropoff
        assert!((sol.total_distance() - 14.003342).abs() < 1e-3);
    }

    #[test]
    fn test_greedy_picks_nearest_pickup_first() {
        let vehicles = vec![vehicle("VEH001", 40.0, -74.0)];
        let orders = vec![
            order("FAR", (40.5, -74.5), (40.6, -74.6)),
            order("NEAR", (40.05, -74.05), (40.1, -74.1)),
        ];
        let sol = nearest_neighbor(&vehicles, &orders, DistanceUnit::Kilometers)
            .expect("solvable instance");
        assert_eq!(sol.routes()[0].order_ids(), ["NEAR", "FAR"]);
    }

    #[test]
    fn test_greedy_round_robin_across_vehicles() {
        let vehicles = vec![
            vehicle("VEH001", 40.0, -74.0),
            vehicle("VEH002", 41.0, -73.0),
        ];
        let orders = vec![
            order("ORD001", (40.1, -74.1), (40.2, -74.2)),
            order("ORD002", (41.1, -73.1), (41.2, -73.2)),
            order("ORD003", (40.3, -74.3), (40.4, -74.4)),
            order("ORD004", (41.3, -73.3), (41.4, -73.4)),
        ];
        let sol = nearest_neighbor(&vehicles, &orders, DistanceUnit::Kilometers)
            .expect("solvable instance");
        // One order per vehicle per turn.
        assert_eq!(sol.routes()[0].len(), 2);
        assert_eq!(sol.routes()[1].len(), 2);
        assert!(sol.unassigned().is_empty());
    }

    #[test]
    fn test_greedy_assigns_every_order_once() {
        let vehicles = vec![
            vehicle("VEH001", 40.7128, -74.0060),
            vehicle("VEH002", 40.7580, -73.9855),
        ];
        let orders = vec![
            order("ORD001", (40.7128, -74.0060), (40.7589, -73.9851)),
            order("ORD002", (40.7580, -73.9855), (40.7614, -73.9776)),
            order("ORD003", (40.7831, -73.9712), (40.7489, -73.9680)),
            order("ORD004", (40.7061, -73.9969), (40.7306, -73.9866)),
            order("ORD005", (40.7549, -73.9840), (40.7829, -73.9654)),
        ];
        let sol = nearest_neighbor(&vehicles, &orders, DistanceUnit::Kilometers)
            .expect("solvable instance");
        let mut seen: Vec<&str> = sol
            .routes()
            .iter()
            .flat_map(|r| r.order_ids().iter().map(String::as_str))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, ["ORD001", "ORD002", "ORD003", "ORD004", "ORD005"]);
        assert!(sol.unassigned().is_empty());
    }

    #[test]
    fn test_greedy_empty_inputs() {
        let vehicles = vec![vehicle("VEH001", 40.0, -74.0)];
        let orders = vec![order("ORD001", (40.1, -74.1), (40.2, -74.2))];
        assert_eq!(
            nearest_neighbor(&[], &orders, DistanceUnit::Kilometers).unwrap_err(),
            DispatchError::EmptyVehicleSet
        );
        assert_eq!(
            nearest_neighbor(&vehicles, &[], DistanceUnit::Kilometers).unwrap_err(),
            DispatchError::EmptyOrderSet
        );
    }

    #[test]
    fn test_greedy_more_vehicles_than_orders() {
        let vehicles = vec![
            vehicle("VEH001", 40.0, -74.0),
            vehicle("VEH002", 41.0, -73.0),
            vehicle("VEH003", 42.0, -72.0),
        ];
        let orders = vec![order("ORD001", (40.1, -74.1), (40.2, -74.2))];
        let sol = nearest_neighbor(&vehicles, &orders, DistanceUnit::Kilometers)
            .expect("solvable instance");
        assert_eq!(sol.routes().len(), 3);
        assert_eq!(sol.routes()[0].len(), 1);
        assert!(sol.routes()[1].is_empty());
        assert!(sol.routes()[2].is_empty());
    }
}
