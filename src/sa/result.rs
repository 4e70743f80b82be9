//! Annealing run output: routes, statistics, iteration history.

use serde::Serialize;

use crate::distance::DistanceUnit;
use crate::models::Route;

use super::stats::{IterationRecord, SaStatistics};

/// The output of one annealing run.
///
/// Holds the best routes found (one per vehicle, empty routes included), the
/// best cost, the aggregate [`SaStatistics`], and the full per-iteration
/// history for callers that inspect the search trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaResult {
    /// Best routes found, indexed by vehicle.
    pub routes: Vec<Route>,
    /// Total travel distance of the best routes.
    pub best_cost: f64,
    /// Unit `best_cost` and route distances are expressed in.
    pub distance_unit: DistanceUnit,
    /// Aggregate run statistics.
    pub statistics: SaStatistics,
    /// One record per iteration, in order.
    pub history: Vec<IterationRecord>,
}

impl SaResult {
    /// Condenses the result into a fleet-level summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_dispatch::models::{Order, Vehicle};
    /// use u_dispatch::sa::{SaConfig, SimulatedAnnealing};
    ///
    /// let vehicles = vec![Vehicle::new("VEH001", 40.0, -74.0).unwrap()];
    /// let orders = vec![Order::new("ORD001", 40.1, -74.1, 40.2, -74.2).unwrap()];
    ///
    /// let solver = SimulatedAnnealing::new(SaConfig::default().with_seed(42));
    /// let result = solver.solve(&vehicles, &orders).unwrap();
    /// let summary = result.summary();
    /// assert_eq!(summary.total_vehicles, 1);
    /// assert_eq!(summary.total_orders, 1);
    /// assert_eq!(summary.routes_used, 1);
    /// ```
    pub fn summary(&self) -> SolutionSummary {
        let routes_used = self.routes.iter().filter(|r| !r.is_empty()).count();
        let average_distance_per_route = if routes_used > 0 {
            self.best_cost / routes_used as f64
        } else {
            0.0
        };

        SolutionSummary {
            total_vehicles: self.routes.len(),
            total_orders: self.routes.iter().map(Route::len).sum(),
            routes_used,
            total_distance: self.best_cost,
            average_distance_per_route,
            distance_unit: self.distance_unit,
            route_details: self
                .routes
                .iter()
                .map(|r| RouteDetail {
                    vehicle_id: r.vehicle_id().to_string(),
                    orders_count: r.len(),
                    order_sequence: r.order_ids().to_vec(),
                    distance: r.total_distance(),
                })
                .collect(),
        }
    }
}

/// Fleet-level view of a solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionSummary {
    /// Number of vehicles (= number of routes, used or not).
    pub total_vehicles: usize,
    /// Number of orders across all routes.
    pub total_orders: usize,
    /// Number of routes serving at least one order.
    pub routes_used: usize,
    /// Total travel distance.
    pub total_distance: f64,
    /// `total_distance / routes_used`, 0.0 when no route is used.
    pub average_distance_per_route: f64,
    /// Unit the distances are expressed in.
    pub distance_unit: DistanceUnit,
    /// Per-route breakdown, indexed by vehicle.
    pub route_details: Vec<RouteDetail>,
}

/// One route's entry in a [`SolutionSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDetail {
    pub vehicle_id: String,
    pub orders_count: usize,
    pub order_sequence: Vec<String>,
    pub distance: f64,
}
