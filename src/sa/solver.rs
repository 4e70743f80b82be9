//! Simulated annealing solver engine.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::DispatchError;
use crate::evaluation::CostEvaluator;
use crate::models::{Assignment, Order, Route, Vehicle};

use super::config::SaConfig;
use super::neighbor::neighbor;
use super::result::SaResult;
use super::schedule::AnnealingSchedule;
use super::stats::{IterationRecord, SaStatistics};

/// Simulated annealing dispatch solver.
///
/// Runs the classic generate/evaluate/accept/cool loop over [`Assignment`]
/// candidates: starting from a random round-robin assignment, each iteration
/// draws one neighbor, scores it with [`CostEvaluator`], and decides via the
/// Metropolis criterion of [`AnnealingSchedule`]. The best assignment seen is
/// tracked separately from the current one and only replaced on strict cost
/// improvement, so the returned routes are never worse than the initial ones.
///
/// The solver holds no per-solve state; one instance can serve any number of
/// independent `solve` calls, and calls on separate threads need no
/// coordination.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Order, Vehicle};
/// use u_dispatch::sa::{SaConfig, SimulatedAnnealing};
///
/// let vehicles = vec![
///     Vehicle::new("VEH001", 40.7128, -74.0060).unwrap(),
///     Vehicle::new("VEH002", 40.7580, -73.9855).unwrap(),
/// ];
/// let orders = vec![
///     Order::new("ORD001", 40.7128, -74.0060, 40.7589, -73.9851).unwrap(),
///     Order::new("ORD002", 40.7580, -73.9855, 40.7614, -73.9776).unwrap(),
/// ];
///
/// let solver = SimulatedAnnealing::new(SaConfig::default().with_seed(42));
/// let result = solver.solve(&vehicles, &orders).unwrap();
/// assert_eq!(result.routes.len(), 2);
/// assert!(result.best_cost <= result.statistics.initial_cost);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    config: SaConfig,
}

impl SimulatedAnnealing {
    /// Creates a solver with the given configuration.
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Optimizes order-to-vehicle routes from a random initial assignment.
    ///
    /// # Errors
    ///
    /// [`DispatchError::EmptyVehicleSet`] / [`DispatchError::EmptyOrderSet`]
    /// if either slice is empty; raised before any iteration runs.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails [`SaConfig::validate`].
    pub fn solve(
        &self,
        vehicles: &[Vehicle],
        orders: &[Order],
    ) -> Result<SaResult, DispatchError> {
        self.run(vehicles, orders, None)
    }

    /// Optimizes starting from a caller-supplied assignment.
    ///
    /// The assignment must have one route per vehicle and contain every
    /// order index exactly once; it is copied in, the caller's value stays
    /// untouched.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_with_initial(
        &self,
        vehicles: &[Vehicle],
        orders: &[Order],
        initial: Assignment,
    ) -> Result<SaResult, DispatchError> {
        self.run(vehicles, orders, Some(initial))
    }

    fn run(
        &self,
        vehicles: &[Vehicle],
        orders: &[Order],
        initial: Option<Assignment>,
    ) -> Result<SaResult, DispatchError> {
        self.config.validate().expect("invalid SaConfig");
        if vehicles.is_empty() {
            return Err(DispatchError::EmptyVehicleSet);
        }
        if orders.is_empty() {
            return Err(DispatchError::EmptyOrderSet);
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initializing
        let mut current = match initial {
            Some(assignment) => {
                debug_assert_eq!(assignment.num_routes(), vehicles.len());
                debug_assert!(assignment.is_partition(orders.len()));
                assignment
            }
            None => initial_assignment(vehicles.len(), orders.len(), &mut rng),
        };

        let evaluator = CostEvaluator::new(vehicles, orders, self.config.distance_unit);
        let mut current_cost = evaluator.total_cost(&current);
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut schedule = AnnealingSchedule::new(
            self.config.initial_temperature,
            self.config.final_temperature,
            self.config.cooling_rate,
        );
        let mut history: Vec<IterationRecord> = Vec::new();

        debug!(
            "annealing {} orders over {} vehicles: T {} -> {}, cooling {}, max {} iterations, initial cost {:.3} {}",
            orders.len(),
            vehicles.len(),
            self.config.initial_temperature,
            self.config.final_temperature,
            self.config.cooling_rate,
            self.config.max_iterations,
            initial_cost,
            self.config.distance_unit
        );

        // Iterating
        let mut iteration = 0;
        while !schedule.is_finished() && iteration < self.config.max_iterations {
            let candidate = neighbor(&current, &mut rng);
            let candidate_cost = evaluator.total_cost(&candidate);
            let delta_e = candidate_cost - current_cost;

            let accepted = schedule.accept(delta_e, &mut rng);
            if accepted {
                current = candidate;
                current_cost = candidate_cost;
                if candidate_cost < best_cost {
                    best = current.clone();
                    best_cost = candidate_cost;
                }
            }

            if self.config.verbose {
                trace!(
                    "iter {:>6}  T {:>10.4}  current {:>10.4}  candidate {:>10.4}  dE {:>+10.4}  {}  best {:>10.4}",
                    iteration,
                    schedule.temperature(),
                    current_cost,
                    candidate_cost,
                    delta_e,
                    if accepted { "accept" } else { "reject" },
                    best_cost
                );
            }

            history.push(IterationRecord {
                iteration,
                temperature: schedule.temperature(),
                current_cost,
                candidate_cost,
                delta_e,
                accepted,
                best_cost,
            });

            schedule.cool();
            iteration += 1;
        }

        // Finalizing
        let routes: Vec<Route> = best
            .routes()
            .iter()
            .enumerate()
            .map(|(i, route)| evaluator.build_route(i, route))
            .collect();
        let statistics = SaStatistics::from_records(&history, initial_cost, best_cost);

        debug!(
            "annealing done after {} iterations: best cost {:.3} {} ({} accepted, {} improving)",
            statistics.total_attempts,
            best_cost,
            self.config.distance_unit,
            statistics.total_accepted,
            statistics.better_accepted
        );

        Ok(SaResult {
            routes,
            best_cost,
            distance_unit: self.config.distance_unit,
            statistics,
            history,
        })
    }
}

/// Random initial assignment: shuffle the order indices, then deal them
/// round-robin across the vehicle routes.
fn initial_assignment(num_vehicles: usize, num_orders: usize, rng: &mut StdRng) -> Assignment {
    let mut indices: Vec<usize> = (0..num_orders).collect();
    indices.shuffle(rng);

    let mut assignment = Assignment::empty(num_vehicles);
    for (position, order_idx) in indices.into_iter().enumerate() {
        assignment.routes_mut()[position % num_vehicles].push(order_idx);
    }
    assignment
}
