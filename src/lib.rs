//! # u-dispatch
//!
//! Delivery dispatch optimization library: assigns pickup/dropoff orders to
//! vehicles so as to minimize total great-circle travel distance, with a
//! greedy nearest-neighbor baseline and a simulated annealing metaheuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Order, Vehicle, Route, Assignment)
//! - [`distance`] — Haversine great-circle distance and unit conversion
//! - [`evaluation`] — Total travel cost of an assignment
//! - [`constructive`] — Greedy nearest-neighbor baseline
//! - [`sa`] — Simulated annealing engine (solver, schedule, move operators, statistics)
//! - [`error`] — The [`DispatchError`](error::DispatchError) taxonomy
//!
//! ## Example
//!
//! ```
//! use u_dispatch::models::{Order, Vehicle};
//! use u_dispatch::sa::{SaConfig, SimulatedAnnealing};
//!
//! let vehicles = vec![
//!     Vehicle::new("VEH001", 40.7128, -74.0060)?,
//!     Vehicle::new("VEH002", 40.7580, -73.9855)?,
//! ];
//! let orders = vec![
//!     Order::new("ORD001", 40.7128, -74.0060, 40.7589, -73.9851)?,
//!     Order::new("ORD002", 40.7580, -73.9855, 40.7614, -73.9776)?,
//!     Order::new("ORD003", 40.7831, -73.9712, 40.7489, -73.9680)?,
//! ];
//!
//! let solver = SimulatedAnnealing::new(SaConfig::default().with_seed(42));
//! let result = solver.solve(&vehicles, &orders)?;
//!
//! assert_eq!(result.routes.len(), 2);
//! assert!(result.best_cost <= result.statistics.initial_cost);
//! # Ok::<(), u_dispatch::error::DispatchError>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod sa;
