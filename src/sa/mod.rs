//! Simulated annealing optimization engine.
//!
//! - [`SimulatedAnnealing`] — the solver: initial assignment, the
//!   generate/evaluate/accept/cool loop, best-so-far tracking
//! - [`SaConfig`] — temperatures, cooling rate, iteration cap, seed
//! - [`AnnealingSchedule`] — temperature state and Metropolis acceptance
//! - [`neighbor`] — weighted random move operators over [`Assignment`]
//! - [`SaStatistics`] / [`IterationRecord`] — run bookkeeping
//! - [`SaResult`] — routes, cost, statistics, and full iteration history
//!
//! [`Assignment`]: crate::models::Assignment

mod config;
mod neighbor;
mod result;
mod schedule;
mod solver;
mod stats;

pub use config::SaConfig;
pub use neighbor::neighbor;
pub use result::{RouteDetail, SaResult, SolutionSummary};
pub use schedule::AnnealingSchedule;
pub use solver::SimulatedAnnealing;
pub use stats::{IterationRecord, SaStatistics};
