//! Constructive heuristics for building dispatch plans.
//!
//! - [`nearest_neighbor`] — Greedy nearest-pickup assignment, round-robin
//!   across vehicles, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, GreedySolution};
