//! Iteration records and aggregate run statistics.

use serde::Serialize;

/// One entry of the per-iteration history.
///
/// `temperature` is the value the acceptance test ran at (before the cooling
/// step); `current_cost` and `best_cost` are the values after the
/// accept/reject decision of this iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationRecord {
    /// Iteration index, starting at 0.
    pub iteration: usize,
    /// Temperature the acceptance test used.
    pub temperature: f64,
    /// Cost of the current assignment after this iteration.
    pub current_cost: f64,
    /// Cost of the candidate evaluated this iteration.
    pub candidate_cost: f64,
    /// `candidate_cost - current_cost` at evaluation time.
    pub delta_e: f64,
    /// Whether the candidate was accepted.
    pub accepted: bool,
    /// Best cost seen so far, including this iteration.
    pub best_cost: f64,
}

/// Aggregate statistics over a full annealing run.
///
/// # Examples
///
/// ```
/// use u_dispatch::sa::SaStatistics;
///
/// let stats = SaStatistics::from_records(&[], 120.0, 120.0);
/// assert_eq!(stats.total_attempts, 0);
/// assert_eq!(stats.acceptance_rate, 0.0);
/// assert_eq!(stats.improvement, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaStatistics {
    /// Number of iterations run.
    pub total_attempts: usize,
    /// Number of accepted candidates.
    pub total_accepted: usize,
    /// Accepted candidates that strictly improved on the current cost.
    pub better_accepted: usize,
    /// Accepted candidates with `delta_e >= 0` (equal-cost moves included).
    pub worse_accepted: usize,
    /// `total_accepted / total_attempts`, 0.0 when nothing ran.
    pub acceptance_rate: f64,
    /// Cost of the initial assignment, before any move.
    pub initial_cost: f64,
    /// Best cost at termination.
    pub final_cost: f64,
    /// `initial_cost - final_cost`.
    pub improvement: f64,
    /// Improvement as a percentage of the initial cost, 0.0 when the
    /// initial cost is 0.
    pub improvement_percentage: f64,
}

impl SaStatistics {
    /// Aggregates the iteration history into summary metrics.
    pub fn from_records(records: &[IterationRecord], initial_cost: f64, best_cost: f64) -> Self {
        let total_attempts = records.len();
        let total_accepted = records.iter().filter(|r| r.accepted).count();
        let better_accepted = records
            .iter()
            .filter(|r| r.accepted && r.delta_e < 0.0)
            .count();
        let worse_accepted = total_accepted - better_accepted;

        let acceptance_rate = if total_attempts > 0 {
            total_accepted as f64 / total_attempts as f64
        } else {
            0.0
        };

        let improvement = initial_cost - best_cost;
        let improvement_percentage = if initial_cost > 0.0 {
            improvement / initial_cost * 100.0
        } else {
            0.0
        };

        Self {
            total_attempts,
            total_accepted,
            better_accepted,
            worse_accepted,
            acceptance_rate,
            initial_cost,
            final_cost: best_cost,
            improvement,
            improvement_percentage,
        }
    }
}
