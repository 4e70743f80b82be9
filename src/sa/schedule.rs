//! Temperature schedule and Metropolis acceptance.

use rand::Rng;

/// Geometric cooling schedule with the Metropolis acceptance criterion.
///
/// Improving moves (`delta_e < 0`) are always accepted; worsening moves are
/// accepted with probability `exp(-delta_e / T)`, so the search explores
/// freely while hot and turns greedy as it cools.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_dispatch::sa::AnnealingSchedule;
///
/// let mut schedule = AnnealingSchedule::new(100.0, 1.0, 0.5);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// assert!(schedule.accept(-3.0, &mut rng));
/// schedule.cool();
/// assert_eq!(schedule.temperature(), 50.0);
/// assert!(!schedule.is_finished());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingSchedule {
    temperature: f64,
    final_temperature: f64,
    cooling_rate: f64,
}

impl AnnealingSchedule {
    /// Creates a schedule starting at `initial_temperature`.
    pub fn new(initial_temperature: f64, final_temperature: f64, cooling_rate: f64) -> Self {
        Self {
            temperature: initial_temperature,
            final_temperature,
            cooling_rate,
        }
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Metropolis acceptance test for a cost difference of `delta_e`.
    ///
    /// Strictly improving moves are accepted without consuming a random
    /// draw. Anything else is accepted iff a uniform draw from [0, 1) falls
    /// below `exp(-delta_e / T)`; a `delta_e` of zero therefore always
    /// passes.
    pub fn accept<R: Rng>(&self, delta_e: f64, rng: &mut R) -> bool {
        if delta_e < 0.0 {
            true
        } else if self.temperature > 0.0 {
            let probability = (-delta_e / self.temperature).exp();
            rng.random_range(0.0..1.0) < probability
        } else {
            false
        }
    }

    /// Applies one geometric cooling step: `T *= cooling_rate`.
    pub fn cool(&mut self) {
        self.temperature *= self.cooling_rate;
    }

    /// `true` once the temperature has reached the floor.
    pub fn is_finished(&self) -> bool {
        self.temperature <= self.final_temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_improving_always_accepted() {
        let schedule = AnnealingSchedule::new(1e-9, 1e-12, 0.5);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(schedule.accept(-0.001, &mut rng));
        }
    }

    #[test]
    fn test_zero_delta_always_accepted() {
        // exp(0) = 1 and draws are taken from [0, 1).
        let schedule = AnnealingSchedule::new(10.0, 1.0, 0.9);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(schedule.accept(0.0, &mut rng));
        }
    }

    #[test]
    fn test_large_worsening_rejected_when_cold() {
        // exp(-1000 / 1e-9) underflows to zero.
        let schedule = AnnealingSchedule::new(1e-9, 1e-12, 0.5);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(!schedule.accept(1000.0, &mut rng));
        }
    }

    #[test]
    fn test_worsening_mostly_accepted_when_hot() {
        // exp(-1 / 1e9) is indistinguishable from 1.
        let schedule = AnnealingSchedule::new(1e9, 1.0, 0.995);
        let mut rng = StdRng::seed_from_u64(42);
        let accepted = (0..1000).filter(|_| schedule.accept(1.0, &mut rng)).count();
        assert!(accepted > 990, "expected near-total acceptance, got {accepted}");
    }

    #[test]
    fn test_cool_is_geometric() {
        let mut schedule = AnnealingSchedule::new(100.0, 1.0, 0.5);
        schedule.cool();
        assert_eq!(schedule.temperature(), 50.0);
        schedule.cool();
        assert_eq!(schedule.temperature(), 25.0);
    }

    #[test]
    fn test_is_finished_at_floor() {
        let mut schedule = AnnealingSchedule::new(2.0, 1.0, 0.5);
        assert!(!schedule.is_finished());
        schedule.cool(); // 1.0, floor reached
        assert!(schedule.is_finished());
    }

    #[test]
    fn test_finished_immediately_when_floor_above_start() {
        let schedule = AnnealingSchedule::new(1.0, 2.0, 0.5);
        assert!(schedule.is_finished());
    }
}
