//! Annealing configuration.

use crate::distance::DistanceUnit;

/// Configuration for the simulated annealing solver.
///
/// # Examples
///
/// ```
/// use u_dispatch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_max_iterations(2000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The loop stops once T drops to or below this.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = cooling_rate * T_k`.
    pub cooling_rate: f64,

    /// Hard cap on the number of iterations.
    pub max_iterations: usize,

    /// Unit for all reported distances and costs.
    pub distance_unit: DistanceUnit,

    /// Emit a trace line for every iteration. Has no effect on results.
    pub verbose: bool,

    /// Random seed for reproducible runs. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            final_temperature: 1.0,
            cooling_rate: 0.995,
            max_iterations: 10_000,
            distance_unit: DistanceUnit::Kilometers,
            verbose: false,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// `final_temperature >= initial_temperature` is allowed: the loop then
    /// runs zero iterations and the solver returns the initial assignment.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.final_temperature <= 0.0 {
            return Err("final_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}
