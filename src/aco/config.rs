//! ACO configuration.

use crate::error::AcoError;

/// Configuration for an Ant Colony run.
///
/// # Examples
///
/// ```
/// use u_antpath::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(50)
///     .with_num_iterations(200)
///     .with_evaporation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoConfig {
    /// Ants spawned per iteration.
    pub num_ants: usize,

    /// Number of colony iterations.
    pub num_iterations: usize,

    /// Fraction of pheromone removed each iteration, in `[0, 1)`.
    ///
    /// A rate of 1 would wipe the whole field every iteration and is
    /// rejected by [`validate`](Self::validate).
    pub evaporation_rate: f64,

    /// Pheromone influence exponent (α).
    pub alpha: f64,

    /// Visibility influence exponent (β).
    pub beta: f64,

    /// Pheromone level every edge starts with.
    pub initial_pheromone: f64,

    /// Only tours that follow real edges all the way to the end node may
    /// become the best.
    ///
    /// Off by default: disconnected, forced and truncated tours still
    /// compete on their (usually infinite or inflated) length.
    pub require_complete_tours: bool,

    /// Construct the ants of one iteration in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical to a sequential run with the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 100,
            num_iterations: 100,
            evaporation_rate: 0.1,
            alpha: 1.0,
            beta: 2.0,
            initial_pheromone: 1.0,
            require_complete_tours: false,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_require_complete_tours(mut self, require: bool) -> Self {
        self.require_complete_tours = require;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.num_ants == 0 {
            return Err(AcoError::InvalidConfig("num_ants must be positive".into()));
        }
        if self.num_iterations == 0 {
            return Err(AcoError::InvalidConfig(
                "num_iterations must be positive".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(AcoError::InvalidConfig(format!(
                "evaporation_rate must be in [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            )));
        }
        Ok(())
    }
}
