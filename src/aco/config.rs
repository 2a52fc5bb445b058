//! ACO configuration.

use crate::error::ConfigError;

/// Configuration for [`AntColony`](super::AntColony).
///
/// # Examples
///
/// ```
/// use u_groundstation::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(10)
///     .with_evaporation_rate(0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants per colony.
    pub num_ants: usize,

    /// Number of iterations.
    pub max_iterations: usize,

    /// Fraction of pheromone lost per iteration (ρ, 0.0–1.0).
    pub evaporation_rate: f64,

    /// Pheromone exponent (α).
    pub alpha: f64,

    /// Distance heuristic exponent (β).
    pub beta: f64,

    /// Pheromone level on every station before the first deposit.
    pub initial_pheromone: f64,

    /// Deposit numerator (Q); an ant adds `Q / fitness` per station used.
    pub deposit_weight: f64,

    /// Score each colony on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 30,
            max_iterations: 200,
            evaporation_rate: 0.5,
            alpha: 1.0,
            beta: 2.0,
            initial_pheromone: 1.0,
            deposit_weight: 1.0,
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

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets ρ, clamped to `[0, 1]`.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate.clamp(0.0, 1.0);
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

    pub fn with_initial_pheromone(mut self, tau: f64) -> Self {
        self.initial_pheromone = tau;
        self
    }

    pub fn with_deposit_weight(mut self, q: f64) -> Self {
        self.deposit_weight = q;
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
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_ants == 0 {
            return Err(ConfigError::new("aco", "num_ants must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::new("aco", "max_iterations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(ConfigError::new("aco", "evaporation_rate must be in [0, 1]"));
        }
        if self.alpha.is_nan() || self.alpha < 0.0 || self.beta.is_nan() || self.beta < 0.0 {
            return Err(ConfigError::new("aco", "alpha and beta must be non-negative"));
        }
        if self.initial_pheromone.is_nan() || self.initial_pheromone <= 0.0 {
            return Err(ConfigError::new("aco", "initial_pheromone must be positive"));
        }
        if self.deposit_weight.is_nan() || self.deposit_weight < 0.0 {
            return Err(ConfigError::new("aco", "deposit_weight must be non-negative"));
        }
        Ok(())
    }
}
