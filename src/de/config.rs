//! DE configuration.

use crate::error::ConfigError;

/// Configuration for [`DifferentialEvolution`](super::DifferentialEvolution).
///
/// # Examples
///
/// ```
/// use u_groundstation::de::DeConfig;
///
/// let config = DeConfig::default().with_scaling_factor(0.5).with_seed(9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeConfig {
    /// Number of vectors.
    pub population_size: usize,

    /// Number of iterations.
    pub max_iterations: usize,

    /// Differential weight (F).
    pub scaling_factor: f64,

    /// Binomial crossover rate (CR, 0.0–1.0).
    pub crossover_rate: f64,

    /// Random seed for reproducibility. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for DeConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            max_iterations: 200,
            scaling_factor: 0.8,
            crossover_rate: 0.7,
            seed: None,
        }
    }
}

impl DeConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_scaling_factor(mut self, f: f64) -> Self {
        self.scaling_factor = f;
        self
    }

    /// Sets CR, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::new("dea", "population_size must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::new("dea", "max_iterations must be at least 1"));
        }
        if !self.scaling_factor.is_finite() {
            return Err(ConfigError::new("dea", "scaling_factor must be finite"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::new("dea", "crossover_rate must be in [0, 1]"));
        }
        Ok(())
    }
}
