//! GOA configuration.

use crate::error::ConfigError;

/// Configuration for [`Grasshopper`](super::Grasshopper).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoaConfig {
    /// Swarm size.
    pub population_size: usize,
    /// Number of iterations.
    pub max_iterations: usize,
    /// Score the swarm on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for GoaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            max_iterations: 200,
            parallel: false,
            seed: None,
        }
    }
}

impl GoaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
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

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::new("goa", "population_size must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::new("goa", "max_iterations must be at least 1"));
        }
        Ok(())
    }
}
