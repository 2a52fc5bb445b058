//! ABC configuration.

use crate::error::ConfigError;

/// Configuration for [`BeeColony`](super::BeeColony).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbcConfig {
    /// Employed bees, which is also the number of food sources.
    pub num_employed_bees: usize,

    /// Onlooker steps per iteration.
    pub num_onlooker_bees: usize,

    /// Number of iterations.
    pub max_iterations: usize,

    /// Failed improvements tolerated before a source is abandoned.
    pub limit: usize,

    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            num_employed_bees: 20,
            num_onlooker_bees: 20,
            max_iterations: 200,
            limit: 50,
            seed: None,
        }
    }
}

impl AbcConfig {
    pub fn with_num_employed_bees(mut self, n: usize) -> Self {
        self.num_employed_bees = n;
        self
    }

    pub fn with_num_onlooker_bees(mut self, n: usize) -> Self {
        self.num_onlooker_bees = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_employed_bees == 0 {
            return Err(ConfigError::new("abc", "num_employed_bees must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::new("abc", "max_iterations must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AbcConfig::default();
        assert_eq!(config.num_employed_bees, 20);
        assert_eq!(config.num_onlooker_bees, 20);
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.limit, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_onlookers_is_valid() {
        let config = AbcConfig::default().with_num_onlooker_bees(0);
        assert!(config.validate().is_ok());
        assert!(AbcConfig::default()
            .with_num_employed_bees(0)
            .validate()
            .is_err());
    }
}
