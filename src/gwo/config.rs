//! GWO configuration.

use crate::error::ConfigError;

/// Configuration for [`GreyWolf`](super::GreyWolf).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GwoConfig {
    /// Pack size.
    pub num_wolves: usize,
    /// Number of iterations.
    pub max_iterations: usize,
    /// Score the pack on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for GwoConfig {
    fn default() -> Self {
        Self {
            num_wolves: 20,
            max_iterations: 200,
            parallel: false,
            seed: None,
        }
    }
}

impl GwoConfig {
    pub fn with_num_wolves(mut self, n: usize) -> Self {
        self.num_wolves = n;
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
        if self.num_wolves == 0 {
            return Err(ConfigError::new("gwo", "num_wolves must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::new("gwo", "max_iterations must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GwoConfig::default();
        assert_eq!(config.num_wolves, 20);
        assert_eq!(config.max_iterations, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_and_validate() {
        let config = GwoConfig::default().with_num_wolves(0).with_seed(3);
        assert_eq!(config.seed, Some(3));
        assert!(config.validate().is_err());
    }
}
