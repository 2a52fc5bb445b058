//! PSO configuration.

use crate::error::ConfigError;

/// Configuration for [`ParticleSwarm`](super::ParticleSwarm).
///
/// # Examples
///
/// ```
/// use u_groundstation::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_num_particles(10)
///     .with_max_iterations(5)
///     .with_seed(42);
/// assert_eq!(config.num_particles, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Swarm size.
    pub num_particles: usize,

    /// Number of iterations; the only stopping criterion.
    pub max_iterations: usize,

    /// Weight of a particle's current position.
    pub inertia_weight: f64,

    /// Weight of the personal-best term.
    pub cognitive_weight: f64,

    /// Weight of the global-best term.
    pub social_weight: f64,

    /// Score the swarm on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            num_particles: 30,
            max_iterations: 200,
            inertia_weight: 0.8,
            cognitive_weight: 1.5,
            social_weight: 2.0,
            parallel: false,
            seed: None,
        }
    }
}

impl PsoConfig {
    pub fn with_num_particles(mut self, n: usize) -> Self {
        self.num_particles = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_inertia_weight(mut self, w: f64) -> Self {
        self.inertia_weight = w;
        self
    }

    pub fn with_cognitive_weight(mut self, w: f64) -> Self {
        self.cognitive_weight = w;
        self
    }

    pub fn with_social_weight(mut self, w: f64) -> Self {
        self.social_weight = w;
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
        if self.num_particles == 0 {
            return Err(ConfigError::new("pso", "num_particles must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::new("pso", "max_iterations must be at least 1"));
        }
        for (name, w) in [
            ("inertia_weight", self.inertia_weight),
            ("cognitive_weight", self.cognitive_weight),
            ("social_weight", self.social_weight),
        ] {
            if !w.is_finite() {
                return Err(ConfigError::new("pso", format!("{name} must be finite, got {w}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert_eq!(config.num_particles, 30);
        assert_eq!(config.max_iterations, 200);
        assert!((config.inertia_weight - 0.8).abs() < 1e-12);
        assert!((config.cognitive_weight - 1.5).abs() < 1e-12);
        assert!((config.social_weight - 2.0).abs() < 1e-12);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate() {
        assert!(PsoConfig::default().validate().is_ok());
        assert!(PsoConfig::default().with_num_particles(0).validate().is_err());
        assert!(PsoConfig::default().with_max_iterations(0).validate().is_err());
        assert!(PsoConfig::default()
            .with_social_weight(f64::NAN)
            .validate()
            .is_err());
    }
}
