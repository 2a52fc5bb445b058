//! Name-based solver registry.
//!
//! Maps the short algorithm names used on the command line to solvers
//! built with default hyperparameters and a caller-chosen iteration budget.

use std::fmt;
use std::str::FromStr;

use crate::abc::{AbcConfig, BeeColony};
use crate::aco::{AcoConfig, AntColony};
use crate::de::{DeConfig, DifferentialEvolution};
use crate::error::SelectionError;
use crate::ga::{GaConfig, Genetic};
use crate::goa::{GoaConfig, Grasshopper};
use crate::gwo::{GreyWolf, GwoConfig};
use crate::pso::{ParticleSwarm, PsoConfig};
use crate::solver::Solver;

/// One of the seven available metaheuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Pso,
    Gwo,
    Aco,
    Ga,
    Abc,
    Goa,
    De,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Pso,
        Algorithm::Gwo,
        Algorithm::Aco,
        Algorithm::Ga,
        Algorithm::Abc,
        Algorithm::Goa,
        Algorithm::De,
    ];

    /// Short name, identical to [`Solver::name`] of the built solver.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Pso => "pso",
            Algorithm::Gwo => "gwo",
            Algorithm::Aco => "aco",
            Algorithm::Ga => "ga",
            Algorithm::Abc => "abc",
            Algorithm::Goa => "goa",
            Algorithm::De => "dea",
        }
    }

    /// Builds the solver with default hyperparameters, `iterations`
    /// iterations (generations for GA) and an optional seed.
    pub fn build(self, iterations: usize, seed: Option<u64>) -> Box<dyn Solver> {
        match self {
            Algorithm::Pso => {
                let mut config = PsoConfig::default().with_max_iterations(iterations);
                config.seed = seed;
                Box::new(ParticleSwarm::new(config))
            }
            Algorithm::Gwo => {
                let mut config = GwoConfig::default().with_max_iterations(iterations);
                config.seed = seed;
                Box::new(GreyWolf::new(config))
            }
            Algorithm::Aco => {
                let mut config = AcoConfig::default().with_max_iterations(iterations);
                config.seed = seed;
                Box::new(AntColony::new(config))
            }
            Algorithm::Ga => {
                let mut config = GaConfig::default().with_max_generations(iterations);
                config.seed = seed;
                Box::new(Genetic::new(config))
            }
            Algorithm::Abc => {
                let mut config = AbcConfig::default().with_max_iterations(iterations);
                config.seed = seed;
                Box::new(BeeColony::new(config))
            }
            Algorithm::Goa => {
                let mut config = GoaConfig::default().with_max_iterations(iterations);
                config.seed = seed;
                Box::new(Grasshopper::new(config))
            }
            Algorithm::De => {
                let mut config = DeConfig::default().with_max_iterations(iterations);
                config.seed = seed;
                Box::new(DifferentialEvolution::new(config))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SelectionError;

    /// Case-insensitive; `"de"` is accepted as an alias of `"dea"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "de" {
            return Ok(Algorithm::De);
        }
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| SelectionError::UnknownAlgorithm(s.to_string()))
    }
}
