//! Genetic Algorithm (GA).
//!
//! Chromosomes are candidate assignments. Each generation keeps the single
//! best chromosome unchanged (elitism) and fills the rest of the population
//! with offspring:
//!
//! 1. two parents by inverse-fitness roulette
//! 2. single-point crossover with probability `crossover_rate`
//! 3. per-gene mutation with probability `mutation_rate`, redrawing the
//!    station (possibly unassigned) and the battery level
//! 4. station uniqueness repair
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::Genetic;
