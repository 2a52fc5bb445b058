//! Differential Evolution (DE/rand/1/bin).
//!
//! For each target vector `i`, three other vectors `a, b, c` form a donor
//! `a + F·(b − c)` on both the station index (rounded and clamped) and the
//! battery level (clamped). Binomial crossover mixes donor and target
//! genes with rate `CR`, always taking at least one donor gene. The trial
//! is repaired for uniqueness and replaces the target only if it scores
//! strictly better.
//!
//! Populations smaller than four cannot supply three distinct partners;
//! `a, b, c` are then drawn with repetition from the whole population.
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and
//!   Efficient Heuristic for Global Optimization over Continuous Spaces"

mod config;
mod runner;

pub use config::DeConfig;
pub use runner::DifferentialEvolution;
