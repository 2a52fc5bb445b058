//! Particle Swarm Optimization (PSO).
//!
//! Each particle is a candidate assignment. Station indices are treated as
//! positions on a line: every iteration a particle is pulled by inertia,
//! its personal best and the swarm's global best, then rounded back onto
//! the valid index range and repaired for station uniqueness. Battery
//! levels ride along unchanged.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod runner;

pub use config::PsoConfig;
pub use runner::ParticleSwarm;
