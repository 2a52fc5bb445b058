//! Ant Colony Optimization (ACO).
//!
//! Each station carries a pheromone level. An ant builds an assignment
//! drone by drone, choosing among the stations not yet taken with weight
//! `τ^α · (1 / d)^β`, where `d` is the drone-station distance. Drones left
//! over once stations run out are unassigned. Ants always fly with full
//! batteries.
//!
//! After each colony the trail evaporates by `evaporation_rate` and every
//! ant deposits `deposit_weight / fitness` on the stations it used.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod config;
mod runner;

pub use config::AcoConfig;
pub use runner::AntColony;
