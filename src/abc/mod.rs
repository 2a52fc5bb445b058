//! Artificial Bee Colony (ABC).
//!
//! The colony keeps one food source (candidate) per employed bee, each
//! with a trial counter. An iteration has three phases:
//!
//! - **Employed**: every source tries a neighbor and keeps it only if it
//!   scores strictly better, otherwise its trial counter grows.
//! - **Onlooker**: onlookers pick sources by inverse-fitness roulette and
//!   do the same greedy neighbor step.
//! - **Scout**: a source whose trials exceed `limit` is abandoned and
//!   replaced by a fresh random assignment.
//!
//! A neighbor perturbs one drone `j` toward or away from a random partner
//! source `k`: `x_j + φ(x_j − x_kj)` with `φ ∈ [-1, 1]`, applied to both
//! the station index and the battery level.
//!
//! # References
//!
//! - Karaboga (2005), "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization"

mod config;
mod runner;

pub use config::AbcConfig;
pub use runner::BeeColony;
