//! Grasshopper Optimization Algorithm (GOA), simplified.
//!
//! Every grasshopper moves each drone's station halfway toward the best
//! assignment found so far, plus a uniform jitter in `[-1, 1]`:
//! `round((x + best) / 2 + U[-1, 1])`. The result is clamped to the valid
//! index range and repaired for uniqueness; battery levels are kept.
//!
//! # References
//!
//! - Saremi, Mirjalili & Lewis (2017), "Grasshopper Optimisation
//!   Algorithm: Theory and application"

mod config;
mod runner;

pub use config::GoaConfig;
pub use runner::Grasshopper;
