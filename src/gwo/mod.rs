//! Grey Wolf Optimizer (GWO).
//!
//! Wolves are ranked by fitness each iteration and the pack moves toward
//! the leader. This variant uses the alpha wolf only; beta and delta are
//! not consulted. The control parameter `a` decays linearly from 2 to 0
//! over the run, shifting the pack from exploration to exploitation.
//!
//! # References
//!
//! - Mirjalili, Mirjalili & Lewis (2014), "Grey Wolf Optimizer",
//!   *Advances in Engineering Software* 69, 46–61

mod config;
mod runner;

pub use config::GwoConfig;
pub use runner::GreyWolf;
