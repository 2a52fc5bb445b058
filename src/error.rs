//! Error types.
//!
//! Errors only surface at the edges of the crate: when a problem is
//! constructed, when a solver configuration is validated, and when a user
//! selects an algorithm or scenario by name. Solver runs themselves never
//! fail; numeric corner cases are absorbed by clamping and epsilon guards.

use thiserror::Error;

/// Rejected [`AssignmentProblem`](crate::problem::AssignmentProblem) construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    /// No drones were supplied.
    #[error("at least one drone is required")]
    NoDrones,

    /// No stations were supplied.
    #[error("at least one station is required")]
    NoStations,

    /// The unassigned penalty is negative or not a finite number.
    #[error("unassigned penalty must be a non-negative finite number, got {0}")]
    InvalidPenalty(f64),

    /// A drone's battery capacity cannot be used as a divisor.
    #[error("drone {index} ({model}) has invalid max battery level {value}")]
    InvalidBattery {
        /// Position of the drone in the input list.
        index: usize,
        /// Drone model name.
        model: String,
        /// Offending capacity.
        value: f64,
    },
}

/// Rejected solver configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {solver} configuration: {reason}")]
pub struct ConfigError {
    /// Short solver name (`"pso"`, `"ga"`, ...).
    pub solver: &'static str,
    /// Human readable description of the violated constraint.
    pub reason: String,
}

impl ConfigError {
    pub(crate) fn new(solver: &'static str, reason: impl Into<String>) -> Self {
        Self {
            solver,
            reason: reason.into(),
        }
    }
}

/// Unknown name at the selection boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No solver is registered under this name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// No scenario is registered under this name.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}
