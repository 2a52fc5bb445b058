//! Drone-to-ground-station assignment with population metaheuristics.
//!
//! A set of drones must each be sent to at most one ground station. The
//! cost of an assignment is the travel time of every assigned drone plus
//! its battery deficit, with a fixed penalty for every drone left
//! unassigned (or, when stations are exclusive, sent to a taken station).
//! See [`problem::AssignmentProblem::evaluate`].
//!
//! Seven solvers share that problem and the [`solver::Solver`] contract:
//!
//! - **PSO** ([`pso`]): particle swarm over station indices.
//! - **GWO** ([`gwo`]): grey wolves converging on the pack leader.
//! - **GA** ([`ga`]): elitist genetic algorithm with roulette selection.
//! - **ACO** ([`aco`]): ants constructing assignments from a pheromone trail.
//! - **ABC** ([`abc`]): artificial bee colony with scouts.
//! - **GOA** ([`goa`]): grasshoppers jumping toward the incumbent.
//! - **DE** ([`de`]): differential evolution with greedy replacement.
//!
//! Every solver runs a fixed number of iterations, is reproducible under a
//! seed, and returns its best candidate with a per-iteration history.
//!
//! # Quick start
//!
//! ```
//! use u_groundstation::algorithm::Algorithm;
//! use u_groundstation::scenario::static_scenario;
//!
//! let problem = static_scenario().unwrap();
//! let solver = Algorithm::Pso.build(20, Some(42));
//! let result = solver.solve(&problem);
//! assert_eq!(result.assignments.len(), problem.num_drones());
//! assert!(result.fitness <= result.best_fitness_history()[0]);
//! ```
//!
//! # Features
//!
//! - `parallel`: score populations on the rayon thread pool when a
//!   solver's `parallel` flag is set.
//! - `serde`: derive `Serialize`/`Deserialize` for models, configs and
//!   results.

pub mod abc;
pub mod aco;
pub mod algorithm;
pub mod de;
pub mod error;
pub mod ga;
pub mod goa;
pub mod gwo;
pub mod model;
pub mod problem;
pub mod pso;
pub mod random;
pub mod scenario;
pub mod solver;

pub use algorithm::Algorithm;
pub use error::{ConfigError, ProblemError, SelectionError};
pub use model::{Drone, Station};
pub use problem::{AssignmentProblem, Candidate, Gene, UNASSIGNED};
pub use scenario::Scenario;
pub use solver::{SolveResult, Solver};
