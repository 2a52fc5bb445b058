//! Shared solver contract.
//!
//! Every metaheuristic in this crate implements [`Solver`]: it is built
//! from its own configuration, then [`solve`](Solver::solve)s an
//! [`AssignmentProblem`] for a fixed number of iterations and returns a
//! [`SolveResult`].
//!
//! # History convention
//!
//! All solvers record the best fitness of the initial population before
//! the first iteration, then one entry at the end of every iteration, so
//! `history[BEST_FITNESS].len() == iterations + 1`.

mod history;
mod incumbent;
mod repair;
mod select;

use std::collections::BTreeMap;
use std::time::Duration;

use rand::rngs::StdRng;

use crate::problem::{AssignmentProblem, Candidate, UNASSIGNED};
use crate::random::rng_from_seed;

pub use history::{History, BEST_FITNESS, MEAN_FITNESS};
pub use incumbent::Incumbent;
pub use repair::{repair, StationClaims};
pub use select::{inverse_fitness_roulette, weighted_index};

/// A population-based optimizer for [`AssignmentProblem`].
pub trait Solver {
    /// Short algorithm name, e.g. `"pso"`.
    fn name(&self) -> &'static str;

    /// Seed from the solver's configuration, if any.
    fn seed(&self) -> Option<u64>;

    /// Runs the solver with a caller-owned generator.
    fn solve_with_rng(&self, problem: &AssignmentProblem, rng: &mut StdRng) -> SolveResult;

    /// Runs the solver with a generator built from [`seed`](Self::seed),
    /// or from entropy when no seed is configured.
    fn solve(&self, problem: &AssignmentProblem) -> SolveResult {
        let mut rng = rng_from_seed(self.seed());
        self.solve_with_rng(problem, &mut rng)
    }
}

/// Outcome of one [`Solver::solve`] call.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Station index per drone, `-1` when unassigned.
    pub assignments: Vec<isize>,

    /// Best candidate found, battery levels included.
    pub candidate: Candidate,

    /// Fitness of `candidate` (lower is better).
    pub fitness: f64,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Iterations executed.
    pub iterations: usize,

    /// Named convergence curves, oldest first.
    pub history: BTreeMap<String, Vec<f64>>,
}

impl SolveResult {
    pub(crate) fn new(
        problem: &AssignmentProblem,
        best: Incumbent,
        elapsed: Duration,
        iterations: usize,
        history: History,
    ) -> Self {
        let (candidate, fitness) = best.into_parts();
        let assignments = candidate
            .iter()
            .map(|gene| match problem.station_slot(gene.station) {
                Some(slot) => slot as isize,
                None => UNASSIGNED,
            })
            .collect();

        Self {
            assignments,
            candidate,
            fitness,
            elapsed,
            iterations,
            history: history.into_curves(),
        }
    }

    /// Best-so-far fitness after each iteration.
    pub fn best_fitness_history(&self) -> &[f64] {
        self.history
            .get(BEST_FITNESS)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Station assigned to drone `drone`, if any.
    pub fn station_for(&self, drone: usize) -> Option<usize> {
        self.assignments
            .get(drone)
            .and_then(|&s| usize::try_from(s).ok())
    }
}

/// Evaluates every member of `population`.
///
/// With the `parallel` feature and `parallel == true` the members are
/// scored on the rayon pool. Evaluation draws no randomness, so the result
/// is identical either way.
pub(crate) fn evaluate_population(
    problem: &AssignmentProblem,
    population: &[Candidate],
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return population
                .par_iter()
                .map(|candidate| problem.evaluate(candidate))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population
        .iter()
        .map(|candidate| problem.evaluate(candidate))
        .collect()
}

/// Index of the lowest fitness; ties keep the earliest.
pub(crate) fn argmin(fitnesses: &[f64]) -> usize {
    fitnesses
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
