//! GOA execution loop.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use super::config::GoaConfig;
use crate::problem::{AssignmentProblem, Candidate, Gene};
use crate::solver::{evaluate_population, History, Incumbent, SolveResult, Solver, StationClaims};

/// Grasshopper solver.
#[derive(Debug, Clone, Default)]
pub struct Grasshopper {
    config: GoaConfig,
}

impl Grasshopper {
    pub fn new(config: GoaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GoaConfig {
        &self.config
    }

    fn jump<R: Rng + ?Sized>(
        problem: &AssignmentProblem,
        hopper: &[Gene],
        best: &[Gene],
        rng: &mut R,
    ) -> Candidate {
        let mut claims = StationClaims::new(problem);

        hopper
            .iter()
            .zip(best)
            .map(|(gene, target)| {
                let jitter: f64 = rng.random_range(-1.0..=1.0);
                let midpoint = (gene.station + target.station) as f64 / 2.0;
                let station = claims.resolve(problem.clamp_station(midpoint + jitter), rng);
                Gene::new(station, gene.battery)
            })
            .collect()
    }
}

impl Solver for Grasshopper {
    fn name(&self) -> &'static str {
        "goa"
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve_with_rng(&self, problem: &AssignmentProblem, rng: &mut StdRng) -> SolveResult {
        let start = Instant::now();
        let config = &self.config;
        let size = config.population_size.max(1);
        debug!(
            population = size,
            iterations = config.max_iterations,
            "grasshopper started"
        );

        let mut swarm: Vec<Candidate> = (0..size)
            .map(|_| problem.random_assignment(true, rng))
            .collect();
        let mut fitnesses = evaluate_population(problem, &swarm, config.parallel);
        let mut best = Incumbent::from_population(&swarm, &fitnesses);

        let mut history = History::with_capacity(config.max_iterations + 1);
        history.record(best.fitness(), &fitnesses);

        for iter in 0..config.max_iterations {
            let target = best.candidate().clone();
            swarm = swarm
                .iter()
                .map(|hopper| Self::jump(problem, hopper, &target, rng))
                .collect();
            fitnesses = evaluate_population(problem, &swarm, config.parallel);

            best.offer_all(&swarm, &fitnesses);
            history.record(best.fitness(), &fitnesses);
            trace!(iteration = iter, best = best.fitness(), "goa iteration");
        }

        debug!(best = best.fitness(), "grasshopper finished");
        SolveResult::new(problem, best, start.elapsed(), config.max_iterations, history)
    }
}
