//! GWO execution loop.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use super::config::GwoConfig;
use crate::problem::{AssignmentProblem, Candidate, Gene};
use crate::solver::{
    argmin, evaluate_population, History, Incumbent, SolveResult, Solver, StationClaims,
};

/// Grey wolf solver.
#[derive(Debug, Clone, Default)]
pub struct GreyWolf {
    config: GwoConfig,
}

impl GreyWolf {
    pub fn new(config: GwoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GwoConfig {
        &self.config
    }

    /// `a` at iteration `t`: linear decay from 2 toward 0.
    fn control(&self, t: usize) -> f64 {
        let total = self.config.max_iterations.max(1) as f64;
        2.0 - 2.0 * (t as f64 / total)
    }

    /// Pulls one wolf toward `alpha`: `round(|α − A·|C·α − x||)` per drone,
    /// with `A = 2a·r1 − a` and `C = 2·r2`.
    fn hunt<R: Rng + ?Sized>(
        problem: &AssignmentProblem,
        wolf: &[Gene],
        alpha: &[Gene],
        a: f64,
        rng: &mut R,
    ) -> Candidate {
        let mut claims = StationClaims::new(problem);

        wolf.iter()
            .zip(alpha)
            .map(|(gene, lead)| {
                let r1: f64 = rng.random();
                let r2: f64 = rng.random();
                let big_a = 2.0 * a * r1 - a;
                let big_c = 2.0 * r2;
                let x = gene.station as f64;
                let l = lead.station as f64;
                let position = (l - big_a * (big_c * l - x).abs()).abs();
                let station = claims.resolve(problem.clamp_station(position), rng);
                Gene::new(station, gene.battery)
            })
            .collect()
    }
}

impl Solver for GreyWolf {
    fn name(&self) -> &'static str {
        "gwo"
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve_with_rng(&self, problem: &AssignmentProblem, rng: &mut StdRng) -> SolveResult {
        let start = Instant::now();
        let config = &self.config;
        let pack_size = config.num_wolves.max(1);
        debug!(
            wolves = pack_size,
            iterations = config.max_iterations,
            "grey wolf started"
        );

        let mut wolves: Vec<Candidate> = (0..pack_size)
            .map(|_| problem.random_assignment(true, rng))
            .collect();
        let mut fitnesses = evaluate_population(problem, &wolves, config.parallel);
        let mut best = Incumbent::from_population(&wolves, &fitnesses);

        let mut history = History::with_capacity(config.max_iterations + 1);
        history.record(best.fitness(), &fitnesses);

        for t in 0..config.max_iterations {
            let a = self.control(t);
            let alpha = wolves[argmin(&fitnesses)].clone();

            wolves = wolves
                .iter()
                .map(|wolf| Self::hunt(problem, wolf, &alpha, a, rng))
                .collect();
            fitnesses = evaluate_population(problem, &wolves, config.parallel);

            best.offer_all(&wolves, &fitnesses);
            history.record(best.fitness(), &fitnesses);
            trace!(iteration = t, a, best = best.fitness(), "gwo iteration");
        }

        debug!(best = best.fitness(), "grey wolf finished");
        SolveResult::new(problem, best, start.elapsed(), config.max_iterations, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::scenario::{build_drones, build_stations, static_scenario};

    #[test]
    fn test_control_decays_linearly() {
        let gwo = GreyWolf::new(GwoConfig::default().with_max_iterations(4));
        assert!((gwo.control(0) - 2.0).abs() < 1e-12);
        assert!((gwo.control(2) - 1.0).abs() < 1e-12);
        assert!((gwo.control(3) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_a_collapses_onto_alpha() {
        // a = 0 gives A = 0, so every wolf lands on the alpha's stations.
        let problem = AssignmentProblem::with_defaults(
            build_drones(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
            build_stations(&[
                ("s0", (0.0, 0.0)),
                ("s1", (1.0, 0.0)),
                ("s2", (2.0, 0.0)),
                ("s3", (3.0, 0.0)),
            ]),
        )
        .unwrap();
        let mut rng = create_rng(17);
        for _ in 0..20 {
            let alpha = problem.random_assignment(false, &mut rng);
            let wolf = problem.random_assignment(true, &mut rng);
            let moved = GreyWolf::hunt(&problem, &wolf, &alpha, 0.0, &mut rng);
            let stations: Vec<isize> = moved.iter().map(|g| g.station).collect();
            let expected: Vec<isize> = alpha.iter().map(|g| g.station).collect();
            assert_eq!(stations, expected);
        }
    }

    #[test]
    fn test_history_and_reproducibility() {
        let problem = static_scenario().unwrap();
        let gwo = GreyWolf::new(
            GwoConfig::default()
                .with_num_wolves(8)
                .with_max_iterations(12)
                .with_seed(5),
        );
        let a = gwo.solve(&problem);
        let b = gwo.solve(&problem);
        assert_eq!(a.best_fitness_history().len(), 13);
        assert_eq!(a.assignments, b.assignments);
        assert_eq!(a.fitness, b.fitness);
    }
}
