//! ABC execution loop.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use super::config::AbcConfig;
use crate::problem::{AssignmentProblem, Candidate, Gene};
use crate::solver::{
    evaluate_population, inverse_fitness_roulette, History, Incumbent, SolveResult, Solver,
};

/// Food sources with their scores and failed-improvement counters.
#[derive(Debug, Clone)]
struct Hive {
    sources: Vec<Candidate>,
    fitnesses: Vec<f64>,
    trials: Vec<usize>,
}

impl Hive {
    fn new(problem: &AssignmentProblem, size: usize, rng: &mut StdRng) -> Self {
        let sources: Vec<Candidate> = (0..size)
            .map(|_| problem.random_assignment(true, rng))
            .collect();
        let fitnesses = evaluate_population(problem, &sources, false);
        Self {
            trials: vec![0; sources.len()],
            sources,
            fitnesses,
        }
    }

    /// One greedy neighbor step on source `i`. Returns true on improvement.
    fn forage<R: Rng + ?Sized>(
        &mut self,
        problem: &AssignmentProblem,
        i: usize,
        rng: &mut R,
    ) -> bool {
        let candidate = neighbor(problem, &self.sources, i, rng);
        let fitness = problem.evaluate(&candidate);
        if fitness < self.fitnesses[i] {
            self.sources[i] = candidate;
            self.fitnesses[i] = fitness;
            self.trials[i] = 0;
            true
        } else {
            self.trials[i] += 1;
            false
        }
    }

    /// Replaces every source whose trials exceed `limit`. Returns how many.
    fn scout<R: Rng + ?Sized>(
        &mut self,
        problem: &AssignmentProblem,
        limit: usize,
        rng: &mut R,
    ) -> usize {
        let mut abandoned = 0;
        for i in 0..self.sources.len() {
            if self.trials[i] > limit {
                self.sources[i] = problem.random_assignment(true, rng);
                self.fitnesses[i] = problem.evaluate(&self.sources[i]);
                self.trials[i] = 0;
                abandoned += 1;
            }
        }
        abandoned
    }
}

/// Perturbs one drone of source `i` relative to a random partner source.
///
/// With a single source there is no partner, so a fresh random assignment
/// is proposed instead. When stations must be unique and the new station
/// is held by another drone, the two drones swap stations.
fn neighbor<R: Rng + ?Sized>(
    problem: &AssignmentProblem,
    sources: &[Candidate],
    i: usize,
    rng: &mut R,
) -> Candidate {
    let n = sources.len();
    if n < 2 || problem.num_drones() == 0 {
        return problem.random_assignment(true, rng);
    }

    let mut k = rng.random_range(0..n - 1);
    if k >= i {
        k += 1;
    }
    let j = rng.random_range(0..problem.num_drones());
    let phi: f64 = rng.random_range(-1.0..=1.0);

    let mut next = sources[i].clone();
    let current = next[j];
    let partner = sources[k][j];

    let x = current.station as f64;
    let station = problem.clamp_station(x + phi * (x - partner.station as f64));
    let battery = current.battery + phi * (current.battery - partner.battery);
    let battery = problem.clamp_battery(j, battery);

    if problem.require_unique_station() && station >= 0 {
        if let Some(holder) = next.iter().position(|g| g.station == station) {
            if holder != j {
                next[holder].station = current.station;
            }
        }
    }
    next[j] = Gene::new(station, battery);
    next
}

/// Artificial bee colony solver.
#[derive(Debug, Clone, Default)]
pub struct BeeColony {
    config: AbcConfig,
}

impl BeeColony {
    pub fn new(config: AbcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AbcConfig {
        &self.config
    }
}

impl Solver for BeeColony {
    fn name(&self) -> &'static str {
        "abc"
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve_with_rng(&self, problem: &AssignmentProblem, rng: &mut StdRng) -> SolveResult {
        let start = Instant::now();
        let config = &self.config;
        let size = config.num_employed_bees.max(1);
        debug!(
            sources = size,
            onlookers = config.num_onlooker_bees,
            iterations = config.max_iterations,
            "bee colony started"
        );

        let mut hive = Hive::new(problem, size, rng);
        let mut best = Incumbent::from_population(&hive.sources, &hive.fitnesses);
        let mut history = History::with_capacity(config.max_iterations + 1);
        history.record(best.fitness(), &hive.fitnesses);

        for iter in 0..config.max_iterations {
            // Employed phase
            for i in 0..size {
                hive.forage(problem, i, rng);
            }

            // Onlooker phase
            for _ in 0..config.num_onlooker_bees {
                let i = inverse_fitness_roulette(&hive.fitnesses, rng);
                hive.forage(problem, i, rng);
            }

            // Scout phase
            let abandoned = hive.scout(problem, config.limit, rng);

            best.offer_all(&hive.sources, &hive.fitnesses);
            history.record(best.fitness(), &hive.fitnesses);
            trace!(iteration = iter, abandoned, best = best.fitness(), "abc iteration");
        }

        debug!(best = best.fitness(), "bee colony finished");
        SolveResult::new(problem, best, start.elapsed(), config.max_iterations, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::scenario::static_scenario;

    fn assigned_unique(candidate: &[Gene]) -> bool {
        let mut seen: Vec<isize> = candidate
            .iter()
            .map(|g| g.station)
            .filter(|&s| s >= 0)
            .collect();
        let n = seen.len();
        seen.sort_unstable();
        seen.dedup();
        seen.len() == n
    }

    #[test]
    fn test_neighbor_keeps_stations_unique() {
        let problem = static_scenario().unwrap();
        let mut rng = create_rng(31);
        let sources: Vec<Candidate> = (0..4)
            .map(|_| problem.random_assignment(true, &mut rng))
            .collect();

        for step in 0..200 {
            let next = neighbor(&problem, &sources, step % 4, &mut rng);
            assert_eq!(next.len(), problem.num_drones());
            assert!(assigned_unique(&next), "duplicate station in {next:?}");
            for (gene, drone) in next.iter().zip(problem.drones()) {
                assert!((0.0..=drone.max_battery_level()).contains(&gene.battery));
            }
        }
    }

    #[test]
    fn test_neighbor_touches_at_most_two_drones() {
        let problem = static_scenario().unwrap();
        let mut rng = create_rng(5);
        let sources: Vec<Candidate> = (0..3)
            .map(|_| problem.random_assignment(true, &mut rng))
            .collect();

        for _ in 0..100 {
            let next = neighbor(&problem, &sources, 0, &mut rng);
            let changed = next.iter().zip(&sources[0]).filter(|(a, b)| a != b).count();
            assert!(changed <= 2);
        }
    }

    #[test]
    fn test_scout_replaces_exhausted_sources() {
        let problem = static_scenario().unwrap();
        let mut rng = create_rng(8);
        let mut hive = Hive::new(&problem, 3, &mut rng);
        hive.trials = vec![0, 3, 4];

        let abandoned = hive.scout(&problem, 3, &mut rng);
        assert_eq!(abandoned, 1);
        assert_eq!(hive.trials, vec![0, 3, 0]);
        assert_eq!(hive.fitnesses[2], problem.evaluate(&hive.sources[2]));
    }

    #[test]
    fn test_forage_is_greedy() {
        let problem = static_scenario().unwrap();
        let mut rng = create_rng(12);
        let mut hive = Hive::new(&problem, 5, &mut rng);
        for _ in 0..100 {
            let before = hive.fitnesses[0];
            let improved = hive.forage(&problem, 0, &mut rng);
            assert!(hive.fitnesses[0] <= before);
            assert_eq!(improved, hive.trials[0] == 0);
        }
    }

    #[test]
    fn test_single_source_and_history() {
        let problem = static_scenario().unwrap();
        let abc = BeeColony::new(
            AbcConfig::default()
                .with_num_employed_bees(1)
                .with_num_onlooker_bees(2)
                .with_max_iterations(10)
                .with_seed(3),
        );
        let result = abc.solve(&problem);
        assert_eq!(result.best_fitness_history().len(), 11);
        assert_eq!(result.fitness, problem.evaluate(&result.candidate));
    }
}
