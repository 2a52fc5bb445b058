//! DE generation loop.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::Rng;
use tracing::{debug, trace};

use super::config::DeConfig;
use crate::problem::{AssignmentProblem, Candidate, Gene};
use crate::solver::{evaluate_population, repair, History, Incumbent, SolveResult, Solver};

/// Differential evolution solver.
///
/// ```
/// use u_groundstation::de::{DeConfig, DifferentialEvolution};
/// use u_groundstation::scenario::static_scenario;
/// use u_groundstation::solver::Solver;
///
/// let problem = static_scenario().unwrap();
/// let de = DifferentialEvolution::new(DeConfig::default().with_max_iterations(10).with_seed(3));
/// let result = de.solve(&problem);
/// assert!(result.fitness.is_finite());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DifferentialEvolution {
    config: DeConfig,
}

impl DifferentialEvolution {
    pub fn new(config: DeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeConfig {
        &self.config
    }

    /// Picks `a, b, c` for target `i`: distinct and different from `i`
    /// when the population allows it, else with repetition.
    fn partners<R: Rng + ?Sized>(n: usize, i: usize, rng: &mut R) -> [usize; 3] {
        if n < 4 {
            return std::array::from_fn(|_| rng.random_range(0..n));
        }
        let picked = index::sample(rng, n - 1, 3);
        let skip_target = |k: usize| if k >= i { k + 1 } else { k };
        [
            skip_target(picked.index(0)),
            skip_target(picked.index(1)),
            skip_target(picked.index(2)),
        ]
    }

    /// Builds the repaired trial vector for target `i`.
    fn trial<R: Rng + ?Sized>(
        &self,
        problem: &AssignmentProblem,
        population: &[Candidate],
        i: usize,
        rng: &mut R,
    ) -> Candidate {
        let [a, b, c] = Self::partners(population.len(), i, rng);
        let f = self.config.scaling_factor;
        let target = &population[i];
        let forced = rng.random_range(0..target.len().max(1));

        let mixed: Candidate = target
            .iter()
            .enumerate()
            .map(|(j, &gene)| {
                if j != forced && rng.random::<f64>() >= self.config.crossover_rate {
                    return gene;
                }
                let (xa, xb, xc) = (population[a][j], population[b][j], population[c][j]);
                let station = xa.station as f64 + f * (xb.station - xc.station) as f64;
                let battery = xa.battery + f * (xb.battery - xc.battery);
                Gene::new(problem.clamp_station(station), problem.clamp_battery(j, battery))
            })
            .collect();

        repair(problem, &mixed, rng)
    }
}

impl Solver for DifferentialEvolution {
    fn name(&self) -> &'static str {
        "dea"
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
            f = config.scaling_factor,
            cr = config.crossover_rate,
            "differential evolution started"
        );

        let mut population: Vec<Candidate> = (0..size)
            .map(|_| problem.random_assignment(true, rng))
            .collect();
        let mut fitnesses = evaluate_population(problem, &population, false);
        let mut best = Incumbent::from_population(&population, &fitnesses);

        let mut history = History::with_capacity(config.max_iterations + 1);
        history.record(best.fitness(), &fitnesses);

        for iter in 0..config.max_iterations {
            let mut replaced = 0usize;
            for i in 0..size {
                let trial = self.trial(problem, &population, i, rng);
                let trial_fitness = problem.evaluate(&trial);
                if trial_fitness < fitnesses[i] {
                    best.try_install(&trial, trial_fitness);
                    population[i] = trial;
                    fitnesses[i] = trial_fitness;
                    replaced += 1;
                }
            }

            history.record(best.fitness(), &fitnesses);
            trace!(iteration = iter, replaced, best = best.fitness(), "de iteration");
        }

        debug!(best = best.fitness(), "differential evolution finished");
        SolveResult::new(problem, best, start.elapsed(), config.max_iterations, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::UNASSIGNED;
    use crate::random::create_rng;
    use crate::scenario::static_scenario;

    #[test]
    fn test_partners_distinct_from_target() {
        let mut rng = create_rng(10);
        for i in 0..6 {
            for _ in 0..50 {
                let [a, b, c] = DifferentialEvolution::partners(6, i, &mut rng);
                assert!(a != i && b != i && c != i);
                assert!(a != b && b != c && a != c);
                assert!(a < 6 && b < 6 && c < 6);
            }
        }
    }

    #[test]
    fn test_partners_small_population() {
        let mut rng = create_rng(10);
        for _ in 0..20 {
            let picked = DifferentialEvolution::partners(2, 1, &mut rng);
            assert!(picked.iter().all(|&k| k < 2));
        }
        assert_eq!(DifferentialEvolution::partners(1, 0, &mut rng), [0, 0, 0]);
    }

    #[test]
    fn test_zero_crossover_changes_one_gene() {
        // The target is empty; every partner flies unassigned on a full battery.
        let problem = static_scenario().unwrap();
        let de = DifferentialEvolution::new(DeConfig::default().with_crossover_rate(0.0));
        let empty: Candidate = (0..problem.num_drones())
            .map(|_| Gene::new(UNASSIGNED, 0.0))
            .collect();
        let full: Candidate = problem
            .drones()
            .iter()
            .map(|d| Gene::new(UNASSIGNED, d.max_battery_level()))
            .collect();
        let population = vec![empty.clone(), full.clone(), full.clone(), full];
        let mut rng = create_rng(14);

        for _ in 0..50 {
            let trial = de.trial(&problem, &population, 0, &mut rng);
            let changed: Vec<usize> = (0..trial.len()).filter(|&j| trial[j] != empty[j]).collect();
            assert_eq!(changed.len(), 1, "trial {trial:?}");
            let j = changed[0];
            assert_eq!(trial[j].station, UNASSIGNED);
            assert_eq!(trial[j].battery, problem.drones()[j].max_battery_level());
        }
    }

    #[test]
    fn test_greedy_population_history() {
        let problem = static_scenario().unwrap();
        let de = DifferentialEvolution::new(
            DeConfig::default()
                .with_population_size(3)
                .with_max_iterations(20)
                .with_seed(2),
        );
        let result = de.solve(&problem);
        assert_eq!(result.best_fitness_history().len(), 21);
        assert_eq!(result.fitness, problem.evaluate(&result.candidate));
        let mean = &result.history[crate::solver::MEAN_FITNESS];
        for w in mean.windows(2) {
            assert!(w[1] <= w[0] + 1e-9);
        }
    }
}
