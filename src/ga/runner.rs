//! GA evolutionary loop execution.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use super::config::GaConfig;
use crate::problem::{AssignmentProblem, Candidate, Gene};
use crate::solver::{
    argmin, evaluate_population, inverse_fitness_roulette, repair, History, Incumbent,
    SolveResult, Solver,
};

/// Genetic algorithm solver.
///
/// # Usage
///
/// ```
/// use u_groundstation::ga::{GaConfig, Genetic};
/// use u_groundstation::scenario::static_scenario;
/// use u_groundstation::solver::Solver;
///
/// let problem = static_scenario().unwrap();
/// let ga = Genetic::new(GaConfig::default().with_max_generations(10).with_seed(42));
/// let result = ga.solve(&problem);
/// println!("Best fitness: {}", result.fitness);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Genetic {
    config: GaConfig,
}

impl Genetic {
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Single-point crossover at a cut in `[1, n)`.
    ///
    /// Returns copies of the parents when the crossover roll fails or the
    /// chromosome is too short to cut.
    fn crossover<R: Rng + ?Sized>(
        &self,
        p1: &[Gene],
        p2: &[Gene],
        rng: &mut R,
    ) -> (Candidate, Candidate) {
        let n = p1.len().min(p2.len());
        if n < 2 || rng.random::<f64>() >= self.config.crossover_rate {
            return (p1.to_vec(), p2.to_vec());
        }

        let point = rng.random_range(1..n);
        let c1 = p1[..point].iter().chain(&p2[point..]).copied().collect();
        let c2 = p2[..point].iter().chain(&p1[point..]).copied().collect();
        (c1, c2)
    }

    /// Redraws each gene with probability `mutation_rate`.
    fn mutate<R: Rng + ?Sized>(
        &self,
        problem: &AssignmentProblem,
        chromosome: &[Gene],
        rng: &mut R,
    ) -> Candidate {
        chromosome
            .iter()
            .enumerate()
            .map(|(i, &gene)| {
                if rng.random::<f64>() < self.config.mutation_rate {
                    Gene::new(problem.random_station(rng), problem.random_battery(i, rng))
                } else {
                    gene
                }
            })
            .collect()
    }

    /// Breeds one generation. Slot 0 carries the current best member and
    /// its score unchanged; the rest are repaired, scored offspring.
    fn next_generation<R: Rng + ?Sized>(
        &self,
        problem: &AssignmentProblem,
        population: &[Candidate],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> (Vec<Candidate>, Vec<f64>) {
        let pop_size = population.len();
        let elite = argmin(fitnesses);
        let mut next_gen: Vec<Candidate> = Vec::with_capacity(pop_size);
        next_gen.push(population[elite].clone());

        while next_gen.len() < pop_size {
            let p1 = inverse_fitness_roulette(fitnesses, rng);
            let p2 = inverse_fitness_roulette(fitnesses, rng);
            let (c1, c2) = self.crossover(&population[p1], &population[p2], rng);

            for child in [c1, c2] {
                if next_gen.len() >= pop_size {
                    break;
                }
                let mutated = self.mutate(problem, &child, rng);
                next_gen.push(repair(problem, &mutated, rng));
            }
        }

        // The elite keeps its score
        let mut next_fitnesses = Vec::with_capacity(pop_size);
        next_fitnesses.push(fitnesses[elite]);
        next_fitnesses.extend(evaluate_population(problem, &next_gen[1..], self.config.parallel));
        (next_gen, next_fitnesses)
    }
}

impl Solver for Genetic {
    fn name(&self) -> &'static str {
        "ga"
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve_with_rng(&self, problem: &AssignmentProblem, rng: &mut StdRng) -> SolveResult {
        let start = Instant::now();
        let config = &self.config;
        let pop_size = config.population_size.max(1);
        debug!(
            population = pop_size,
            generations = config.max_generations,
            "genetic algorithm started"
        );

        // 1. Initialize and evaluate population
        let mut population: Vec<Candidate> = (0..pop_size)
            .map(|_| problem.random_assignment(true, rng))
            .collect();
        let mut fitnesses = evaluate_population(problem, &population, config.parallel);

        // 2. Track best
        let mut best = Incumbent::from_population(&population, &fitnesses);
        let mut history = History::with_capacity(config.max_generations + 1);
        history.record(best.fitness(), &fitnesses);

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            (population, fitnesses) = self.next_generation(problem, &population, &fitnesses, rng);

            best.offer_all(&population, &fitnesses);
            history.record(best.fitness(), &fitnesses);
            trace!(generation = gen, best = best.fitness(), "ga generation");
        }

        debug!(best = best.fitness(), "genetic algorithm finished");
        SolveResult::new(problem, best, start.elapsed(), config.max_generations, history)
    }
}

// ============================================================================
// Tests
// ============================================================================
