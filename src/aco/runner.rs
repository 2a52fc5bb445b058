//! ACO colony loop.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use super::config::AcoConfig;
use crate::problem::{AssignmentProblem, Candidate, Gene, UNASSIGNED};
use crate::solver::{evaluate_population, weighted_index, History, Incumbent, SolveResult, Solver};

const DISTANCE_EPSILON: f64 = 1e-9;
const FITNESS_EPSILON: f64 = 1e-9;

/// Ant colony solver.
///
/// ```
/// use u_groundstation::aco::{AcoConfig, AntColony};
/// use u_groundstation::scenario::static_scenario;
/// use u_groundstation::solver::Solver;
///
/// let problem = static_scenario().unwrap();
/// let colony = AntColony::new(AcoConfig::default().with_max_iterations(5).with_seed(1));
/// let result = colony.solve(&problem);
/// assert_eq!(result.assignments.len(), problem.num_drones());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AntColony {
    config: AcoConfig,
}

impl AntColony {
    pub fn new(config: AcoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Builds one ant's assignment, drawing stations without replacement.
    fn construct<R: Rng + ?Sized>(
        &self,
        problem: &AssignmentProblem,
        pheromones: &[f64],
        rng: &mut R,
    ) -> Candidate {
        let mut available: Vec<usize> = (0..problem.num_stations()).collect();

        problem
            .drones()
            .iter()
            .enumerate()
            .map(|(i, drone)| {
                let battery = drone.max_battery_level();
                if available.is_empty() {
                    return Gene::new(UNASSIGNED, battery);
                }

                let weights: Vec<f64> = available
                    .iter()
                    .map(|&s| {
                        let trail = pheromones[s].powf(self.config.alpha);
                        let closeness = 1.0 / (problem.distance(i, s) + DISTANCE_EPSILON);
                        let heuristic = closeness.powf(self.config.beta);
                        trail * heuristic
                    })
                    .collect();

                let pick = weighted_index(&weights, rng);
                Gene::new(available.swap_remove(pick) as isize, battery)
            })
            .collect()
    }

    /// Evaporates the trail, then lets every ant deposit on its stations.
    fn update_trail(&self, pheromones: &mut [f64], colony: &[Candidate], fitnesses: &[f64]) {
        let keep = 1.0 - self.config.evaporation_rate;
        pheromones.iter_mut().for_each(|tau| *tau *= keep);

        for (ant, &fitness) in colony.iter().zip(fitnesses) {
            if !fitness.is_finite() {
                continue;
            }
            let amount = self.config.deposit_weight / (fitness + FITNESS_EPSILON);
            for gene in ant {
                if let Ok(slot) = usize::try_from(gene.station) {
                    pheromones[slot] += amount;
                }
            }
        }
    }
}

impl Solver for AntColony {
    fn name(&self) -> &'static str {
        "aco"
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve_with_rng(&self, problem: &AssignmentProblem, rng: &mut StdRng) -> SolveResult {
        let start = Instant::now();
        let config = &self.config;
        let num_ants = config.num_ants.max(1);
        debug!(
            ants = num_ants,
            iterations = config.max_iterations,
            "ant colony started"
        );

        let mut pheromones = vec![config.initial_pheromone; problem.num_stations()];

        // The first colony walks the untouched trail.
        let mut colony: Vec<Candidate> = (0..num_ants)
            .map(|_| self.construct(problem, &pheromones, rng))
            .collect();
        let mut fitnesses = evaluate_population(problem, &colony, config.parallel);
        let mut best = Incumbent::from_population(&colony, &fitnesses);

        let mut history = History::with_capacity(config.max_iterations + 1);
        history.record(best.fitness(), &fitnesses);

        for iter in 0..config.max_iterations {
            self.update_trail(&mut pheromones, &colony, &fitnesses);

            colony = (0..num_ants)
                .map(|_| self.construct(problem, &pheromones, rng))
                .collect();
            fitnesses = evaluate_population(problem, &colony, config.parallel);

            best.offer_all(&colony, &fitnesses);
            history.record(best.fitness(), &fitnesses);
            trace!(iteration = iter, best = best.fitness(), "aco iteration");
        }

        debug!(best = best.fitness(), "ant colony finished");
        SolveResult::new(problem, best, start.elapsed(), config.max_iterations, history)
    }
}
