//! PSO execution loop.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use super::config::PsoConfig;
use crate::problem::{AssignmentProblem, Candidate, Gene};
use crate::solver::{evaluate_population, History, Incumbent, SolveResult, Solver, StationClaims};

/// Particle swarm solver.
///
/// ```
/// use u_groundstation::pso::{ParticleSwarm, PsoConfig};
/// use u_groundstation::scenario::static_scenario;
/// use u_groundstation::solver::Solver;
///
/// let problem = static_scenario().unwrap();
/// let pso = ParticleSwarm::new(PsoConfig::default().with_max_iterations(20).with_seed(1));
/// let result = pso.solve(&problem);
/// assert_eq!(result.assignments.len(), problem.num_drones());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParticleSwarm {
    config: PsoConfig,
}

impl ParticleSwarm {
    pub fn new(config: PsoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    /// Moves one particle.
    ///
    /// `x' = round(w·x + c1·r1·(x − pbest) + c2·r2·(gbest − x))`, drawn
    /// independently per drone, then clamped and repaired.
    fn fly<R: Rng + ?Sized>(
        &self,
        problem: &AssignmentProblem,
        particle: &[Gene],
        personal_best: &[Gene],
        global_best: &[Gene],
        rng: &mut R,
    ) -> Candidate {
        let c = &self.config;
        let mut claims = StationClaims::new(problem);

        particle
            .iter()
            .zip(personal_best)
            .zip(global_best)
            .map(|((gene, pbest), gbest)| {
                let x = gene.station as f64;
                let r1: f64 = rng.random();
                let r2: f64 = rng.random();
                let position = c.inertia_weight * x
                    + c.cognitive_weight * r1 * (x - pbest.station as f64)
                    + c.social_weight * r2 * (gbest.station as f64 - x);
                let station = claims.resolve(problem.clamp_station(position), rng);
                Gene::new(station, gene.battery)
            })
            .collect()
    }
}

impl Solver for ParticleSwarm {
    fn name(&self) -> &'static str {
        "pso"
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve_with_rng(&self, problem: &AssignmentProblem, rng: &mut StdRng) -> SolveResult {
        let start = Instant::now();
        let config = &self.config;
        let swarm_size = config.num_particles.max(1);
        debug!(
            particles = swarm_size,
            iterations = config.max_iterations,
            "particle swarm started"
        );

        let mut particles: Vec<Candidate> = (0..swarm_size)
            .map(|_| problem.random_assignment(true, rng))
            .collect();
        let mut fitnesses = evaluate_population(problem, &particles, config.parallel);

        let mut personal_best: Vec<Candidate> = particles.clone();
        let mut personal_fitness = fitnesses.clone();
        let mut best = Incumbent::from_population(&particles, &fitnesses);

        let mut history = History::with_capacity(config.max_iterations + 1);
        history.record(best.fitness(), &fitnesses);

        for iteration in 0..config.max_iterations {
            particles = particles
                .iter()
                .zip(&personal_best)
                .map(|(particle, pbest)| self.fly(problem, particle, pbest, best.candidate(), rng))
                .collect();
            fitnesses = evaluate_population(problem, &particles, config.parallel);

            for (i, &f) in fitnesses.iter().enumerate() {
                if f < personal_fitness[i] {
                    personal_best[i] = particles[i].clone();
                    personal_fitness[i] = f;
                }
            }
            best.offer_all(&particles, &fitnesses);
            history.record(best.fitness(), &fitnesses);
            trace!(iteration, best = best.fitness(), "pso iteration");
        }

        debug!(best = best.fitness(), "particle swarm finished");
        SolveResult::new(problem, best, start.elapsed(), config.max_iterations, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::scenario::static_scenario;

    #[test]
    fn test_static_scenario_smoke() {
        let problem = static_scenario().unwrap();
        let pso = ParticleSwarm::new(
            PsoConfig::default()
                .with_num_particles(10)
                .with_max_iterations(5)
                .with_seed(42),
        );

        let result = pso.solve(&problem);

        assert_eq!(result.assignments.len(), 6);
        assert!(result.assignments.iter().all(|s| (-1..=4).contains(s)));
        assert!(result.fitness >= 0.0);
        assert_eq!(result.iterations, 5);
        assert_eq!(result.best_fitness_history().len(), 6);

        let again = pso.solve(&problem);
        assert_eq!(again.assignments, result.assignments);
        assert_eq!(again.fitness, result.fitness);
    }

    #[test]
    fn test_fly_keeps_stations_unique() {
        let problem = static_scenario().unwrap();
        let pso = ParticleSwarm::default();
        let mut rng = create_rng(3);
        for _ in 0..50 {
            let particle = problem.random_assignment(true, &mut rng);
            let pbest = problem.random_assignment(true, &mut rng);
            let gbest = problem.random_assignment(true, &mut rng);
            let moved = pso.fly(&problem, &particle, &pbest, &gbest, &mut rng);

            let mut used: Vec<isize> = moved
                .iter()
                .map(|g| g.station)
                .filter(|&s| s >= 0)
                .collect();
            let n = used.len();
            used.sort_unstable();
            used.dedup();
            assert_eq!(used.len(), n, "duplicate station in {moved:?}");
            for (old, new) in particle.iter().zip(&moved) {
                assert_eq!(old.battery, new.battery);
            }
        }
    }

    #[test]
    fn test_zero_iterations_reports_initial_best() {
        let problem = static_scenario().unwrap();
        let pso = ParticleSwarm::new(PsoConfig::default().with_max_iterations(0).with_seed(9));
        let result = pso.solve(&problem);
        assert_eq!(result.best_fitness_history(), &[result.fitness]);
    }
}
