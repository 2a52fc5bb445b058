//! Property tests for the shared fitness function.

use proptest::prelude::*;
use u_groundstation::model::{Drone, Station};
use u_groundstation::{AssignmentProblem, Gene, UNASSIGNED};

const PENALTY: f64 = 100.0;

prop_compose! {
    fn arb_problem(max_drones: usize, max_stations: usize)(
        drones in prop::collection::vec(
            (0.0..800.0f64, 0.0..800.0f64, 1.0..30.0f64, 10.0..200.0f64),
            1..=max_drones,
        ),
        stations in prop::collection::vec((0.0..800.0f64, 0.0..800.0f64), 1..=max_stations),
        unique in any::<bool>(),
    ) -> AssignmentProblem {
        let drones = drones
            .into_iter()
            .enumerate()
            .map(|(i, (x, y, speed, battery))| Drone::new(format!("d{i}"), speed, battery, x, y))
            .collect();
        let stations = stations
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| Station::new(format!("s{i}"), x, y))
            .collect();
        AssignmentProblem::new(drones, stations, PENALTY, unique).unwrap()
    }
}

prop_compose! {
    fn problem_and_indices()(problem in arb_problem(8, 6))(
        indices in prop::collection::vec(-2isize..8, problem.num_drones()),
        problem in Just(problem),
    ) -> (AssignmentProblem, Vec<isize>) {
        (problem, indices)
    }
}

proptest! {
    #[test]
    fn fitness_is_finite_and_non_negative((problem, indices) in problem_and_indices()) {
        let f = problem.evaluate(&indices);
        prop_assert!(f.is_finite());
        prop_assert!(f >= 0.0);
    }

    #[test]
    fn bare_index_means_full_battery((problem, indices) in problem_and_indices()) {
        let pairs: Vec<(isize, f64)> = indices
            .iter()
            .zip(problem.drones())
            .map(|(&s, d)| (s, d.max_battery_level()))
            .collect();
        prop_assert_eq!(problem.evaluate(&indices), problem.evaluate(&pairs));
    }

    #[test]
    fn all_unassigned_costs_one_penalty_each(problem in arb_problem(8, 6)) {
        let none = vec![UNASSIGNED; problem.num_drones()];
        prop_assert_eq!(problem.evaluate(&none), PENALTY * problem.num_drones() as f64);
    }

    #[test]
    fn wrong_length_is_infinite((problem, mut indices) in problem_and_indices()) {
        indices.push(0);
        prop_assert_eq!(problem.evaluate(&indices), f64::INFINITY);
        prop_assert_eq!(problem.evaluate_opt::<Gene>(None), f64::INFINITY);
    }

    #[test]
    fn lower_battery_never_helps(
        (problem, indices) in problem_and_indices(),
        frac in 0.0..=1.0f64,
    ) {
        let drained: Vec<Gene> = indices
            .iter()
            .zip(problem.drones())
            .map(|(&s, d)| Gene::new(s, d.max_battery_level() * frac))
            .collect();
        prop_assert!(problem.evaluate(&drained) >= problem.evaluate(&indices) - 1e-9);
    }

    #[test]
    fn random_assignment_is_valid(problem in arb_problem(8, 6), seed in any::<u64>()) {
        let mut rng = u_groundstation::random::create_rng(seed);
        let candidate = problem.random_assignment(true, &mut rng);
        prop_assert_eq!(candidate.len(), problem.num_drones());

        let assigned = candidate.iter().filter(|g| g.is_assigned()).count();
        prop_assert_eq!(assigned, problem.num_drones().min(problem.num_stations()));
        for (gene, drone) in candidate.iter().zip(problem.drones()) {
            prop_assert!(gene.battery >= 0.0 && gene.battery <= drone.max_battery_level());
        }
    }
}
