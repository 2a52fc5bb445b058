//! The assignment problem and its fitness function.
//!
//! A candidate solution assigns every drone a station index (or
//! [`UNASSIGNED`]) and the battery level it is expected to arrive with.
//! [`AssignmentProblem::evaluate`] is the single cost function shared by
//! every solver in this crate.
//!
//! # Fitness
//!
//! For each drone `i`, in order:
//!
//! - station out of range → `+ unassigned_penalty`
//! - station already claimed by an earlier drone (uniqueness on)
//!   → `+ unassigned_penalty`
//! - otherwise `distance / max(speed, 1e-9) + (1 - battery / max_battery)`
//!
//! Lower is better.

use rand::Rng;

use crate::error::ProblemError;
use crate::model::{distance, Drone, Station};
use crate::random::{shuffle, uniform_up_to};

/// Station index meaning "no station".
pub const UNASSIGNED: isize = -1;

/// Penalty used by [`AssignmentProblem::with_defaults`].
pub const DEFAULT_UNASSIGNED_PENALTY: f64 = 100.0;

const SPEED_EPSILON: f64 = 1e-9;

/// One drone's slot in a candidate: target station and battery level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    /// Station index, or [`UNASSIGNED`].
    pub station: isize,
    /// Battery level, expected in `[0, max_battery_level]`.
    pub battery: f64,
}

impl Gene {
    pub fn new(station: isize, battery: f64) -> Self {
        Self { station, battery }
    }

    /// Returns `true` if the gene points at a (non-negative) station.
    pub fn is_assigned(&self) -> bool {
        self.station >= 0
    }
}

/// A full candidate solution, one gene per drone.
pub type Candidate = Vec<Gene>;

/// Gene shapes accepted by [`AssignmentProblem::evaluate`].
///
/// A bare station index implies a fully charged drone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneInput {
    /// Station only; battery defaults to the drone's maximum.
    Station(isize),
    /// Station and explicit battery level.
    Charged(isize, f64),
}

impl GeneInput {
    /// Resolves the input against `drone`, clamping the battery.
    fn normalize(self, drone: &Drone) -> Gene {
        let max = drone.max_battery_level();
        let (station, battery) = match self {
            GeneInput::Station(s) => (s, max),
            GeneInput::Charged(s, b) => (s, b),
        };
        Gene::new(station, clamp_unit(battery, max))
    }
}

impl From<isize> for GeneInput {
    fn from(station: isize) -> Self {
        GeneInput::Station(station)
    }
}

impl From<(isize, f64)> for GeneInput {
    fn from((station, battery): (isize, f64)) -> Self {
        GeneInput::Charged(station, battery)
    }
}

impl From<Gene> for GeneInput {
    fn from(gene: Gene) -> Self {
        GeneInput::Charged(gene.station, gene.battery)
    }
}

/// Clamp to `[0, max]`; NaN collapses to 0.
fn clamp_unit(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Drone-to-station assignment problem.
///
/// Drone and station lists are fixed for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct AssignmentProblem {
    drones: Vec<Drone>,
    stations: Vec<Station>,
    unassigned_penalty: f64,
    require_unique_station: bool,
}

impl AssignmentProblem {
    /// Builds a validated problem.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::NoDrones`] / [`ProblemError::NoStations`] for empty lists
    /// - [`ProblemError::InvalidPenalty`] for a negative or non-finite penalty
    /// - [`ProblemError::InvalidBattery`] for a drone whose capacity is not
    ///   a positive finite number
    pub fn new(
        drones: Vec<Drone>,
        stations: Vec<Station>,
        unassigned_penalty: f64,
        require_unique_station: bool,
    ) -> Result<Self, ProblemError> {
        if drones.is_empty() {
            return Err(ProblemError::NoDrones);
        }
        if stations.is_empty() {
            return Err(ProblemError::NoStations);
        }
        if !unassigned_penalty.is_finite() || unassigned_penalty < 0.0 {
            return Err(ProblemError::InvalidPenalty(unassigned_penalty));
        }
        if let Some((index, drone)) = drones.iter().enumerate().find(|(_, d)| {
            let cap = d.max_battery_level();
            !cap.is_finite() || cap <= 0.0
        }) {
            return Err(ProblemError::InvalidBattery {
                index,
                model: drone.model().to_string(),
                value: drone.max_battery_level(),
            });
        }

        Ok(Self {
            drones,
            stations,
            unassigned_penalty,
            require_unique_station,
        })
    }

    /// Builds a problem with penalty `100.0` and unique stations.
    pub fn with_defaults(drones: Vec<Drone>, stations: Vec<Station>) -> Result<Self, ProblemError> {
        Self::new(drones, stations, DEFAULT_UNASSIGNED_PENALTY, true)
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn num_drones(&self) -> usize {
        self.drones.len()
    }

    pub fn num_stations(&self) -> usize {
        self.stations.len()
    }

    pub fn unassigned_penalty(&self) -> f64 {
        self.unassigned_penalty
    }

    pub fn require_unique_station(&self) -> bool {
        self.require_unique_station
    }

    /// Maps a raw index to a valid station slot.
    pub fn station_slot(&self, station: isize) -> Option<usize> {
        usize::try_from(station)
            .ok()
            .filter(|&s| s < self.stations.len())
    }

    /// Rounds a continuous position to a station index in `[-1, n-1]`.
    pub fn clamp_station(&self, value: f64) -> isize {
        let upper = self.stations.len() as isize - 1;
        // `as` saturates and maps NaN to 0.
        (value.round() as isize).clamp(UNASSIGNED, upper)
    }

    /// Clamps a battery level to `[0, max]` for drone `drone`.
    pub fn clamp_battery(&self, drone: usize, battery: f64) -> f64 {
        clamp_unit(battery, self.drones[drone].max_battery_level())
    }

    /// Distance between drone `drone` and station `station`.
    pub fn distance(&self, drone: usize, station: usize) -> f64 {
        distance(
            self.drones[drone].position(),
            self.stations[station].position(),
        )
    }

    /// Scores a candidate; lower is better.
    ///
    /// Accepts plain station indices, `(station, battery)` pairs or
    /// [`Gene`]s. A candidate whose length differs from the number of
    /// drones is treated as missing and scores `+inf`.
    pub fn evaluate<G>(&self, candidate: &[G]) -> f64
    where
        G: Copy + Into<GeneInput>,
    {
        if candidate.len() != self.drones.len() {
            return f64::INFINITY;
        }

        let mut claimed = vec![false; self.stations.len()];
        let mut total = 0.0;

        for (i, (drone, raw)) in self.drones.iter().zip(candidate).enumerate() {
            let input: GeneInput = (*raw).into();
            let gene = input.normalize(drone);

            let Some(slot) = self.station_slot(gene.station) else {
                total += self.unassigned_penalty;
                continue;
            };

            if self.require_unique_station && claimed[slot] {
                total += self.unassigned_penalty;
                continue;
            }
            claimed[slot] = true;

            let travel = self.distance(i, slot) / drone.max_speed().max(SPEED_EPSILON);
            let deficit = 1.0 - gene.battery / drone.max_battery_level();
            total += travel + deficit;
        }

        total
    }

    /// Like [`evaluate`](Self::evaluate), with `None` scoring `+inf`.
    pub fn evaluate_opt<G>(&self, candidate: Option<&[G]>) -> f64
    where
        G: Copy + Into<GeneInput>,
    {
        candidate.map_or(f64::INFINITY, |c| self.evaluate(c))
    }

    /// Builds a random candidate with distinct stations where possible.
    ///
    /// Station indices are shuffled and handed out one per drone; once
    /// they run out the remaining drones stay [`UNASSIGNED`]. Batteries
    /// are uniform in `[0, max]` when `randomize_battery`, else full.
    pub fn random_assignment<R: Rng + ?Sized>(
        &self,
        randomize_battery: bool,
        rng: &mut R,
    ) -> Candidate {
        let mut available: Vec<isize> = (0..self.stations.len() as isize).collect();
        shuffle(&mut available, rng);

        self.drones
            .iter()
            .map(|drone| {
                let station = available.pop().unwrap_or(UNASSIGNED);
                let battery = if randomize_battery {
                    uniform_up_to(drone.max_battery_level(), rng)
                } else {
                    drone.max_battery_level()
                };
                Gene::new(station, battery)
            })
            .collect()
    }

    /// Uniform station index in `[-1, n-1]`.
    pub fn random_station<R: Rng + ?Sized>(&self, rng: &mut R) -> isize {
        rng.random_range(0..=self.stations.len()) as isize + UNASSIGNED
    }

    /// Uniform battery level for drone `drone`.
    pub fn random_battery<R: Rng + ?Sized>(&self, drone: usize, rng: &mut R) -> f64 {
        uniform_up_to(self.drones[drone].max_battery_level(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn two_by_two(unique: bool) -> AssignmentProblem {
        let drones = vec![
            Drone::new("a", 10.0, 50.0, 0.0, 0.0),
            Drone::new("b", 5.0, 40.0, 10.0, 0.0),
        ];
        let stations = vec![Station::new("S0", 3.0, 4.0), Station::new("S1", 10.0, 0.0)];
        AssignmentProblem::new(drones, stations, 100.0, unique).unwrap()
    }

    #[test]
    fn test_validation() {
        let d = vec![Drone::new("a", 1.0, 1.0, 0.0, 0.0)];
        let s = vec![Station::new("s", 0.0, 0.0)];
        assert_eq!(
            AssignmentProblem::new(vec![], s.clone(), 1.0, true).unwrap_err(),
            ProblemError::NoDrones
        );
        assert_eq!(
            AssignmentProblem::new(d.clone(), vec![], 1.0, true).unwrap_err(),
            ProblemError::NoStations
        );
        assert!(matches!(
            AssignmentProblem::new(d.clone(), s.clone(), -0.5, true),
            Err(ProblemError::InvalidPenalty(_))
        ));
        assert!(matches!(
            AssignmentProblem::new(d.clone(), s.clone(), f64::NAN, true),
            Err(ProblemError::InvalidPenalty(_))
        ));
        let flat = vec![Drone::new("flat", 1.0, 0.0, 0.0, 0.0)];
        assert!(matches!(
            AssignmentProblem::new(flat, s.clone(), 1.0, true),
            Err(ProblemError::InvalidBattery { index: 0, .. })
        ));
        assert!(AssignmentProblem::new(d, s, 0.0, false).is_ok());
    }

    #[test]
    fn test_evaluate_known_value() {
        let p = two_by_two(true);
        // drone a -> S0: 5 / 10 + (1 - 25/50) = 1.0
        // drone b -> S1: 0 / 5 + (1 - 40/40) = 0.0
        let f = p.evaluate(&[(0isize, 25.0), (1isize, 40.0)]);
        assert!((f - 1.0).abs() < 1e-12, "got {f}");
    }

    #[test]
    fn test_all_unassigned_costs_penalty_per_drone() {
        let p = two_by_two(true);
        assert_eq!(p.evaluate(&[UNASSIGNED, UNASSIGNED]), 200.0);
        // out of range counts as unassigned too
        assert_eq!(p.evaluate(&[7isize, -3]), 200.0);
    }

    #[test]
    fn test_plain_and_pair_genes_agree() {
        let p = two_by_two(true);
        let plain = p.evaluate(&[1isize, 0]);
        let pairs = p.evaluate(&[(1isize, 50.0), (0isize, 40.0)]);
        assert_eq!(plain, pairs);
    }

    #[test]
    fn test_uniqueness_penalises_later_duplicate() {
        let unique = two_by_two(true);
        let shared = two_by_two(false);
        let first_only = unique.evaluate(&[0isize, UNASSIGNED]);
        let both = unique.evaluate(&[0isize, 0]);
        assert_eq!(both, first_only);

        let expected = shared.evaluate(&[0isize, UNASSIGNED]) - 100.0 + shared.distance(1, 0) / 5.0;
        assert!((shared.evaluate(&[0isize, 0]) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_battery_is_clamped() {
        let p = two_by_two(true);
        let over = p.evaluate(&[(0isize, 500.0), (1isize, -3.0)]);
        let clamped = p.evaluate(&[(0isize, 50.0), (1isize, 0.0)]);
        assert_eq!(over, clamped);
    }

    #[test]
    fn test_missing_candidate_is_infinite() {
        let p = two_by_two(true);
        assert_eq!(p.evaluate_opt::<isize>(None), f64::INFINITY);
        assert_eq!(p.evaluate(&[0isize]), f64::INFINITY);
    }

    #[test]
    fn test_zero_speed_is_guarded() {
        let drones = vec![Drone::new("still", 0.0, 10.0, 0.0, 0.0)];
        let stations = vec![Station::new("here", 0.0, 0.0)];
        let p = AssignmentProblem::new(drones, stations, 1.0, true).unwrap();
        assert_eq!(p.evaluate(&[0isize]), 0.0);
    }

    #[test]
    fn test_random_assignment_distinct_then_unassigned() {
        let drones = (0..5)
            .map(|i| Drone::new("d", 1.0, 10.0, i as f64, 0.0))
            .collect();
        let stations = (0..3).map(|i| Station::new("s", i as f64, 1.0)).collect();
        let p = AssignmentProblem::with_defaults(drones, stations).unwrap();
        let mut rng = create_rng(5);

        let full = p.random_assignment(false, &mut rng);
        assert_eq!(full.len(), 5);
        let mut used: Vec<isize> = full.iter().map(|g| g.station).filter(|&s| s >= 0).collect();
        used.sort_unstable();
        assert_eq!(used, vec![0, 1, 2]);
        assert_eq!(full.iter().filter(|g| !g.is_assigned()).count(), 2);
        assert!(full.iter().all(|g| g.battery == 10.0));

        let random = p.random_assignment(true, &mut rng);
        assert!(random.iter().all(|g| (0.0..=10.0).contains(&g.battery)));
    }

    #[test]
    fn test_clamp_station() {
        let p = two_by_two(true);
        assert_eq!(p.clamp_station(-5.2), UNASSIGNED);
        assert_eq!(p.clamp_station(0.4), 0);
        assert_eq!(p.clamp_station(0.6), 1);
        assert_eq!(p.clamp_station(9.0), 1);
    }

    #[test]
    fn test_random_station_covers_unassigned_and_last() {
        let p = two_by_two(true);
        let mut rng = create_rng(21);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let s = p.random_station(&mut rng);
            assert!((UNASSIGNED..2).contains(&s));
            seen[(s + 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
