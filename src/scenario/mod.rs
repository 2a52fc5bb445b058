//! Ready-made problem instances.
//!
//! Three layouts are available:
//!
//! - [`static_scenario`]: fixed stations and fixed drones
//! - [`moving_drones_static_stations`]: fixed stations, random drones
//! - [`moving_drones_and_stations`]: everything random
//!
//! The random layouts draw integer coordinates in `[0, area_size]` from
//! their own seeded generator, so the same seed always rebuilds the same
//! instance.

mod catalog;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{ProblemError, SelectionError};
use crate::problem::AssignmentProblem;
use crate::random::create_rng;

pub use catalog::{build_drones, build_stations, DroneSpec, DRONE_CATALOG};

/// The five fixed stations shared by the static layouts.
pub const FIXED_STATIONS: [(&str, (f64, f64)); 5] = [
    ("Station A", (200.0, 200.0)),
    ("Station B", (500.0, 200.0)),
    ("Station C", (200.0, 500.0)),
    ("Station D", (500.0, 500.0)),
    ("Station E", (350.0, 350.0)),
];

const FIXED_DRONES: [(f64, f64); 6] = [
    (100.0, 100.0),
    (250.0, 250.0),
    (350.0, 500.0),
    (450.0, 300.0),
    (350.0, 450.0),
    (150.0, 350.0),
];

pub const DEFAULT_AREA_SIZE: u32 = 800;
pub const DEFAULT_NUM_DRONES: usize = 6;
pub const DEFAULT_NUM_STATIONS: usize = 5;

/// Six drones, five stations, all positions fixed.
pub fn static_scenario() -> Result<AssignmentProblem, ProblemError> {
    AssignmentProblem::with_defaults(
        build_drones(&FIXED_DRONES),
        build_stations(&FIXED_STATIONS),
    )
}

/// The fixed stations with `num_drones` drones at random positions.
pub fn moving_drones_static_stations(
    num_drones: usize,
    area_size: u32,
    seed: u64,
) -> Result<AssignmentProblem, ProblemError> {
    let mut rng = create_rng(seed);
    let positions = random_points(num_drones, area_size, &mut rng);
    AssignmentProblem::with_defaults(build_drones(&positions), build_stations(&FIXED_STATIONS))
}

/// Random stations and random drones.
///
/// Stations are drawn first, then drones, from one generator.
pub fn moving_drones_and_stations(
    num_drones: usize,
    num_stations: usize,
    area_size: u32,
    seed: u64,
) -> Result<AssignmentProblem, ProblemError> {
    let mut rng = create_rng(seed);
    let stations: Vec<(String, (f64, f64))> = random_points(num_stations, area_size, &mut rng)
        .into_iter()
        .enumerate()
        .map(|(i, p)| (station_name(i), p))
        .collect();
    let drones = random_points(num_drones, area_size, &mut rng);
    AssignmentProblem::with_defaults(build_drones(&drones), build_stations(&stations))
}

fn random_points<R: Rng + ?Sized>(n: usize, area_size: u32, rng: &mut R) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| {
            (
                f64::from(rng.random_range(0..=area_size)),
                f64::from(rng.random_range(0..=area_size)),
            )
        })
        .collect()
}

/// `Station A` .. `Station Z`, then `Station 27`, `Station 28`, ...
fn station_name(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => format!("Station {}", char::from(b'A' + i)),
        _ => format!("Station {}", index + 1),
    }
}

/// Named scenario selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Static,
    MovingDrones,
    MovingAll,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Static, Scenario::MovingDrones, Scenario::MovingAll];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Static => "static",
            Scenario::MovingDrones => "moving-drones",
            Scenario::MovingAll => "moving-all",
        }
    }

    /// Builds the scenario with its default size and seed.
    pub fn build(self) -> Result<AssignmentProblem, ProblemError> {
        match self {
            Scenario::Static => static_scenario(),
            Scenario::MovingDrones => {
                moving_drones_static_stations(DEFAULT_NUM_DRONES, DEFAULT_AREA_SIZE, 42)
            }
            Scenario::MovingAll => moving_drones_and_stations(
                DEFAULT_NUM_DRONES,
                DEFAULT_NUM_STATIONS,
                DEFAULT_AREA_SIZE,
                1337,
            ),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name() == wanted)
            .ok_or_else(|| SelectionError::UnknownScenario(s.to_string()))
    }
}
