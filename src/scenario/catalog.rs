//! Built-in drone models.

use crate::model::{Drone, Station};

/// Specification sheet of a drone model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneSpec {
    pub name: &'static str,
    /// Top speed, km/h.
    pub max_speed: f64,
    pub battery_capacity_mah: f64,
    pub battery_voltage_v: f64,
}

impl DroneSpec {
    /// Battery energy in Wh (`mAh * V / 1000`).
    pub fn battery_wh(&self) -> f64 {
        self.battery_capacity_mah * self.battery_voltage_v / 1000.0
    }

    /// A drone of this model at `(x, y)`.
    pub fn at(&self, x: f64, y: f64) -> Drone {
        Drone::new(self.name, self.max_speed, self.battery_wh(), x, y)
    }
}

pub const DRONE_CATALOG: [DroneSpec; 6] = [
    DroneSpec {
        name: "DJI Mavic Air 2",
        max_speed: 68.0,
        battery_capacity_mah: 3500.0,
        battery_voltage_v: 11.55,
    },
    DroneSpec {
        name: "Parrot Anafi",
        max_speed: 55.0,
        battery_capacity_mah: 6800.0,
        battery_voltage_v: 11.55,
    },
    DroneSpec {
        name: "Skydio 2",
        max_speed: 55.0,
        battery_capacity_mah: 4280.0,
        battery_voltage_v: 13.05,
    },
    DroneSpec {
        name: "DJI Phantom 4 Pro",
        max_speed: 72.0,
        battery_capacity_mah: 5870.0,
        battery_voltage_v: 15.2,
    },
    DroneSpec {
        name: "Autel Robotics EVO 2",
        max_speed: 72.0,
        battery_capacity_mah: 7100.0,
        battery_voltage_v: 11.55,
    },
    DroneSpec {
        name: "Yuneec Typhoon H Pro",
        max_speed: 70.0,
        battery_capacity_mah: 5400.0,
        battery_voltage_v: 14.8,
    },
];

/// One drone per position, cycling through [`DRONE_CATALOG`].
pub fn build_drones(positions: &[(f64, f64)]) -> Vec<Drone> {
    positions
        .iter()
        .zip(DRONE_CATALOG.iter().cycle())
        .map(|(&(x, y), spec)| spec.at(x, y))
        .collect()
}

/// Stations from `(name, (x, y))` pairs.
pub fn build_stations<S: AsRef<str>>(named: &[(S, (f64, f64))]) -> Vec<Station> {
    named
        .iter()
        .map(|(name, (x, y))| Station::new(name.as_ref(), *x, *y))
        .collect()
}
