//! Drone and station records.

/// A drone that needs a ground station.
///
/// Immutable once built; all fields are read through accessors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drone {
    model: String,
    max_speed: f64,
    max_battery_level: f64,
    x: f64,
    y: f64,
}

impl Drone {
    /// Creates a drone of `model` at `(x, y)`.
    ///
    /// `max_battery_level` is the full-charge energy (Wh in the bundled
    /// catalog). It is checked when the drone joins a problem.
    pub fn new(
        model: impl Into<String>,
        max_speed: f64,
        max_battery_level: f64,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            model: model.into(),
            max_speed,
            max_battery_level,
            x,
            y,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_battery_level(&self) -> f64 {
        self.max_battery_level
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// A named ground station.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    name: String,
    x: f64,
    y: f64,
}

impl Station {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}
