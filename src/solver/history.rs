//! Convergence curves.

use std::collections::BTreeMap;

/// Key of the best-so-far curve.
pub const BEST_FITNESS: &str = "best_fitness";

/// Key of the per-iteration population mean.
pub const MEAN_FITNESS: &str = "mean_fitness";

/// Per-run convergence recorder.
#[derive(Debug, Clone, Default)]
pub struct History {
    best: Vec<f64>,
    mean: Vec<f64>,
}

impl History {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            best: Vec::with_capacity(n),
            mean: Vec::with_capacity(n),
        }
    }

    /// Appends the incumbent fitness and the mean of `population`.
    ///
    /// Non-finite scores are left out of the mean.
    pub fn record(&mut self, best: f64, population: &[f64]) {
        self.best.push(best);
        self.mean.push(finite_mean(population));
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn into_curves(self) -> BTreeMap<String, Vec<f64>> {
        BTreeMap::from([
            (BEST_FITNESS.to_string(), self.best),
            (MEAN_FITNESS.to_string(), self.mean),
        ])
    }
}

fn finite_mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        f64::INFINITY
    } else {
        sum / count as f64
    }
}
