//! Best-so-far holder for a single solver run.

use crate::problem::Candidate;

/// The best candidate seen during a run.
///
/// Only strictly better candidates replace the incumbent, so the
/// recorded fitness never increases.
#[derive(Debug, Clone)]
pub struct Incumbent {
    candidate: Candidate,
    fitness: f64,
}

impl Incumbent {
    pub fn new(candidate: Candidate, fitness: f64) -> Self {
        Self { candidate, fitness }
    }

    /// Seeds the incumbent from the best member of a scored population.
    pub(crate) fn from_population(population: &[Candidate], fitnesses: &[f64]) -> Self {
        let best = super::argmin(fitnesses);
        match (population.get(best), fitnesses.get(best)) {
            (Some(c), Some(&f)) => Self::new(c.clone(), f),
            _ => Self::new(Vec::new(), f64::INFINITY),
        }
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Installs `candidate` if it strictly improves on the incumbent.
    pub fn try_install(&mut self, candidate: &Candidate, fitness: f64) -> bool {
        if fitness < self.fitness {
            self.candidate = candidate.clone();
            self.fitness = fitness;
            true
        } else {
            false
        }
    }

    /// Offers every member of a scored population.
    pub(crate) fn offer_all(&mut self, population: &[Candidate], fitnesses: &[f64]) -> bool {
        let best = super::argmin(fitnesses);
        match (population.get(best), fitnesses.get(best)) {
            (Some(c), Some(&f)) => self.try_install(c, f),
            _ => false,
        }
    }

    pub fn into_parts(self) -> (Candidate, f64) {
        (self.candidate, self.fitness)
    }
}
