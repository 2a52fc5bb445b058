//! Station uniqueness repair.

use rand::Rng;

use crate::problem::{AssignmentProblem, Candidate, Gene, UNASSIGNED};

/// Stations claimed so far while building one candidate, left to right.
///
/// When the problem requires unique stations, a proposal that collides
/// with an earlier claim is redrawn uniformly from the unclaimed stations,
/// or becomes [`UNASSIGNED`] when none remain. Without the requirement
/// every in-range proposal passes through unchanged.
#[derive(Debug, Clone)]
pub struct StationClaims {
    claimed: Vec<bool>,
    enforce: bool,
}

impl StationClaims {
    pub fn new(problem: &AssignmentProblem) -> Self {
        Self {
            claimed: vec![false; problem.num_stations()],
            enforce: problem.require_unique_station(),
        }
    }

    pub fn is_claimed(&self, station: usize) -> bool {
        self.claimed.get(station).copied().unwrap_or(false)
    }

    /// Resolves `proposed` against the claims so far and records the result.
    pub fn resolve<R: Rng + ?Sized>(&mut self, proposed: isize, rng: &mut R) -> isize {
        let Some(slot) = usize::try_from(proposed)
            .ok()
            .filter(|&s| s < self.claimed.len())
        else {
            return UNASSIGNED;
        };

        let slot = if self.enforce && self.claimed[slot] {
            match self.draw_unclaimed(rng) {
                Some(free) => free,
                None => return UNASSIGNED,
            }
        } else {
            slot
        };

        self.claimed[slot] = true;
        slot as isize
    }

    fn draw_unclaimed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let free: Vec<usize> = self
            .claimed
            .iter()
            .enumerate()
            .filter_map(|(i, &taken)| (!taken).then_some(i))
            .collect();
        if free.is_empty() {
            None
        } else {
            Some(free[rng.random_range(0..free.len())])
        }
    }
}

/// Returns a copy of `candidate` with duplicate stations redrawn.
pub fn repair<R: Rng + ?Sized>(
    problem: &AssignmentProblem,
    candidate: &[Gene],
    rng: &mut R,
) -> Candidate {
    let mut claims = StationClaims::new(problem);
    candidate
        .iter()
        .map(|gene| Gene::new(claims.resolve(gene.station, rng), gene.battery))
        .collect()
}
