//! Fitness-proportionate selection for minimisation.

use rand::Rng;

const INVERSE_EPSILON: f64 = 1e-9;

/// Roulette wheel over inverse fitness, `w_i = 1 / (f_i + 1e-9)`.
///
/// Non-finite scores get zero weight. If no member has positive weight
/// the pick is uniform.
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn inverse_fitness_roulette<R: Rng + ?Sized>(fitnesses: &[f64], rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");

    let n = fitnesses.len();
    if n == 1 {
        return 0;
    }

    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| {
            if f.is_finite() {
                1.0 / (f.max(0.0) + INVERSE_EPSILON)
            } else {
                0.0
            }
        })
        .collect();

    weighted_index(&weights, rng)
}

/// Draws an index with probability proportional to `weights[i]`.
///
/// Weights of `+inf` dominate: the draw is uniform among them. Negative,
/// zero and NaN weights count as zero. When nothing has positive weight
/// the draw is uniform over all indices.
///
/// # Panics
/// Panics if `weights` is empty.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot draw from empty weights");

    let n = weights.len();
    let infinite: Vec<usize> = (0..n).filter(|&i| weights[i] == f64::INFINITY).collect();
    if !infinite.is_empty() {
        return infinite[rng.random_range(0..infinite.len())];
    }

    // Scaled by the largest weight so the running sum cannot overflow.
    let peak = weights
        .iter()
        .copied()
        .filter(|w| w.is_finite() && *w > 0.0)
        .fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return rng.random_range(0..n);
    }
    let usable = |w: f64| {
        if w.is_finite() && w > 0.0 {
            w / peak
        } else {
            0.0
        }
    };
    let total: f64 = weights.iter().map(|&w| usable(w)).sum();

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += usable(w);
        if cumulative > threshold {
            return i;
        }
    }

    // floating-point fallback: last index with positive weight
    weights.iter().rposition(|&w| usable(w) > 0.0).unwrap_or(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_prefers_lower_fitness() {
        let mut rng = create_rng(42);
        let fitnesses = [1.0, 100.0];
        let picks = (0..1000)
            .filter(|_| inverse_fitness_roulette(&fitnesses, &mut rng) == 0)
            .count();
        assert!(picks > 900, "best picked only {picks}/1000 times");
    }

    #[test]
    fn test_infinite_members_never_picked() {
        let mut rng = create_rng(7);
        let fitnesses = [f64::INFINITY, 3.0, f64::INFINITY];
        for _ in 0..100 {
            assert_eq!(inverse_fitness_roulette(&fitnesses, &mut rng), 1);
        }
    }

    #[test]
    fn test_weighted_index_skips_zero_weights() {
        let mut rng = create_rng(3);
        let weights = [0.0, -1.0, 2.0, f64::NAN];
        for _ in 0..100 {
            assert_eq!(weighted_index(&weights, &mut rng), 2);
        }
    }

    #[test]
    fn test_weighted_index_infinite_weights_dominate() {
        let mut rng = create_rng(13);
        let weights = [1.0, f64::INFINITY, 2.0, f64::INFINITY];
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[weighted_index(&weights, &mut rng)] = true;
        }
        assert_eq!(seen, [false, true, false, true]);
    }

    #[test]
    fn test_weighted_index_huge_weights_do_not_overflow() {
        let mut rng = create_rng(17);
        let weights = [f64::MAX, 0.0, f64::MAX];
        for _ in 0..200 {
            assert_ne!(weighted_index(&weights, &mut rng), 1);
        }
    }

    #[test]
    fn test_all_infinite_is_uniform() {
        let mut rng = create_rng(7);
        let fitnesses = [f64::INFINITY; 4];
        let idx = inverse_fitness_roulette(&fitnesses, &mut rng);
        assert!(idx < 4);
    }
}
