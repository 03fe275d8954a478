//! Transition probabilities and the stochastic next-node draw.
//!
//! Both functions are pure: the random source is passed in, so tests can
//! substitute a fixed stream.
//!
//! # References
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//! Colony of Cooperating Agents"

use crate::matrix::SquareMatrix;
use rand::Rng;

/// Transition distribution from one node over a candidate set.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// `P(c)` for each candidate, in candidate order. Sums to 1.
    pub probabilities: Vec<f64>,

    /// All scores were zero and the uniform fallback was used.
    pub uniform_fallback: bool,
}

impl Transition {
    /// Largest probability in the distribution (0.0 when empty).
    pub fn max_probability(&self) -> f64 {
        self.probabilities.iter().copied().fold(0.0, f64::max)
    }
}

/// Computes `P(c) = τ[u][c]^α · η[u][c]^β / D` over `candidates`.
///
/// When the normalizer `D` is zero every candidate gets `1 / |candidates|`.
pub fn transition_probabilities(
    current: usize,
    candidates: &[usize],
    pheromone: &SquareMatrix,
    visibility: &SquareMatrix,
    alpha: f64,
    beta: f64,
) -> Transition {
    let scores: Vec<f64> = candidates
        .iter()
        .map(|&c| {
            let tau = pheromone.get(current, c);
            let eta = visibility.get(current, c);
            tau.powf(alpha) * eta.powf(beta)
        })
        .collect();

    let denominator: f64 = scores.iter().sum();
    if denominator > 0.0 && denominator.is_finite() {
        Transition {
            probabilities: scores.iter().map(|s| s / denominator).collect(),
            uniform_fallback: false,
        }
    } else {
        let n = candidates.len();
        Transition {
            probabilities: vec![1.0 / n as f64; n],
            uniform_fallback: true,
        }
    }
}

/// Draws an index with probability proportional to `weights`.
///
/// Returns `None` for an empty slice. Non-positive or non-finite totals
/// fall back to a uniform draw.
pub fn weighted_choice<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let n = weights.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(0);
    }

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Some(rng.random_range(0..n));
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return Some(i);
        }
    }

    // floating-point fallback: last index that can actually be drawn
    weights.iter().rposition(|&w| w > 0.0).or(Some(n - 1))
}

/// RNG that always yields the same word, for steering draws in tests.
#[cfg(test)]
pub(crate) struct FixedRng(pub u64);

#[cfg(test)]
impl FixedRng {
    /// Draws from `[0, 1)` land close to `fraction`.
    pub fn at(fraction: f64) -> Self {
        FixedRng((fraction * u64::MAX as f64) as u64)
    }
}

#[cfg(test)]
impl rand::RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (i, b) in dst.iter_mut().enumerate() {
            *b = bytes[i % 8];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn three_nodes() -> (SquareMatrix, SquareMatrix) {
        let pheromone = SquareMatrix::filled(3, 1.0);
        let mut visibility = SquareMatrix::new(3);
        visibility.set(0, 1, 1.0);
        visibility.set(0, 2, 0.2);
        visibility.set(1, 2, 1.0);
        (pheromone, visibility)
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (tau, eta) = three_nodes();
        let t = transition_probabilities(0, &[1, 2], &tau, &eta, 1.0, 2.0);
        assert!(!t.uniform_fallback);
        let sum: f64 = t.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        // 1 / (1 + 0.04)
        assert!((t.probabilities[0] - 1.0 / 1.04).abs() < 1e-12);
        assert!((t.max_probability() - 1.0 / 1.04).abs() < 1e-12);
    }

    #[test]
    fn test_pheromone_exponent() {
        let (mut tau, eta) = three_nodes();
        tau.set(0, 2, 25.0);
        // scores: 1*1 and 25*0.04 = 1 -> even split
        let t = transition_probabilities(0, &[1, 2], &tau, &eta, 1.0, 2.0);
        assert!((t.probabilities[0] - 0.5).abs() < 1e-12);
        assert!((t.probabilities[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_fallback() {
        let (tau, eta) = three_nodes();
        // row 2 has no visibility at all
        let t = transition_probabilities(2, &[0, 1], &tau, &eta, 1.0, 2.0);
        assert!(t.uniform_fallback);
        assert_eq!(t.probabilities, vec![0.5, 0.5]);
    }

    #[test]
    fn test_weighted_choice_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(weighted_choice(&[], &mut rng), None);
        assert_eq!(weighted_choice(&[0.0], &mut rng), Some(0));
    }

    #[test]
    fn test_weighted_choice_fixed_stream() {
        let weights = [0.25, 0.5, 0.25];
        assert_eq!(weighted_choice(&weights, &mut FixedRng(0)), Some(0));
        assert_eq!(weighted_choice(&weights, &mut FixedRng::at(0.5)), Some(1));
        assert_eq!(weighted_choice(&weights, &mut FixedRng::at(0.9)), Some(2));
    }

    #[test]
    fn test_weighted_choice_never_picks_zero_weight() {
        let weights = [0.0, 1.0, 0.0];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert_eq!(weighted_choice(&weights, &mut rng), Some(1));
        }
        assert_eq!(weighted_choice(&weights, &mut FixedRng(u64::MAX)), Some(1));
    }

    #[test]
    fn test_weighted_choice_distribution() {
        let weights = [0.1, 0.9];
        let mut rng = StdRng::seed_from_u64(42);
        let picks = (0..10_000)
            .filter(|_| weighted_choice(&weights, &mut rng) == Some(1))
            .count();
        let ratio = picks as f64 / 10_000.0;
        assert!((ratio - 0.9).abs() < 0.03, "ratio {ratio}");
    }

    #[test]
    fn test_weighted_choice_zero_total_is_uniform() {
        let weights = [0.0, 0.0, 0.0, 0.0];
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let i = weighted_choice(&weights, &mut rng).expect("non-empty");
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
