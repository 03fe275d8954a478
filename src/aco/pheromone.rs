//! Pheromone field: the colony's memory across iterations.

use crate::matrix::SquareMatrix;

/// Pheromone level on every directed edge.
///
/// Owned by the colony loop. Ants read it through
/// [`as_matrix`](Self::as_matrix); it changes only through
/// [`evaporate`](Self::evaporate) and [`deposit`](Self::deposit), once
/// every ant of an iteration has finished.
///
/// # Examples
///
/// ```
/// use u_antpath::aco::PheromoneField;
///
/// let mut field = PheromoneField::new(3, 1.0);
/// field.evaporate(0.5);
/// field.deposit(&[0, 1, 2], 4.0);
/// assert!((field.get(0, 1) - 0.75).abs() < 1e-12);
/// assert!((field.get(2, 0) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    tau: SquareMatrix,
}

impl PheromoneField {
    /// Creates a field with every edge at `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            tau: SquareMatrix::filled(size, initial),
        }
    }

    /// Scales every edge by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        self.tau.scale(1.0 - rate);
    }

    /// Lays `1 / length` on each consecutive edge of `tour`.
    ///
    /// Zero-length tours deposit nothing, as do infinite ones.
    pub fn deposit(&mut self, tour: &[usize], length: f64) {
        let amount = deposit_amount(length);
        if amount == 0.0 {
            return;
        }
        for w in tour.windows(2) {
            self.tau.add(w[0], w[1], amount);
        }
    }

    /// Mean pheromone over the edges of `path`, or `None` if it has none.
    pub fn mean_along(&self, path: &[usize]) -> Option<f64> {
        let edges = path.len().checked_sub(1).filter(|&n| n > 0)?;
        let sum: f64 = path.windows(2).map(|w| self.tau.get(w[0], w[1])).sum();
        Some(sum / edges as f64)
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.tau.get(from, to)
    }

    pub fn size(&self) -> usize {
        self.tau.size()
    }

    /// Read-only view handed to ants.
    pub fn as_matrix(&self) -> &SquareMatrix {
        &self.tau
    }

    pub fn into_matrix(self) -> SquareMatrix {
        self.tau
    }
}

/// Pheromone an ant lays per edge for a tour of the given length.
pub fn deposit_amount(length: f64) -> f64 {
    if length > 0.0 {
        1.0 / length
    } else {
        0.0
    }
}
