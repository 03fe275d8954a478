//! Validated distance matrix and visibility derivation.

use super::dense::SquareMatrix;
use crate::error::MatrixError;

/// A square matrix of directed edge costs.
///
/// `get(i, j)` is the cost of moving from node `i` to node `j`. Entries
/// are non-negative; `0.0` and `f64::INFINITY` both mean "no usable edge"
/// as far as the search heuristic is concerned, and the diagonal is never
/// used as an edge.
///
/// # Examples
///
/// ```
/// use u_antpath::matrix::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 5.0],
///     vec![0.0, 0.0, 1.0],
///     vec![0.0, 0.0, 0.0],
/// ]).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.path_length(&[0, 1, 2]), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    inner: SquareMatrix,
}

impl DistanceMatrix {
    /// Creates an `size`×`size` matrix with every edge missing (+∞).
    pub fn unconnected(size: usize) -> Self {
        Self {
            inner: SquareMatrix::filled(size, f64::INFINITY),
        }
    }

    /// Builds a matrix from a literal grid of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend(values);
        }
        let inner = SquareMatrix::from_data(size, data).ok_or(MatrixError::Empty)?;
        Self::from_matrix(inner)
    }

    /// Wraps an existing dense matrix after checking its entries.
    pub fn from_matrix(inner: SquareMatrix) -> Result<Self, MatrixError> {
        if inner.size() == 0 {
            return Err(MatrixError::Empty);
        }
        let n = inner.size();
        for from in 0..n {
            for to in 0..n {
                let value = inner.get(from, to);
                if value.is_nan() || value < 0.0 {
                    return Err(MatrixError::InvalidEntry { from, to, value });
                }
            }
        }
        Ok(Self { inner })
    }

    /// Returns the cost from `from` to `to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.inner.get(from, to)
    }

    pub(crate) fn set(&mut self, from: usize, to: usize, value: f64) {
        self.inner.set(from, to, value);
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// The underlying dense storage.
    pub fn as_matrix(&self) -> &SquareMatrix {
        &self.inner
    }

    /// Sum of edge costs over consecutive pairs of `path`.
    ///
    /// Paths with fewer than two nodes have length zero.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Derives the visibility heuristic `η[i][j] = 1 / d[i][j]`.
    ///
    /// Self-loops, zero-cost and infinite-cost edges get visibility 0.
    pub fn visibility(&self) -> SquareMatrix {
        let n = self.size();
        let mut eta = SquareMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let d = self.get(i, j);
                if i != j && d > 0.0 {
                    eta.set(i, j, 1.0 / d);
                }
            }
        }
        eta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_nodes() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 5.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![0.0]]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(matches!(
            DistanceMatrix::from_rows(vec![]),
            Err(MatrixError::Empty)
        ));
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        let neg = DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]);
        assert!(matches!(neg, Err(MatrixError::InvalidEntry { from: 0, to: 1, .. })));

        let nan = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![f64::NAN, 0.0]]);
        assert!(matches!(nan, Err(MatrixError::InvalidEntry { from: 1, to: 0, .. })));
    }

    #[test]
    fn test_accepts_infinity() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]])
            .expect("infinity means no edge");
        assert!(dm.get(0, 1).is_infinite());
    }

    #[test]
    fn test_visibility() {
        let eta = three_nodes().visibility();
        assert!((eta.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((eta.get(0, 2) - 0.2).abs() < 1e-12);
        assert_eq!(eta.get(1, 0), 0.0);
        assert_eq!(eta.get(0, 0), 0.0);
    }

    #[test]
    fn test_visibility_ignores_diagonal_and_infinity() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![3.0, f64::INFINITY],
            vec![2.0, 4.0],
        ])
        .expect("valid");
        let eta = dm.visibility();
        assert_eq!(eta.get(0, 0), 0.0);
        assert_eq!(eta.get(1, 1), 0.0);
        assert_eq!(eta.get(0, 1), 0.0);
        assert!((eta.get(1, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_path_length() {
        let dm = three_nodes();
        assert_eq!(dm.path_length(&[0, 1, 2]), 2.0);
        assert_eq!(dm.path_length(&[0, 2]), 5.0);
        assert_eq!(dm.path_length(&[1]), 0.0);
        assert_eq!(dm.path_length(&[]), 0.0);
    }
}
