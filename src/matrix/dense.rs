//! Dense square matrix.

/// A dense n×n matrix of `f64` stored in row-major order.
///
/// Backs the distance, visibility and pheromone matrices.
///
/// # Examples
///
/// ```
/// use u_antpath::matrix::SquareMatrix;
///
/// let mut m = SquareMatrix::filled(3, 1.0);
/// m.set(0, 2, 4.0);
/// assert_eq!(m.get(0, 2), 4.0);
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareMatrix {
    data: Vec<f64>,
    size: usize,
}

impl SquareMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self::filled(size, 0.0)
    }

    /// Creates a matrix with every cell set to `value`.
    pub fn filled(size: usize, value: f64) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit row-major buffer.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the value at (`from`, `to`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        debug_assert!(to < self.size, "column {to} out of range for {}", self.size);
        self.data[from * self.size + to]
    }

    /// Sets the value at (`from`, `to`).
    #[inline]
    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        self.data[from * self.size + to] = value;
    }

    /// Adds `delta` to the value at (`from`, `to`).
    #[inline]
    pub fn add(&mut self, from: usize, to: usize, delta: f64) {
        self.data[from * self.size + to] += delta;
    }

    /// Multiplies every cell by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        let start = from * self.size;
        &self.data[start..start + self.size]
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
