//! Error types.
//!
//! Input problems ([`MatrixError`]) and run configuration problems
//! ([`AcoError`]) are kept apart so a caller can tell a bad matrix file
//! from a rejected parameter set. A search that simply fails to reach the
//! end node is neither: it is reported through
//! [`TourStatus`](crate::aco::TourStatus) on the result.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a distance matrix.
#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read edge list: {0}")]
    Read(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: node {node} is out of range for {size} nodes")]
    NodeOutOfRange { line: usize, node: usize, size: usize },

    #[error("line {line}: negative weight {weight}")]
    NegativeWeight { line: usize, weight: i64 },

    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("invalid distance {value} at ({from}, {to}): must be non-negative")]
    InvalidEntry { from: usize, to: usize, value: f64 },

    #[error("matrix has no nodes")]
    Empty,
}

/// Errors raised when a colony run is rejected before it starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcoError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("node {node} is out of range for a {size}-node matrix")]
    NodeOutOfRange { node: usize, size: usize },

    #[error("distance matrix is empty")]
    EmptyMatrix,
}

/// Errors raised while rendering a convergence chart.
#[cfg(feature = "plot")]
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },
}
