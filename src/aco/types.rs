//! Core types for ACO path search.

use crate::error::AcoError;
use crate::matrix::DistanceMatrix;

/// A start-to-end path search over a distance matrix.
///
/// # Examples
///
/// ```
/// use u_antpath::aco::PathProblem;
/// use u_antpath::matrix::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// let problem = PathProblem::new(dm, 0, 1).unwrap();
/// assert_eq!(problem.node_count(), 2);
/// assert!(PathProblem::new(problem.distance().clone(), 0, 5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PathProblem {
    distance: DistanceMatrix,
    start: usize,
    end: usize,
}

impl PathProblem {
    /// Creates a problem, checking that both endpoints exist.
    pub fn new(distance: DistanceMatrix, start: usize, end: usize) -> Result<Self, AcoError> {
        let size = distance.size();
        if size == 0 {
            return Err(AcoError::EmptyMatrix);
        }
        for node in [start, end] {
            if node >= size {
                return Err(AcoError::NodeOutOfRange { node, size });
            }
        }
        Ok(Self {
            distance,
            start,
            end,
        })
    }

    pub fn distance(&self) -> &DistanceMatrix {
        &self.distance
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn node_count(&self) -> usize {
        self.distance.size()
    }
}

/// What a single tour-construction step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// A candidate was drawn from the transition distribution.
    Normal {
        from: usize,
        to: usize,
        /// Largest transition probability offered at this step.
        max_probability: f64,
        /// Every candidate scored zero, so the draw was uniform.
        uniform_fallback: bool,
    },

    /// Nothing was left to visit, so the end node was appended directly.
    ForcedEndAppend { from: usize, end: usize },

    /// The candidate set was empty; construction stopped short of the end.
    NoCandidates { at: usize },
}

impl StepOutcome {
    /// `true` if this step ended construction.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepOutcome::Normal { .. })
    }
}

/// How a constructed tour relates to the intended end node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourStatus {
    /// Ends at the end node and every hop follows an edge with positive
    /// visibility.
    Complete,

    /// Ends at the end node, but at least one hop crosses a pair with no
    /// usable edge (zero or infinite distance).
    Disconnected,

    /// The end node was appended by forced termination.
    ForcedEnd,

    /// Construction stopped without reaching the end node.
    Truncated,
}

impl TourStatus {
    /// `true` for tours whose last node is the end node.
    pub fn reaches_end(&self) -> bool {
        !matches!(self, TourStatus::Truncated)
    }
}
