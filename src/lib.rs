//! Ant Colony Optimization for start-to-end path search.
//!
//! Finds a short path between two nodes of a weighted directed graph
//! with a stochastic, pheromone-guided population search:
//!
//! - **Matrix** ([`matrix`]): dense distance matrices, built from a
//!   literal grid or loaded from an edge-list file, plus the visibility
//!   heuristic derived from them.
//! - **ACO** ([`aco`]): the per-ant tour construction and the colony loop
//!   that evaporates and reinforces the pheromone field, tracks the best
//!   tour, and records convergence statistics.
//! - **Report** ([`report`]): route breakdowns and convergence series as
//!   CSV or, with the `plot` feature, PNG charts.
//!
//! # Example
//!
//! ```
//! use u_antpath::aco::{AcoConfig, AcoRunner, PathProblem};
//! use u_antpath::matrix::presets;
//!
//! let problem = PathProblem::new(presets::demo_12(), 0, 11).unwrap();
//! let config = AcoConfig::default()
//!     .with_num_ants(20)
//!     .with_num_iterations(20)
//!     .with_seed(7);
//! let result = AcoRunner::run(&problem, &config).unwrap();
//!
//! let tour = result.best_tour.unwrap();
//! assert_eq!(tour.first(), Some(&0));
//! assert_eq!(tour.last(), Some(&11));
//! ```
//!
//! # Architecture
//!
//! The search is generic over nothing but the distance matrix: there is no
//! notion of coordinates, vehicles, or time windows. The optional
//! `parallel` feature builds the ants of an iteration concurrently with
//! rayon; `serde` derives serialization for configs and results; `plot`
//! renders convergence charts with plotters; `cli` builds the `u-antpath`
//! binary.

pub mod aco;
pub mod error;
pub mod matrix;
pub mod report;

pub use error::{AcoError, MatrixError};
#[cfg(feature = "plot")]
pub use error::PlotError;
