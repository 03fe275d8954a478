//! Distance matrices and the sources that build them.
//!
//! - [`SquareMatrix`]: dense row-major n×n storage shared by the distance,
//!   visibility and pheromone matrices.
//! - [`DistanceMatrix`]: validated edge costs, either from a literal grid
//!   ([`DistanceMatrix::from_rows`]) or from an edge-list file
//!   ([`load_edge_list`], [`parse_edge_list`]).
//! - [`presets`]: built-in matrices for demos and benchmarks.

mod dense;
mod distance;
mod loader;
pub mod presets;

pub use dense::SquareMatrix;
pub use distance::DistanceMatrix;
pub use loader::{load_edge_list, parse_edge_list};
