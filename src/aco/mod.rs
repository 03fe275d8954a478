//! Ant Colony Optimization (ACO) for start-to-end paths.
//!
//! A population-based metaheuristic: each iteration a colony of ants
//! builds tours from the start node to the end node, choosing each hop
//! with probability proportional to `τ^α · η^β` (pheromone times
//! inverse distance). Pheromone then evaporates and is reinforced along
//! every tour in proportion to `1 / length`, so short paths accumulate
//! desirability over iterations.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), "Ant Colony Optimization", MIT Press

mod ant;
mod config;
mod pheromone;
mod runner;
mod select;
mod types;

pub use ant::Ant;
pub use config::AcoConfig;
pub use pheromone::{deposit_amount, PheromoneField};
pub use runner::{optimize, AcoResult, AcoRunner};
pub use select::{transition_probabilities, weighted_choice, Transition};
pub use types::{PathProblem, StepOutcome, TourStatus};
