//! ACO colony loop.
//!
//! # Algorithm
//!
//! 1. Derive visibility from the distance matrix, fill pheromone
//! 2. At each iteration:
//!    a. Spawn `num_ants` fresh ants, each with its own seeded RNG
//!    b. Construct every tour against the same pheromone snapshot
//!    c. Fold tours in ant order into the best-so-far (strict improvement)
//!    d. Record mean tour length and mean max-transition probability
//!    e. Evaporate, then deposit `1 / length` along every tour
//!    f. Record mean pheromone along the current best tour
//! 3. Return histories; the pheromone history is sorted ascending

use super::ant::Ant;
use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use super::types::{PathProblem, TourStatus};
use crate::error::AcoError;
use crate::matrix::{DistanceMatrix, SquareMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best tour found, or `None` if no eligible tour had finite length.
    pub best_tour: Option<Vec<usize>>,

    /// Length of the best tour (`f64::INFINITY` when there is none).
    pub best_length: f64,

    /// How the best tour relates to the end node.
    pub best_status: Option<TourStatus>,

    /// Iteration (0-based) in which the best tour was found.
    pub best_iteration: Option<usize>,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Mean tour length across the ants of each iteration.
    pub distance_history: Vec<f64>,

    /// Mean pheromone along the best tour, sorted ascending.
    ///
    /// One sample per iteration that had a best tour with at least one
    /// edge, taken after that iteration's evaporation and deposit.
    pub pheromone_history: Vec<f64>,

    /// The samples of `pheromone_history` in chronological order.
    pub pheromone_trace: Vec<f64>,

    /// Mean of all ants' per-step max transition probabilities, per
    /// iteration (0.0 for an iteration in which no ant moved).
    pub probability_history: Vec<f64>,

    /// Best-so-far length at the end of each iteration. Non-increasing.
    pub best_length_history: Vec<f64>,

    /// Tours that reached the end node across at least one missing edge.
    pub disconnected_tours: usize,

    /// Tours that ended through forced termination.
    pub forced_tours: usize,

    /// Tours that stopped before reaching the end node.
    pub truncated_tours: usize,

    /// Pheromone field after the last iteration.
    pub final_pheromone: SquareMatrix,
}

/// Executes the colony loop.
///
/// # Usage
///
/// ```
/// use u_antpath::aco::{AcoConfig, AcoRunner, PathProblem};
/// use u_antpath::matrix::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 5.0],
///     vec![0.0, 0.0, 1.0],
///     vec![0.0, 0.0, 0.0],
/// ]).unwrap();
/// let problem = PathProblem::new(dm, 0, 2).unwrap();
/// let config = AcoConfig::default()
///     .with_num_ants(10)
///     .with_num_iterations(10)
///     .with_seed(42);
///
/// let result = AcoRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best_tour, Some(vec![0, 1, 2]));
/// assert_eq!(result.best_length, 2.0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO on the given problem.
    pub fn run(problem: &PathProblem, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = problem.node_count();
        let distance = problem.distance();
        let visibility = distance.visibility();
        let mut pheromone = PheromoneField::new(n, config.initial_pheromone);

        tracing::info!(
            nodes = n,
            start = problem.start(),
            end = problem.end(),
            ants = config.num_ants,
            iterations = config.num_iterations,
            "starting ant colony run"
        );

        let mut best_tour: Option<Vec<usize>> = None;
        let mut best_length = f64::INFINITY;
        let mut best_status = None;
        let mut best_iteration = None;

        let mut distance_history = Vec::with_capacity(config.num_iterations);
        let mut pheromone_trace = Vec::with_capacity(config.num_iterations);
        let mut probability_history = Vec::with_capacity(config.num_iterations);
        let mut best_length_history = Vec::with_capacity(config.num_iterations);
        let mut disconnected_tours = 0usize;
        let mut forced_tours = 0usize;
        let mut truncated_tours = 0usize;

        for iteration in 0..config.num_iterations {
            let seeds: Vec<u64> = (0..config.num_ants).map(|_| rng.random()).collect();
            let ants = construct_all(
                problem,
                pheromone.as_matrix(),
                &visibility,
                &seeds,
                config,
            );

            let mut length_sum = 0.0;
            let mut probability_sum = 0.0;
            let mut probability_count = 0usize;

            for ant in &ants {
                length_sum += ant.distance();
                probability_sum += ant.probabilities().iter().sum::<f64>();
                probability_count += ant.probabilities().len();

                match ant.status() {
                    TourStatus::Complete => {}
                    TourStatus::Disconnected => disconnected_tours += 1,
                    TourStatus::ForcedEnd => forced_tours += 1,
                    TourStatus::Truncated => truncated_tours += 1,
                }
                if ant.status() != TourStatus::Complete {
                    tracing::trace!(iteration, status = ?ant.status(), tour = ?ant.tour(), "degraded tour");
                }

                let eligible =
                    !config.require_complete_tours || ant.status() == TourStatus::Complete;
                if eligible && ant.distance() < best_length {
                    best_length = ant.distance();
                    best_tour = Some(ant.tour().to_vec());
                    best_status = Some(ant.status());
                    best_iteration = Some(iteration);
                }
            }

            distance_history.push(length_sum / ants.len() as f64);
            probability_history.push(if probability_count > 0 {
                probability_sum / probability_count as f64
            } else {
                0.0
            });

            pheromone.evaporate(config.evaporation_rate);
            for ant in &ants {
                pheromone.deposit(ant.tour(), ant.distance());
            }

            if let Some(level) = best_tour.as_deref().and_then(|t| pheromone.mean_along(t)) {
                pheromone_trace.push(level);
            }
            best_length_history.push(best_length);

            tracing::debug!(
                iteration,
                mean_length = length_sum / ants.len() as f64,
                best_length,
                "iteration complete"
            );
        }

        let mut pheromone_history = pheromone_trace.clone();
        pheromone_history.sort_by(f64::total_cmp);

        match &best_tour {
            Some(tour) => tracing::info!(best_length, hops = tour.len() - 1, "ant colony run finished"),
            None => tracing::warn!("ant colony run finished without an eligible tour"),
        }

        Ok(AcoResult {
            best_tour,
            best_length,
            best_status,
            best_iteration,
            iterations: config.num_iterations,
            distance_history,
            pheromone_history,
            pheromone_trace,
            probability_history,
            best_length_history,
            disconnected_tours,
            forced_tours,
            truncated_tours,
            final_pheromone: pheromone.into_matrix(),
        })
    }
}

/// Runs ACO with default exponents and no seed.
///
/// Flat entry point: validates the endpoints and parameters and returns
/// the run's histories and best tour.
pub fn optimize(
    num_ants: usize,
    num_iterations: usize,
    evaporation_rate: f64,
    start: usize,
    end: usize,
    distance: &DistanceMatrix,
) -> Result<AcoResult, AcoError> {
    let problem = PathProblem::new(distance.clone(), start, end)?;
    let config = AcoConfig::default()
        .with_num_ants(num_ants)
        .with_num_iterations(num_iterations)
        .with_evaporation_rate(evaporation_rate);
    AcoRunner::run(&problem, &config)
}

fn build_ant(
    problem: &PathProblem,
    pheromone: &SquareMatrix,
    visibility: &SquareMatrix,
    seed: u64,
    config: &AcoConfig,
) -> Ant {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ant = Ant::new(problem.node_count(), problem.start(), problem.end())
        .with_exponents(config.alpha, config.beta);
    ant.construct_tour(pheromone, visibility, problem.distance(), &mut rng);
    ant
}

/// Construct one tour per seed, collected in seed order.
#[cfg(feature = "parallel")]
fn construct_all(
    problem: &PathProblem,
    pheromone: &SquareMatrix,
    visibility: &SquareMatrix,
    seeds: &[u64],
    config: &AcoConfig,
) -> Vec<Ant> {
    use rayon::prelude::*;

    if config.parallel {
        seeds
            .par_iter()
            .map(|&seed| build_ant(problem, pheromone, visibility, seed, config))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| build_ant(problem, pheromone, visibility, seed, config))
            .collect()
    }
}

/// Construct one tour per seed, collected in seed order.
#[cfg(not(feature = "parallel"))]
fn construct_all(
    problem: &PathProblem,
    pheromone: &SquareMatrix,
    visibility: &SquareMatrix,
    seeds: &[u64],
    config: &AcoConfig,
) -> Vec<Ant> {
    seeds
        .iter()
        .map(|&seed| build_ant(problem, pheromone, visibility, seed, config))
        .collect()
}
