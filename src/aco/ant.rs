//! Single-ant tour construction.

use super::select::{transition_probabilities, weighted_choice};
use super::types::{StepOutcome, TourStatus};
use crate::matrix::{DistanceMatrix, SquareMatrix};
use rand::Rng;

/// One stochastic tour-construction trial.
///
/// An ant walks from its start node, drawing each next node from the
/// pheromone/visibility distribution over the nodes it has not yet
/// visited, until it stands on the end node. It only reads the matrices
/// it is given; pheromone deposits are applied by the colony afterwards.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_antpath::aco::{Ant, TourStatus};
/// use u_antpath::matrix::{DistanceMatrix, SquareMatrix};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 5.0],
///     vec![0.0, 0.0, 1.0],
///     vec![0.0, 0.0, 0.0],
/// ]).unwrap();
/// let pheromone = SquareMatrix::filled(3, 1.0);
/// let visibility = dm.visibility();
///
/// let mut ant = Ant::new(3, 0, 2);
/// ant.construct_tour(&pheromone, &visibility, &dm, &mut StdRng::seed_from_u64(7));
/// assert_eq!(ant.tour().first(), Some(&0));
/// assert_eq!(ant.tour().last(), Some(&2));
/// assert_eq!(ant.status(), TourStatus::Complete);
/// ```
#[derive(Debug, Clone)]
pub struct Ant {
    num_nodes: usize,
    start: usize,
    end: usize,
    alpha: f64,
    beta: f64,
    tour: Vec<usize>,
    distance: f64,
    probabilities: Vec<f64>,
    steps: Vec<StepOutcome>,
    status: TourStatus,
    // construction state
    current: usize,
    unvisited: Vec<bool>,
    remaining: usize,
}

impl Ant {
    /// Creates an ant with α = 1 and β = 2.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is not below `num_nodes`. Endpoints taken
    /// from a [`PathProblem`](super::PathProblem) are already checked.
    pub fn new(num_nodes: usize, start: usize, end: usize) -> Self {
        assert!(
            start < num_nodes && end < num_nodes,
            "endpoints ({start}, {end}) out of range for {num_nodes} nodes"
        );
        let mut ant = Self {
            num_nodes,
            start,
            end,
            alpha: 1.0,
            beta: 2.0,
            tour: Vec::new(),
            distance: 0.0,
            probabilities: Vec::new(),
            steps: Vec::new(),
            status: TourStatus::Truncated,
            current: start,
            unvisited: Vec::new(),
            remaining: 0,
        };
        ant.reset();
        ant
    }

    /// Sets the pheromone (α) and visibility (β) exponents.
    pub fn with_exponents(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Builds a tour from scratch.
    ///
    /// Afterwards [`tour`](Self::tour), [`distance`](Self::distance),
    /// [`probabilities`](Self::probabilities), [`steps`](Self::steps) and
    /// [`status`](Self::status) describe the result. Never fails: every
    /// dead end has a defined fallback recorded as a [`StepOutcome`].
    pub fn construct_tour<R: Rng>(
        &mut self,
        pheromone: &SquareMatrix,
        visibility: &SquareMatrix,
        distance: &DistanceMatrix,
        rng: &mut R,
    ) {
        self.reset();

        while self.current != self.end {
            let outcome = self.step(pheromone, visibility, rng);
            if outcome.is_terminal() {
                break;
            }
        }

        self.distance = distance.path_length(&self.tour);
        self.status = self.classify(visibility);
    }

    /// Advances the walk by one node.
    ///
    /// The caller is responsible for stopping once the ant is on the end
    /// node or a terminal outcome has been returned.
    pub fn step<R: Rng>(
        &mut self,
        pheromone: &SquareMatrix,
        visibility: &SquareMatrix,
        rng: &mut R,
    ) -> StepOutcome {
        let from = self.current;

        if self.remaining == 0 && from != self.end {
            self.tour.push(self.end);
            self.current = self.end;
            let outcome = StepOutcome::ForcedEndAppend {
                from,
                end: self.end,
            };
            self.steps.push(outcome);
            return outcome;
        }

        let candidates = self.candidates();
        if candidates.is_empty() {
            let outcome = StepOutcome::NoCandidates { at: from };
            self.steps.push(outcome);
            return outcome;
        }

        let transition = transition_probabilities(
            from,
            &candidates,
            pheromone,
            visibility,
            self.alpha,
            self.beta,
        );
        let pick = weighted_choice(&transition.probabilities, rng).unwrap_or(0);
        let to = candidates[pick];
        let max_probability = transition.max_probability();

        self.probabilities.push(max_probability);
        self.tour.push(to);
        self.current = to;
        if self.unvisited[to] {
            self.unvisited[to] = false;
            self.remaining -= 1;
        }

        let outcome = StepOutcome::Normal {
            from,
            to,
            max_probability,
            uniform_fallback: transition.uniform_fallback,
        };
        self.steps.push(outcome);
        outcome
    }

    /// Unvisited nodes in ascending order, followed by the end node while
    /// it is not yet part of the tour.
    ///
    /// An unvisited end node is therefore listed twice and carries two
    /// shares of the distribution.
    fn candidates(&self) -> Vec<usize> {
        let mut candidates: Vec<usize> = (0..self.num_nodes)
            .filter(|&node| self.unvisited[node])
            .collect();
        if !self.tour.contains(&self.end) {
            candidates.push(self.end);
        }
        candidates
    }

    fn classify(&self, visibility: &SquareMatrix) -> TourStatus {
        match self.steps.last() {
            Some(StepOutcome::ForcedEndAppend { .. }) => TourStatus::ForcedEnd,
            Some(StepOutcome::NoCandidates { .. }) => TourStatus::Truncated,
            _ if self.tour.last() != Some(&self.end) => TourStatus::Truncated,
            _ => {
                let connected = self
                    .tour
                    .windows(2)
                    .all(|w| visibility.get(w[0], w[1]) > 0.0);
                if connected {
                    TourStatus::Complete
                } else {
                    TourStatus::Disconnected
                }
            }
        }
    }

    fn reset(&mut self) {
        self.tour.clear();
        self.tour.push(self.start);
        self.current = self.start;
        self.distance = 0.0;
        self.probabilities.clear();
        self.steps.clear();
        self.status = TourStatus::Truncated;
        self.unvisited = vec![true; self.num_nodes];
        self.unvisited[self.start] = false;
        self.remaining = self.num_nodes - 1;
    }

    /// Visited nodes in order, starting with the start node.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Consumes the ant, returning its tour.
    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }

    /// Sum of edge costs along the tour.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Largest transition probability offered at each normal step.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Outcome of every step taken, in order.
    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    pub fn status(&self) -> TourStatus {
        self.status
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}
