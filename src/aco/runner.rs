//! ACO execution loop.

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use super::types::AcoProblem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Keeps visibility finite when two cities coincide.
const VISIBILITY_EPSILON: f64 = 1e-10;

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The shortest tour found, as city indices starting at city 0.
    /// The return edge to the start is implicit.
    pub best_tour: Vec<usize>,

    /// Length of the best tour, including the closing edge.
    pub best_length: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best length at the end of each iteration (non-increasing).
    pub length_history: Vec<f64>,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the Ant Colony Optimization loop.
///
/// # Usage
///
/// ```
/// use u_swarm::aco::{AcoConfig, AcoRunner, EuclideanTour};
///
/// let square = EuclideanTour::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// let config = AcoConfig::default().with_num_ants(5).with_seed(42);
/// let result = AcoRunner::run(&square, &config);
/// assert_eq!(result.best_tour.len(), 4);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid or the instance has fewer
    /// than two cities.
    pub fn run<P: AcoProblem>(problem: &P, config: &AcoConfig) -> AcoResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs ACO with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// at the top of the next iteration and returns the best tour found
    /// so far.
    pub fn run_with_cancel<P: AcoProblem>(
        problem: &P,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult {
        config.validate().expect("invalid AcoConfig");
        let n = problem.num_cities();
        assert!(n >= 2, "at least two cities are required");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut pheromone = PheromoneMatrix::new(n);
        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_length = f64::INFINITY;
        let mut length_history = Vec::with_capacity(config.max_iterations);
        let mut iterations = 0usize;
        let mut cancelled = false;

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Construction phase: the pheromone matrix is read-only here.
            let tours: Vec<Vec<usize>> = (0..config.num_ants)
                .map(|_| build_tour(problem, &pheromone, &mut rng))
                .collect();

            // Update phase: evaporate, then reinforce with the full batch.
            update_pheromone(problem, &mut pheromone, &tours, config.evaporation_rate);

            for tour in &tours {
                let length = tour_length(problem, tour);
                if length < best_length {
                    best_length = length;
                    best_tour = tour.clone();
                }
            }

            length_history.push(best_length);
            problem.on_iteration(iteration + 1, best_length);
            iterations = iteration + 1;
        }

        AcoResult {
            best_tour,
            best_length,
            iterations,
            length_history,
            cancelled,
        }
    }
}

/// Total length of a tour, including the closing edge back to the start.
pub fn tour_length<P: AcoProblem>(problem: &P, tour: &[usize]) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| problem.distance(tour[i], tour[(i + 1) % n]))
        .sum()
}

/// Constructs one Hamiltonian cycle starting at city 0.
fn build_tour<P: AcoProblem, R: Rng>(
    problem: &P,
    pheromone: &PheromoneMatrix,
    rng: &mut R,
) -> Vec<usize> {
    let n = problem.num_cities();
    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    tour.push(0);
    visited[0] = true;

    for _ in 1..n {
        let current = *tour.last().expect("tour starts non-empty");
        let next = select_next_city(problem, pheromone, current, &visited, rng);
        visited[next] = true;
        tour.push(next);
    }

    tour
}

/// Samples the next city from the pheromone/visibility weights over the
/// unvisited cities (roulette wheel).
///
/// The weight of a candidate is `pheromone^visibility` with
/// `visibility = 1 / (distance + epsilon)`. When every remaining weight
/// vanishes or overflows, falls back to uniform sampling so no NaN ever
/// reaches the probability scan.
fn select_next_city<P: AcoProblem, R: Rng>(
    problem: &P,
    pheromone: &PheromoneMatrix,
    current: usize,
    visited: &[bool],
    rng: &mut R,
) -> usize {
    let n = visited.len();
    let mut weights = vec![0.0; n];
    let mut total = 0.0;

    for city in 0..n {
        if visited[city] {
            continue;
        }
        let visibility = 1.0 / (problem.distance(current, city) + VISIBILITY_EPSILON);
        let weight = pheromone.get(current, city).powf(visibility);
        if weight.is_finite() {
            weights[city] = weight;
            total += weight;
        }
    }

    if total > 0.0 && total.is_finite() {
        let threshold = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for (city, &weight) in weights.iter().enumerate() {
            cumulative += weight;
            if cumulative > threshold {
                return city;
            }
        }
    }

    // Degenerate weights: sample uniformly over the unvisited cities.
    let remaining: Vec<usize> = (0..n).filter(|&city| !visited[city]).collect();
    remaining[rng.random_range(0..remaining.len())]
}

/// Evaporates all trails, then reinforces each directed edge traversed
/// by the batch with `1 / tour_length`.
///
/// Only the traversal-order edge is reinforced, never its reverse.
/// Zero-length tours (all cities coincident) deposit nothing, keeping
/// every trail finite.
fn update_pheromone<P: AcoProblem>(
    problem: &P,
    pheromone: &mut PheromoneMatrix,
    tours: &[Vec<usize>],
    evaporation_rate: f64,
) {
    pheromone.evaporate(evaporation_rate);

    for tour in tours {
        let length = tour_length(problem, tour);
        if length <= 0.0 {
            continue;
        }
        let amount = 1.0 / length;
        let n = tour.len();
        for i in 0..n {
            pheromone.deposit(tour[i], tour[(i + 1) % n], amount);
        }
    }
}
