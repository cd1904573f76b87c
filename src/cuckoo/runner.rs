//! Cuckoo Search execution loop.

use super::config::CuckooConfig;
use super::types::{CuckooProblem, Nest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a Cuckoo Search run.
#[derive(Debug, Clone)]
pub struct CuckooResult {
    /// Position of the best nest in the final population.
    pub best_position: Vec<f64>,

    /// Objective value of the best nest.
    pub best_fitness: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best fitness at the end of each iteration (non-increasing).
    pub fitness_history: Vec<f64>,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the Cuckoo Search loop.
///
/// # Usage
///
/// ```
/// use u_swarm::cuckoo::{CuckooConfig, CuckooRunner, Sphere};
///
/// let sphere = Sphere::new(2);
/// let config = CuckooConfig::default().with_seed(42);
/// let result = CuckooRunner::run(&sphere, &config);
/// assert_eq!(result.best_position.len(), 2);
/// ```
pub struct CuckooRunner;

impl CuckooRunner {
    /// Runs Cuckoo Search optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid, the dimension is zero, or
    /// the bounds are inverted.
    pub fn run<P: CuckooProblem>(problem: &P, config: &CuckooConfig) -> CuckooResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs Cuckoo Search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// at the top of the next iteration and returns the best nest found
    /// so far.
    pub fn run_with_cancel<P: CuckooProblem>(
        problem: &P,
        config: &CuckooConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> CuckooResult {
        config.validate().expect("invalid CuckooConfig");
        let dim = problem.dim();
        assert!(dim > 0, "dimension must be at least 1");
        let (lo, hi) = problem.bounds();
        assert!(lo < hi, "lower bound must be below upper bound");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut nests: Vec<Nest> = (0..config.num_nests)
            .map(|_| {
                let position = random_position(dim, lo, hi, &mut rng);
                let fitness = problem.objective(&position);
                Nest { position, fitness }
            })
            .collect();

        let mut fitness_history = Vec::with_capacity(config.max_iterations);
        let mut iterations = 0usize;
        let mut cancelled = false;

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            levy_flight_pass(problem, &mut nests, lo, hi, &mut rng);
            abandonment_pass(problem, &mut nests, lo, hi, config.abandon_probability, &mut rng);

            let best = best_nest(&nests);
            fitness_history.push(best.fitness);
            problem.on_iteration(iteration + 1, best.fitness, &best.position);
            iterations = iteration + 1;
        }

        let best = best_nest(&nests).clone();
        CuckooResult {
            best_position: best.position,
            best_fitness: best.fitness,
            iterations,
            fitness_history,
            cancelled,
        }
    }
}

/// Perturbs every nest by a Lévy flight toward a random peer, keeping
/// the move only on strict improvement.
///
/// Peer lookups read a snapshot taken at the top of the pass; the
/// authoritative population is updated in place as the pass proceeds.
fn levy_flight_pass<P: CuckooProblem, R: Rng>(
    problem: &P,
    nests: &mut [Nest],
    lo: f64,
    hi: f64,
    rng: &mut R,
) {
    let snapshot: Vec<Nest> = nests.to_vec();
    let dim = problem.dim();

    for i in 0..nests.len() {
        // Heavy-tailed step: a Gaussian vector scaled by one cube-rooted
        // uniform draw. Mostly small moves, occasionally large jumps.
        let gauss: Vec<f64> = (0..dim)
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect();
        let scale = rng.random_range(0.0..1.0f64).cbrt();
        let peer = rng.random_range(0..snapshot.len());

        let candidate: Vec<f64> = (0..dim)
            .map(|k| {
                let step = gauss[k] * scale;
                let from = snapshot[i].position[k];
                let moved = from + step * (snapshot[peer].position[k] - from);
                moved.clamp(lo, hi)
            })
            .collect();

        let fitness = problem.objective(&candidate);
        if fitness < nests[i].fitness {
            nests[i] = Nest {
                position: candidate,
                fitness,
            };
        }
    }
}

/// Redraws each nest uniformly at random with probability `pa`, keeping
/// the draw only on strict improvement. A non-improving draw is
/// discarded.
fn abandonment_pass<P: CuckooProblem, R: Rng>(
    problem: &P,
    nests: &mut [Nest],
    lo: f64,
    hi: f64,
    pa: f64,
    rng: &mut R,
) {
    let dim = problem.dim();

    for nest in nests.iter_mut() {
        if rng.random_range(0.0..1.0) < pa {
            let position = random_position(dim, lo, hi, rng);
            let fitness = problem.objective(&position);
            if fitness < nest.fitness {
                *nest = Nest { position, fitness };
            }
        }
    }
}

/// Uniform random point in the search box.
fn random_position<R: Rng>(dim: usize, lo: f64, hi: f64, rng: &mut R) -> Vec<f64> {
    (0..dim).map(|_| rng.random_range(lo..hi)).collect()
}

/// Scans for the nest with the lowest cached fitness.
fn best_nest(nests: &[Nest]) -> &Nest {
    nests
        .iter()
        .min_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}
