//! Pheromone trail storage.

/// Pheromone trail strengths over directed city pairs.
///
/// A square matrix in flat row-major storage, sized once at construction
/// and never resized. Trails start uniform at `1/n` and are mutated in
/// place every iteration: a global evaporation scaling followed by
/// per-edge deposits. Entries stay non-negative and finite as long as
/// the evaporation rate lies in (0, 1) and deposits are finite.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    n: usize,
    trails: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n x n` matrix with every trail set to `1/n`.
    pub fn new(num_cities: usize) -> Self {
        assert!(num_cities > 0, "pheromone matrix needs at least one city");
        Self {
            n: num_cities,
            trails: vec![1.0 / num_cities as f64; num_cities * num_cities],
        }
    }

    /// Number of cities the matrix is indexed by.
    pub fn num_cities(&self) -> usize {
        self.n
    }

    /// Trail strength on the directed edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.trails[from * self.n + to]
    }

    /// Scales every trail by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for trail in &mut self.trails {
            *trail *= keep;
        }
    }

    /// Adds `amount` to the directed edge `from -> to`.
    ///
    /// The reverse edge is left untouched.
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.trails[from * self.n + to] += amount;
    }
}
