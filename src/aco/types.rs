//! Core trait and built-in instance for ACO.

/// Defines a tour-minimization problem for Ant Colony Optimization.
///
/// The user supplies the number of cities and a pairwise distance
/// function; the ACO framework handles tour construction, pheromone
/// management, and best-solution tracking.
///
/// Distances must be deterministic and non-negative. They need not be
/// symmetric: only the directed edge an ant actually traverses is
/// reinforced.
pub trait AcoProblem: Send + Sync {
    /// Number of cities in the instance.
    fn num_cities(&self) -> usize;

    /// Distance from city `from` to city `to`. Lower is better.
    fn distance(&self, from: usize, to: usize) -> f64;

    /// Called at the end of each iteration with the best tour length
    /// found so far.
    ///
    /// Useful for logging or external progress reporting. The default
    /// implementation is a no-op.
    fn on_iteration(&self, _iteration: usize, _best_length: f64) {}
}

/// Built-in ACO instance: cities as points in the Euclidean plane.
///
/// # Examples
///
/// ```
/// use u_swarm::aco::{AcoProblem, EuclideanTour};
///
/// let square = EuclideanTour::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// assert_eq!(square.num_cities(), 4);
/// assert!((square.distance(0, 2) - 2f64.sqrt()).abs() < 1e-12);
/// ```
pub struct EuclideanTour {
    cities: Vec<(f64, f64)>,
}

impl EuclideanTour {
    /// Creates an instance from a list of city coordinates.
    pub fn new(cities: Vec<(f64, f64)>) -> Self {
        Self { cities }
    }
}

impl AcoProblem for EuclideanTour {
    fn num_cities(&self) -> usize {
        self.cities.len()
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        let (x1, y1) = self.cities[from];
        let (x2, y2) = self.cities[to];
        (x1 - x2).hypot(y1 - y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let instance = EuclideanTour::new(vec![(0.0, 0.0), (3.0, 4.0)]);
        assert!((instance.distance(0, 1) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let instance = EuclideanTour::new(vec![(1.0, 2.0), (-3.5, 0.25)]);
        assert!((instance.distance(0, 1) - instance.distance(1, 0)).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let instance = EuclideanTour::new(vec![(2.0, 2.0), (5.0, 5.0)]);
        assert!(instance.distance(0, 0).abs() < 1e-12);
    }
}
