//! Cuckoo Search configuration.

/// Configuration parameters for Cuckoo Search.
///
/// # Examples
///
/// ```
/// use u_swarm::cuckoo::CuckooConfig;
///
/// let config = CuckooConfig::default()
///     .with_num_nests(50)
///     .with_max_iterations(500)
///     .with_abandon_probability(0.3);
/// assert_eq!(config.num_nests, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CuckooConfig {
    /// Number of nests (candidate points) in the population.
    pub num_nests: usize,

    /// Number of iterations to run. Fixed budget, no convergence test.
    pub max_iterations: usize,

    /// Per-nest probability of abandonment each iteration, in [0, 1].
    /// An abandoned nest is redrawn uniformly at random and kept only
    /// if it improves.
    pub abandon_probability: f64,

    /// Random seed for reproducibility. `None` picks a random seed.
    pub seed: Option<u64>,
}

impl Default for CuckooConfig {
    fn default() -> Self {
        Self {
            num_nests: 25,
            max_iterations: 100,
            abandon_probability: 0.25,
            seed: None,
        }
    }
}

impl CuckooConfig {
    /// Sets the population size.
    pub fn with_num_nests(mut self, n: usize) -> Self {
        self.num_nests = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the abandonment probability.
    pub fn with_abandon_probability(mut self, pa: f64) -> Self {
        self.abandon_probability = pa;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_nests == 0 {
            return Err("num_nests must be positive".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.abandon_probability) {
            return Err(format!(
                "abandon_probability must be in [0, 1], got {}",
                self.abandon_probability
            ));
        }
        Ok(())
    }
}
