//! ACO configuration.

/// Configuration parameters for Ant Colony Optimization.
///
/// # Examples
///
/// ```
/// use u_swarm::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(30)
///     .with_max_iterations(200)
///     .with_evaporation_rate(0.05);
/// assert_eq!(config.num_ants, 30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants constructing tours each iteration.
    pub num_ants: usize,

    /// Number of iterations to run. The algorithm has no early-stopping
    /// criterion; it always exhausts this budget.
    pub max_iterations: usize,

    /// Pheromone evaporation rate in (0, 1). Each iteration every trail
    /// is scaled by `1 - evaporation_rate` before reinforcement.
    pub evaporation_rate: f64,

    /// Random seed for reproducibility. `None` picks a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            max_iterations: 100,
            evaporation_rate: 0.01,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the pheromone evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_ants == 0 {
            return Err("num_ants must be positive".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        if self.evaporation_rate <= 0.0 || self.evaporation_rate >= 1.0 {
            return Err(format!(
                "evaporation_rate must be in (0, 1), got {}",
                self.evaporation_rate
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.num_ants, 20);
        assert_eq!(config.max_iterations, 100);
        assert!((config.evaporation_rate - 0.01).abs() < 1e-12);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_ants() {
        let config = AcoConfig::default().with_num_ants(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = AcoConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_evaporation_bounds() {
        assert!(AcoConfig::default()
            .with_evaporation_rate(0.0)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_evaporation_rate(1.0)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_evaporation_rate(-0.5)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_evaporation_rate(0.5)
            .validate()
            .is_ok());
    }
}
