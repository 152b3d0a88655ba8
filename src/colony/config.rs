//! Algorithm constants for a colony run.

use serde::{Deserialize, Serialize};

use crate::error::{AcoError, AcoResult};

/// Ant Colony Optimization parameters.
///
/// Defaults are the reference configuration: `α = 1.0`, `β = 2.0`,
/// `ρ = 0.5`, ten ants and an initial pheromone of `0.01`.
///
/// # Examples
///
/// ```
/// use u_aco::colony::AcoConfig;
///
/// let config = AcoConfig::default().with_num_ants(20).with_seed(7);
/// assert_eq!(config.num_ants, 20);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Pheromone weight (α).
    pub alpha: f64,
    /// Visibility weight (β).
    pub beta: f64,
    /// Evaporation rate (ρ), in `[0, 1)`.
    pub rho: f64,
    /// Ants per generation (m).
    pub num_ants: usize,
    /// Pre-bootstrap fill value of the pheromone matrix.
    pub initial_pheromone: f64,
    /// Seed for the run's random source; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Also deposit `1/cost(i, j)` on every edge an ant steps along,
    /// in addition to the `1/tour_cost` deposit.
    pub step_deposit: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 2.0,
            rho: 0.5,
            num_ants: 10,
            initial_pheromone: 0.01,
            seed: None,
            step_deposit: false,
        }
    }
}

impl AcoConfig {
    /// Sets the pheromone weight (α).
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the visibility weight (β).
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate (ρ).
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the number of ants per generation.
    pub fn with_num_ants(mut self, num_ants: usize) -> Self {
        self.num_ants = num_ants;
        self
    }

    /// Sets the pre-bootstrap pheromone fill value.
    pub fn with_initial_pheromone(mut self, value: f64) -> Self {
        self.initial_pheromone = value;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables the per-step edge deposit.
    pub fn with_step_deposit(mut self, enabled: bool) -> Self {
        self.step_deposit = enabled;
        self
    }

    /// Checks that every parameter is in range.
    ///
    /// Pheromone stays strictly positive only while `ρ < 1`, so `ρ = 1` is
    /// rejected along with negative or non-finite weights.
    pub fn validate(&self) -> AcoResult<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::Config(format!(
                "alpha must be finite and >= 0, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::Config(format!(
                "beta must be finite and >= 0, got {}",
                self.beta
            )));
        }
        if !(0.0..1.0).contains(&self.rho) {
            return Err(AcoError::Config(format!(
                "rho must be in [0, 1), got {}",
                self.rho
            )));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(AcoError::Config(format!(
                "initial pheromone must be finite and > 0, got {}",
                self.initial_pheromone
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_configuration() {
        let c = AcoConfig::default();
        assert!((c.alpha - 1.0).abs() < 1e-10);
        assert!((c.beta - 2.0).abs() < 1e-10);
        assert!((c.rho - 0.5).abs() < 1e-10);
        assert_eq!(c.num_ants, 10);
        assert!((c.initial_pheromone - 0.01).abs() < 1e-10);
        assert_eq!(c.seed, None);
        assert!(!c.step_deposit);
    }

    #[test]
    fn test_builder() {
        let c = AcoConfig::default()
            .with_alpha(2.0)
            .with_beta(3.0)
            .with_rho(0.2)
            .with_num_ants(50)
            .with_initial_pheromone(0.5)
            .with_seed(42)
            .with_step_deposit(true);
        assert_eq!(c.alpha, 2.0);
        assert_eq!(c.beta, 3.0);
        assert_eq!(c.rho, 0.2);
        assert_eq!(c.num_ants, 50);
        assert_eq!(c.initial_pheromone, 0.5);
        assert_eq!(c.seed, Some(42));
        assert!(c.step_deposit);
    }

    #[test]
    fn test_validate_rejects_bad_rho() {
        assert!(AcoConfig::default().with_rho(1.0).validate().is_err());
        assert!(AcoConfig::default().with_rho(-0.1).validate().is_err());
        assert!(AcoConfig::default().with_rho(f64::NAN).validate().is_err());
        assert!(AcoConfig::default().with_rho(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(f64::INFINITY).validate().is_err());
        assert!(AcoConfig::default().with_initial_pheromone(0.0).validate().is_err());
    }

    #[test]
    fn test_zero_ants_is_valid() {
        assert!(AcoConfig::default().with_num_ants(0).validate().is_ok());
    }
}
