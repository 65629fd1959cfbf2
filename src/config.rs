//! Configuration for agent creation.

use crate::error::{Error, Result};

/// Learning parameters for a [`QLearnAgent`](crate::QLearnAgent).
///
/// Defaults match the reference host: alpha 0.2, epsilon 0.05, gamma 0.8,
/// 2000 training episodes, no fixed seed.
///
/// # Examples
///
/// ```
/// use qgrid::AgentConfig;
///
/// let config = AgentConfig::new()
///     .with_alpha(0.5)
///     .with_epsilon(0.1)
///     .with_num_training(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Learning rate α (≥ 0)
    pub alpha: f64,
    /// Exploration probability ε (0 to 1)
    pub epsilon: f64,
    /// Discount factor γ (0 to 1)
    pub gamma: f64,
    /// Number of training episodes before learning is switched off
    pub num_training: u32,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with the reference defaults.
    pub fn new() -> Self {
        Self {
            alpha: 0.2,
            epsilon: 0.05,
            gamma: 0.8,
            num_training: 2000,
            seed: None,
        }
    }

    /// Set the learning rate.
    pub fn with_alpha(mut self, value: f64) -> Self {
        self.alpha = value;
        self
    }

    /// Set the exploration probability.
    pub fn with_epsilon(mut self, value: f64) -> Self {
        self.epsilon = value;
        self
    }

    /// Set the discount factor.
    pub fn with_gamma(mut self, value: f64) -> Self {
        self.gamma = value;
        self
    }

    /// Set the training episode budget.
    pub fn with_num_training(mut self, value: u32) -> Self {
        self.num_training = value;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(Error::InvalidParameter {
                name: "alpha",
                value: self.alpha,
            });
        }
        if !self.epsilon.is_finite() || !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                value: self.epsilon,
            });
        }
        if !self.gamma.is_finite() || !(0.0..=1.0).contains(&self.gamma) {
            return Err(Error::InvalidParameter {
                name: "gamma",
                value: self.gamma,
            });
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
