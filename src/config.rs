//! Configuration types for the forecaster.
//!
//! - [`ModelConfig`]: hidden size and nonlinearity
//! - [`TrainingConfig`]: epochs, optimizer and teacher forcing settings
//! - [`ExtrapolationConfig`]: forecast horizon
//!
//! All knobs are plain scalars; there is no file format.

use crate::activation::Nonlinearity;
use crate::error::{ForecastError, Result};
use crate::forcing::{TeacherForcing, DEFAULT_TEACHER_FORCE_PROB};
use serde::{Deserialize, Serialize};

/// Model architecture settings.
///
/// # Example
///
/// ```
/// use rnn_extrapolate::config::ModelConfig;
///
/// let config = ModelConfig::default().with_hidden_size(16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Dimension of the hidden state.
    pub hidden_size: usize,

    /// Nonlinearity of the recurrent update.
    pub nonlinearity: Nonlinearity,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            hidden_size: 32,
            nonlinearity: Nonlinearity::Tanh,
        }
    }
}

impl ModelConfig {
    /// Set the hidden size.
    #[must_use]
    pub const fn with_hidden_size(mut self, hidden_size: usize) -> Self {
        self.hidden_size = hidden_size;
        self
    }

    /// Set the nonlinearity.
    #[must_use]
    pub const fn with_nonlinearity(mut self, nonlinearity: Nonlinearity) -> Self {
        self.nonlinearity = nonlinearity;
        self
    }

    /// Check the settings.
    ///
    /// # Errors
    /// Returns [`ForecastError::InvalidConfig`] for a zero hidden size.
    pub fn validate(&self) -> Result<()> {
        if self.hidden_size == 0 {
            return Err(ForecastError::InvalidConfig(
                "hidden_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Online training settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of passes over the dataset.
    pub epochs: usize,

    /// SGD step size.
    pub learning_rate: f64,

    /// Momentum coefficient.
    pub momentum: f64,

    /// Probability of feeding ground truth at each step after the first.
    /// Not range-checked: values outside `[0, 1]` mean always/never.
    pub teacher_force_prob: f64,

    /// Seed for the forcing coin flip. `None` uses the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            learning_rate: 0.01,
            momentum: 0.9,
            teacher_force_prob: DEFAULT_TEACHER_FORCE_PROB,
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Set the number of epochs.
    #[must_use]
    pub const fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set the learning rate.
    #[must_use]
    pub const fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the momentum coefficient.
    #[must_use]
    pub const fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    /// Set the teacher forcing probability.
    #[must_use]
    pub const fn with_teacher_force_prob(mut self, teacher_force_prob: f64) -> Self {
        self.teacher_force_prob = teacher_force_prob;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The forcing policy these settings describe.
    pub fn teacher_forcing(&self) -> TeacherForcing {
        TeacherForcing::new(self.teacher_force_prob)
    }

    /// Check the settings.
    ///
    /// # Errors
    /// Returns [`ForecastError::InvalidConfig`] for zero epochs, a learning
    /// rate that is not positive and finite, or a negative or non-finite
    /// momentum.
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(ForecastError::InvalidConfig(
                "epochs must be positive".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ForecastError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if !self.momentum.is_finite() || self.momentum < 0.0 {
            return Err(ForecastError::InvalidConfig(format!(
                "momentum must be non-negative and finite, got {}",
                self.momentum
            )));
        }
        Ok(())
    }
}

/// Forecast horizon settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtrapolationConfig {
    /// Number of values generated past the observed sequence.
    pub future_steps: usize,
}

impl Default for ExtrapolationConfig {
    fn default() -> Self {
        Self { future_steps: 100 }
    }
}

impl ExtrapolationConfig {
    /// Set the forecast horizon.
    #[must_use]
    pub const fn with_future_steps(mut self, future_steps: usize) -> Self {
        self.future_steps = future_steps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ModelConfig::default().validate().is_ok());
        assert!(TrainingConfig::default().validate().is_ok());
        assert_eq!(ExtrapolationConfig::default().future_steps, 100);
    }

    #[test]
    fn test_zero_hidden_size_rejected() {
        let config = ModelConfig::default().with_hidden_size(0);
        assert!(matches!(config.validate(), Err(ForecastError::InvalidConfig(_))));
    }

    #[test]
    fn test_training_config_rejections() {
        for config in [
            TrainingConfig::default().with_epochs(0),
            TrainingConfig::default().with_learning_rate(0.0),
            TrainingConfig::default().with_learning_rate(f64::NAN),
            TrainingConfig::default().with_momentum(-0.1),
            TrainingConfig::default().with_momentum(f64::INFINITY),
        ] {
            assert!(
                matches!(config.validate(), Err(ForecastError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_teacher_force_prob_not_range_checked() {
        let config = TrainingConfig::default().with_teacher_force_prob(1.5);
        assert!(config.validate().is_ok());
        assert_eq!(config.teacher_forcing().probability(), 1.5);
    }

    #[test]
    fn test_builder_chain() {
        let config = TrainingConfig::default()
            .with_epochs(5)
            .with_learning_rate(0.05)
            .with_momentum(0.5)
            .with_seed(9);

        assert_eq!(config.epochs, 5);
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.momentum, 0.5);
        assert_eq!(config.seed, Some(9));
    }
}
