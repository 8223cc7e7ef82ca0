//! Training examples

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// One online-training example: an input sequence and the same sequence
/// shifted by one step.
///
/// Invariant: `input.len() == target.len() > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPair {
    input: Vec<f64>,
    target: Vec<f64>,
}

impl TrainingPair {
    /// Create a pair from explicit input and target sequences.
    ///
    /// # Errors
    /// [`ForecastError::EmptySequence`] for empty sequences,
    /// [`ForecastError::LengthMismatch`] when the lengths differ.
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Result<Self> {
        if input.len() != target.len() {
            return Err(ForecastError::LengthMismatch {
                input: input.len(),
                target: target.len(),
            });
        }
        if input.is_empty() {
            return Err(ForecastError::EmptySequence);
        }
        Ok(Self { input, target })
    }

    /// Split a series into `series[..n-1]` and `series[1..]`.
    ///
    /// # Errors
    /// [`ForecastError::EmptySequence`] when the series has fewer than two
    /// points.
    pub fn from_series(series: &[f64]) -> Result<Self> {
        if series.len() < 2 {
            return Err(ForecastError::EmptySequence);
        }
        Self::new(
            series[..series.len() - 1].to_vec(),
            series[1..].to_vec(),
        )
    }

    /// Input sequence.
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Target sequence, `target[i] == input[i + 1]` for windowed series.
    pub fn target(&self) -> &[f64] {
        &self.target
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Always false for a constructed pair.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_series_shifts_by_one() {
        let pair = TrainingPair::from_series(&[1.0, 2.0, 3.0, 4.0]).unwrap();

        assert_eq!(pair.input(), &[1.0, 2.0, 3.0]);
        assert_eq!(pair.target(), &[2.0, 3.0, 4.0]);
        assert_eq!(pair.len(), 3);
    }

    #[test]
    fn test_from_short_series() {
        assert!(matches!(
            TrainingPair::from_series(&[1.0]),
            Err(ForecastError::EmptySequence)
        ));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            TrainingPair::new(vec![0.0, 1.0], vec![1.0]),
            Err(ForecastError::LengthMismatch { input: 2, target: 1 })
        ));
    }

    #[test]
    fn test_empty_pair() {
        assert!(matches!(
            TrainingPair::new(vec![], vec![]),
            Err(ForecastError::EmptySequence)
        ));
    }
}
