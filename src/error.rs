//! Error types for sequence forecasting.

use thiserror::Error;

/// Result type alias for forecasting operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors surfaced by the recurrence core and the trainer.
///
/// Shape mismatches inside tensor operations are not represented here: they
/// are programming errors and panic inside Burn.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Invalid configuration parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sequence with no observations was handed to the model.
    #[error("empty sequence: at least one observation is required")]
    EmptySequence,

    /// An epoch was requested over a dataset without examples.
    #[error("empty dataset: at least one training pair is required")]
    EmptyDataset,

    /// Input and target sequences of a training pair differ in length.
    #[error("length mismatch: input has {input} points, target has {target}")]
    LengthMismatch {
        /// Input sequence length.
        input: usize,
        /// Target sequence length.
        target: usize,
    },

    /// The loss of a training example was NaN or infinite.
    ///
    /// The offending update is never applied; training halts.
    #[error("non-finite loss {loss} at epoch {epoch}, example {example}")]
    NonFiniteLoss {
        /// Zero-based epoch index.
        epoch: usize,
        /// Zero-based index of the example within the epoch.
        example: usize,
        /// The loss value that was observed.
        loss: f64,
    },
}
