//! # Recurrent Cell Building Blocks
//!
//! Single-timestep pieces of the forecaster. They are driven over a sequence
//! by [`ForecastRnn`](crate::rnn::ForecastRnn).
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RnnCell`] | Elman transition plus scalar linear readout |
//! | [`LearnedInitialState`] | Trainable hidden state at time zero |
//! | [`HiddenState`] | `[1, hidden_size]` state threaded between steps |
//! | [`Sample`] | One scalar observation or prediction (`[1, 1]`) |
//!
//! ## Per-step Contract
//!
//! ```text
//! step(hidden, sample) -> (sample, hidden)
//! ```
//!
//! Values are kept as tensors rather than `f64` so that a prediction fed back
//! as the next input stays on the autodiff graph during training.
//!
//! ## Example
//!
//! ```rust
//! use burn::backend::NdArray;
//! use rnn_extrapolate::cells::{HiddenState, RnnCell, Sample};
//!
//! type Backend = NdArray<f64>;
//! let device = Default::default();
//!
//! let cell = RnnCell::<Backend>::new(8, &device);
//! let hidden = HiddenState::zeros(8, &device);
//!
//! let (output, next_hidden) = cell.step(hidden, Sample::from_value(0.25, &device));
//! assert_eq!(next_hidden.size(), 8);
//! assert!(output.value().is_finite());
//! ```

pub mod initial_state;
pub mod rnn_cell;

pub use initial_state::LearnedInitialState;
pub use rnn_cell::{HiddenState, RnnCell, Sample};
