//! # rnn-extrapolate - Recurrent Sequence Extrapolation
//!
//! A single-layer recurrent network, built on the Burn framework, that learns
//! to predict the next value of a noisy periodic signal and then forecasts
//! unseen values by feeding its own predictions back.
//!
//! ## Features
//!
//! - **Learned initial state**: the hidden state at time zero is a trainable parameter
//! - **Scheduled sampling**: per-step coin flip between ground truth and own prediction
//! - **Injectable randomness**: any `rand::Rng` or a scripted draw list decides forcing
//! - **Autoregressive rollout**: arbitrary-length forecasts reusing the same cell
//! - **Online training**: one SGD-with-momentum step per example, BPTT through fed-back predictions
//!
//! ## Quick Start
//!
//! ```rust
//! use burn::backend::{Autodiff, NdArray};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rnn_extrapolate::prelude::*;
//!
//! type Backend = Autodiff<NdArray<f64>>;
//! let device = Default::default();
//!
//! let series: Vec<f64> = (0..50).map(|i| (i as f64 * 0.2).sin()).collect();
//! let dataset = vec![TrainingPair::from_series(&series).unwrap()];
//!
//! let config = TrainingConfig::default().with_epochs(2).with_seed(7);
//! let model = ForecastRnn::<Backend>::new(&ModelConfig::default().with_hidden_size(8), &device);
//! let mut trainer = Trainer::new(model, momentum_sgd::<Backend>(&config), config).unwrap();
//!
//! let report = trainer.fit(&dataset).unwrap();
//! assert_eq!(report.epoch_losses.len(), 2);
//!
//! let forecast = trainer
//!     .forecast(&series, 30, &mut StdRng::seed_from_u64(1))
//!     .unwrap();
//! assert_eq!(forecast.len(), series.len() + 30);
//! ```
//!
//! ## Cell-level Usage
//!
//! For direct cell access (single timestep processing):
//!
//! ```ignore
//! use rnn_extrapolate::cells::{HiddenState, RnnCell, Sample};
//!
//! let cell = RnnCell::<Backend>::new(32, &device);
//! let (output, hidden) = cell.step(HiddenState::zeros(32, &device), Sample::from_value(0.1, &device));
//! ```

pub mod activation;
pub mod cells;
pub mod config;
pub mod error;
pub mod forcing;
pub mod rnn;
pub mod training;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::activation::Nonlinearity;
    pub use crate::cells::{HiddenState, LearnedInitialState, RnnCell, Sample};
    pub use crate::config::{ExtrapolationConfig, ModelConfig, TrainingConfig};
    pub use crate::error::ForecastError;
    pub use crate::forcing::{ForcingSource, ScriptedDraws, TeacherForcing};
    pub use crate::rnn::{ForecastRnn, ForwardPass};
    pub use crate::training::{momentum_sgd, Trainer, TrainingPair, TrainingReport};
}
