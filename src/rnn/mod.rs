//! # Sequence Processing and Extrapolation
//!
//! [`ForecastRnn`] owns the full parameter set and drives the
//! [`RnnCell`](crate::cells::RnnCell) over whole sequences in two modes.
//!
//! | Mode | Method | Inputs after step 0 | Graph |
//! |------|--------|---------------------|-------|
//! | Training | [`ForecastRnn::forward`] | ground truth or own prediction (coin flip) | kept on autodiff backends |
//! | Extrapolation | [`ForecastRnn::extrapolate`] | own prediction only, past the observed prefix | run on `model.valid()` |
//!
//! ## Training-mode Pass
//!
//! ```text
//! h_0 = learned initial state
//! for i in 0..n:
//!     x_i = input[i]            if i == 0 or u_i < p
//!         = y_{i-1}             otherwise
//!     y_i, h_{i+1} = step(h_i, x_i)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use burn::backend::NdArray;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rnn_extrapolate::prelude::*;
//!
//! type Backend = NdArray<f64>;
//! let device = Default::default();
//!
//! let model = ForecastRnn::<Backend>::new(&ModelConfig::default(), &device);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let observed = [0.0, 0.1, 0.2, 0.1, 0.0];
//! let forecast = model
//!     .extrapolate(&observed, 10, TeacherForcing::default(), &mut rng)
//!     .unwrap();
//! assert_eq!(forecast.len(), 15);
//! ```

mod extrapolate;
pub mod forecast;

pub use forecast::{ForecastRnn, ForwardPass};
