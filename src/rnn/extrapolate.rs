//! Autoregressive extrapolation
//!
//! After a training-mode pass over the observed prefix, the cell is rolled
//! forward on its own predictions:
//!
//! ```text
//! y_n   = last output of the pass,  h_n = final hidden state
//! y_n+1, h_n+1 = step(h_n, y_n)
//! y_n+2, h_n+2 = step(h_n+1, y_n+1)
//! ...
//! ```
//!
//! No ground truth is consulted during the rollout. [`extrapolate`] runs on a
//! copy of the parameters with gradient tracking disabled, so it records no
//! autodiff graph even on an autodiff backend. [`rollout`] uses the module it
//! is called on as-is.
//!
//! [`extrapolate`]: ForecastRnn::extrapolate
//! [`rollout`]: ForecastRnn::rollout

use super::ForecastRnn;
use crate::cells::{HiddenState, Sample};
use crate::error::Result;
use crate::forcing::{ForcingSource, TeacherForcing};
use burn::module::Module;
use burn::tensor::backend::Backend;

impl<B: Backend> ForecastRnn<B> {
    /// Feed each prediction back as the next input for `steps` iterations.
    ///
    /// # Arguments
    /// * `seed` - Value fed at the first rollout step
    /// * `hidden` - Hidden state to start from
    /// * `steps` - Number of values to generate
    ///
    /// # Returns
    /// The generated values and the hidden state after the last one
    pub fn rollout(
        &self,
        seed: Sample<B>,
        hidden: HiddenState<B>,
        steps: usize,
    ) -> (Vec<f64>, HiddenState<B>) {
        let mut predictions = Vec::with_capacity(steps);
        let mut last = seed;
        let mut hidden = hidden;

        for _ in 0..steps {
            let (output, next_hidden) = self.cell().step(hidden, last);
            predictions.push(output.value());
            last = output;
            hidden = next_hidden;
        }

        (predictions, hidden)
    }

    /// Forecast `future_steps` values past an observed sequence.
    ///
    /// The observed part of the result is the training-mode output of
    /// [`forward`](Self::forward) under `forcing`, so it mixes teacher-forced
    /// and self-fed steps exactly like training does.
    ///
    /// Gradient tracking is turned off for the whole call: both the pass and
    /// the rollout run on a `no_grad` copy of the module, and `self` keeps its
    /// own tracking unchanged.
    ///
    /// # Returns
    /// `input.len() + future_steps` values: the pass outputs followed by the
    /// rollout. With `future_steps == 0` this is just the pass outputs.
    pub fn extrapolate<S: ForcingSource + ?Sized>(
        &self,
        input: &[f64],
        future_steps: usize,
        forcing: TeacherForcing,
        source: &mut S,
    ) -> Result<Vec<f64>> {
        let detached = self.clone().no_grad();
        let pass = detached.forward(input, forcing, source)?;
        let seed = pass.last_output();
        let mut sequence = pass.to_vec();

        let (future, _) = detached.rollout(seed, pass.final_hidden, future_steps);
        sequence.extend(future);

        Ok(sequence)
    }
}
