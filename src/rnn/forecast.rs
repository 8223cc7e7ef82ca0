//! Forecasting RNN: parameter set and training-mode forward pass
//!
//! Drives an [`RnnCell`] over an observed sequence starting from the
//! [`LearnedInitialState`], mixing ground truth and self-generated inputs
//! according to a [`TeacherForcing`] policy.

use crate::activation::Nonlinearity;
use crate::cells::{HiddenState, LearnedInitialState, RnnCell, Sample};
use crate::config::ModelConfig;
use crate::error::{ForecastError, Result};
use crate::forcing::{ForcingSource, TeacherForcing};
use burn::module::Module;
use burn::nn::loss::{MseLoss, Reduction};
use burn::nn::Initializer;
use burn::tensor::backend::Backend;
use burn::tensor::{ElementConversion, Tensor, TensorData};

/// Single-layer recurrent forecaster.
///
/// Holds every trainable parameter: the cell's input, recurrent and readout
/// maps plus the learned initial hidden state.
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct ForecastRnn<B: Backend> {
    /// The recurrent cell for individual timesteps
    cell: RnnCell<B>,
    /// Hidden state at time zero
    initial_state: LearnedInitialState<B>,
}

/// Result of a training-mode forward pass.
#[derive(Debug, Clone)]
pub struct ForwardPass<B: Backend> {
    /// Per-step outputs, shape `[seq_len]`
    pub outputs: Tensor<B, 1>,
    /// Hidden state after the last step
    pub final_hidden: HiddenState<B>,
}

impl<B: Backend> ForwardPass<B> {
    /// Number of steps in the pass
    pub fn len(&self) -> usize {
        self.outputs.dims()[0]
    }

    /// Always false: empty sequences are rejected before a pass is built
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Outputs as plain values
    pub fn to_vec(&self) -> Vec<f64> {
        self.outputs.to_data().iter::<f64>().collect()
    }

    /// The last prediction, still attached to the graph
    pub fn last_output(&self) -> Sample<B> {
        let len = self.len();
        Sample::from_tensor(self.outputs.clone().narrow(0, len - 1, 1).reshape([1, 1]))
    }
}

impl<B: Backend> ForecastRnn<B> {
    /// Create a new forecaster
    ///
    /// # Arguments
    /// * `config` - Model configuration (hidden size, nonlinearity)
    /// * `device` - Device to create the module on
    ///
    /// # Panics
    /// Panics if `config` does not validate (e.g. `hidden_size == 0`).
    pub fn new(config: &ModelConfig, device: &B::Device) -> Self {
        expect_valid(config);
        let cell = RnnCell::new(config.hidden_size, device).with_nonlinearity(config.nonlinearity);

        Self {
            cell,
            initial_state: LearnedInitialState::new(config.hidden_size, device),
        }
    }

    /// Create a forecaster whose cell weights all use `initializer`.
    ///
    /// The initial hidden state still starts at zero.
    ///
    /// # Panics
    /// Panics if `config` does not validate.
    pub fn with_initializer(
        config: &ModelConfig,
        initializer: Initializer,
        device: &B::Device,
    ) -> Self {
        expect_valid(config);
        let cell = RnnCell::with_initializer(config.hidden_size, initializer, device)
            .with_nonlinearity(config.nonlinearity);

        Self {
            cell,
            initial_state: LearnedInitialState::new(config.hidden_size, device),
        }
    }

    /// Assemble a forecaster from existing parts.
    ///
    /// # Panics
    /// Panics if the two parts disagree on the hidden size.
    pub fn from_parts(cell: RnnCell<B>, initial_state: LearnedInitialState<B>) -> Self {
        assert_eq!(
            cell.hidden_size(),
            initial_state.hidden_size(),
            "initial state must match the cell's hidden size"
        );
        Self {
            cell,
            initial_state,
        }
    }

    /// Get hidden size
    pub fn hidden_size(&self) -> usize {
        self.cell.hidden_size()
    }

    /// Get the cell's nonlinearity
    pub fn nonlinearity(&self) -> Nonlinearity {
        self.cell.nonlinearity()
    }

    /// The recurrent cell
    pub fn cell(&self) -> &RnnCell<B> {
        &self.cell
    }

    /// The learned initial hidden state
    pub fn initial_state(&self) -> &LearnedInitialState<B> {
        &self.initial_state
    }

    /// Every parameter value flattened: cell weights first, then the
    /// initial state.
    pub fn flat_parameters(&self) -> Vec<f64> {
        let mut values = self.cell.flat_parameters();
        values.extend(self.initial_state.flat_parameters());
        values
    }

    pub(crate) fn device(&self) -> B::Device {
        self.initial_state.value().tensor().device()
    }

    /// Training-mode forward pass over an observed sequence.
    ///
    /// Step 0 always consumes `input[0]`. Every later step draws once from
    /// `source`; on `u < p` it consumes `input[i]`, otherwise the previous
    /// step's output, which stays on the autodiff graph.
    ///
    /// # Arguments
    /// * `input` - Observed values, at least one
    /// * `forcing` - Teacher forcing policy
    /// * `source` - Uniform draws for the forcing coin flip
    ///
    /// # Returns
    /// The per-step outputs (same length as `input`) and the last hidden state
    pub fn forward<S: ForcingSource + ?Sized>(
        &self,
        input: &[f64],
        forcing: TeacherForcing,
        source: &mut S,
    ) -> Result<ForwardPass<B>> {
        if input.is_empty() {
            return Err(ForecastError::EmptySequence);
        }

        let device = self.device();
        let seq_len = input.len();
        let observed =
            Tensor::<B, 2>::from_data(TensorData::new(input.to_vec(), [seq_len, 1]), &device);

        let mut hidden = self.initial_state.value();
        let mut outputs: Vec<Tensor<B, 2>> = Vec::with_capacity(seq_len);

        for t in 0..seq_len {
            let step_input = match outputs.last() {
                Some(previous) if !forcing.uses_ground_truth(t, source) => {
                    Sample::from_tensor(previous.clone())
                }
                _ => Sample::from_tensor(observed.clone().narrow(0, t, 1)),
            };

            let (output, next_hidden) = self.cell.step(hidden, step_input);
            hidden = next_hidden;
            outputs.push(output.into_tensor());
        }

        let outputs = Tensor::cat(outputs, 0).reshape([seq_len]);
        Ok(ForwardPass {
            outputs,
            final_hidden: hidden,
        })
    }

    /// Mean squared error of a pass against the shifted target sequence.
    pub fn mse(&self, pass: &ForwardPass<B>, target: &[f64]) -> Result<Tensor<B, 1>> {
        if pass.len() != target.len() {
            return Err(ForecastError::LengthMismatch {
                input: pass.len(),
                target: target.len(),
            });
        }
        let target =
            Tensor::<B, 1>::from_data(TensorData::new(target.to_vec(), [target.len()]), &self.device());
        Ok(MseLoss::new().forward(pass.outputs.clone(), target, Reduction::Mean))
    }

    /// Plain-value MSE, for monitoring.
    pub fn mse_value(&self, pass: &ForwardPass<B>, target: &[f64]) -> Result<f64> {
        Ok(self.mse(pass, target)?.into_scalar().elem())
    }
}

fn expect_valid(config: &ModelConfig) {
    if let Err(err) = config.validate() {
        panic!("{err}");
    }
}
