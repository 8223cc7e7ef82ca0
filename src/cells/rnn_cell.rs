//! Single-layer recurrent cell
//!
//! The elementary state transition used by every forward pass and rollout:
//!
//! ```text
//! h' = f(W_ih · x + b_ih + W_hh · h + b_hh)
//! y  = W_out · h' + b_out
//! ```
//!
//! The readout is applied to the *new* hidden state. The cell carries no
//! state between calls; the hidden state is threaded through by the caller.

use crate::activation::Nonlinearity;
use burn::module::{Ignored, Module};
use burn::nn::{Initializer, Linear, LinearConfig};
use burn::tensor::backend::Backend;
use burn::tensor::{ElementConversion, Tensor, TensorData};

/// One scalar observation or prediction, kept as a `[1, 1]` tensor so that
/// gradients flow through values fed back into the cell.
#[derive(Debug, Clone)]
pub struct Sample<B: Backend>(Tensor<B, 2>);

impl<B: Backend> Sample<B> {
    /// Wrap a plain value.
    pub fn from_value(value: f64, device: &B::Device) -> Self {
        Self(Tensor::from_data(TensorData::new(vec![value], [1, 1]), device))
    }

    /// Wrap an existing `[1, 1]` tensor.
    pub fn from_tensor(tensor: Tensor<B, 2>) -> Self {
        assert_eq!(tensor.dims(), [1, 1], "a sample must be a [1, 1] tensor");
        Self(tensor)
    }

    /// Read the scalar back.
    pub fn value(&self) -> f64 {
        self.0.clone().into_scalar().elem()
    }

    /// Borrow the underlying tensor.
    pub fn tensor(&self) -> &Tensor<B, 2> {
        &self.0
    }

    /// Unwrap the underlying tensor.
    pub fn into_tensor(self) -> Tensor<B, 2> {
        self.0
    }
}

/// Hidden state of the recurrence, shape `[1, hidden_size]`.
///
/// Each step produces a new value; nothing is updated in place.
#[derive(Debug, Clone)]
pub struct HiddenState<B: Backend>(Tensor<B, 2>);

impl<B: Backend> HiddenState<B> {
    /// Wrap an existing `[1, hidden_size]` tensor.
    pub fn from_tensor(tensor: Tensor<B, 2>) -> Self {
        assert_eq!(tensor.dims()[0], 1, "hidden state must hold a single row");
        Self(tensor)
    }

    /// An all-zero hidden state.
    pub fn zeros(hidden_size: usize, device: &B::Device) -> Self {
        Self(Tensor::zeros([1, hidden_size], device))
    }

    /// Dimension of the state vector.
    pub fn size(&self) -> usize {
        self.0.dims()[1]
    }

    /// Borrow the underlying tensor.
    pub fn tensor(&self) -> &Tensor<B, 2> {
        &self.0
    }

    /// Unwrap the underlying tensor.
    pub fn into_tensor(self) -> Tensor<B, 2> {
        self.0
    }

    /// Copy the state out as plain values.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_data().iter::<f64>().collect()
    }
}

/// Elman recurrent cell with a scalar input and a scalar linear readout.
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct RnnCell<B: Backend> {
    #[module(skip)]
    hidden_size: usize,
    nonlinearity: Ignored<Nonlinearity>,
    input_map: Linear<B>,     // W_ih, b_ih: 1 -> hidden_size
    recurrent_map: Linear<B>, // W_hh, b_hh: hidden_size -> hidden_size
    readout: Linear<B>,       // W_out, b_out: hidden_size -> 1
}

impl<B: Backend> RnnCell<B> {
    /// Create a new cell with Burn's default initialization
    ///
    /// # Arguments
    /// * `hidden_size` - Size of the hidden state
    /// * `device` - Device to create the module on
    pub fn new(hidden_size: usize, device: &B::Device) -> Self {
        let input_map = LinearConfig::new(1, hidden_size).with_bias(true).init(device);
        let recurrent_map = LinearConfig::new(hidden_size, hidden_size)
            .with_bias(true)
            .init(device);
        let readout = LinearConfig::new(hidden_size, 1).with_bias(true).init(device);

        Self {
            hidden_size,
            nonlinearity: Ignored(Nonlinearity::default()),
            input_map,
            recurrent_map,
            readout,
        }
    }

    /// Create a new cell whose weights and biases all use `initializer`
    pub fn with_initializer(
        hidden_size: usize,
        initializer: Initializer,
        device: &B::Device,
    ) -> Self {
        let linear = |d_input: usize, d_output: usize| {
            LinearConfig::new(d_input, d_output)
                .with_bias(true)
                .with_initializer(initializer.clone())
                .init(device)
        };

        Self {
            hidden_size,
            nonlinearity: Ignored(Nonlinearity::default()),
            input_map: linear(1, hidden_size),
            recurrent_map: linear(hidden_size, hidden_size),
            readout: linear(hidden_size, 1),
        }
    }

    /// Set the nonlinearity of the recurrent update
    pub fn with_nonlinearity(mut self, nonlinearity: Nonlinearity) -> Self {
        self.nonlinearity = Ignored(nonlinearity);
        self
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Get the nonlinearity
    pub fn nonlinearity(&self) -> Nonlinearity {
        self.nonlinearity.0
    }

    /// Advance the recurrence by one time step.
    ///
    /// # Arguments
    /// * `hidden` - Previous hidden state, `[1, hidden_size]`
    /// * `input` - Scalar input for this step
    ///
    /// # Returns
    /// Tuple of (output, next_hidden)
    ///
    /// # Panics
    /// Panics if `hidden` does not match the cell's hidden size.
    pub fn step(&self, hidden: HiddenState<B>, input: Sample<B>) -> (Sample<B>, HiddenState<B>) {
        assert_eq!(
            hidden.size(),
            self.hidden_size,
            "hidden state dimension does not match the cell"
        );

        let pre_activation = self.input_map.forward(input.into_tensor())
            + self.recurrent_map.forward(hidden.into_tensor());
        let next_hidden = self.nonlinearity.0.apply(pre_activation);
        let output = self.readout.forward(next_hidden.clone());

        (Sample(output), HiddenState(next_hidden))
    }

    /// All weights and biases flattened, in the order
    /// `W_ih, b_ih, W_hh, b_hh, W_out, b_out`.
    pub(crate) fn flat_parameters(&self) -> Vec<f64> {
        let mut values = Vec::new();
        for linear in [&self.input_map, &self.recurrent_map, &self.readout] {
            values.extend(linear.weight.val().into_data().iter::<f64>());
            if let Some(ref bias) = linear.bias {
                values.extend(bias.val().into_data().iter::<f64>());
            }
        }
        values
    }
}
