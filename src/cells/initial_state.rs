//! Trainable hidden state at time zero

use super::HiddenState;
use burn::module::{Module, Param};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Learned initial hidden state.
///
/// A plain parameter vector of length `hidden_size`; the optimizer updates it
/// exactly like the cell's weights. Its shape never changes after construction.
#[derive(Module, Debug)]
pub struct LearnedInitialState<B: Backend> {
    state: Param<Tensor<B, 1>>,
}

impl<B: Backend> LearnedInitialState<B> {
    /// Create a zero-initialized state of the given size
    pub fn new(hidden_size: usize, device: &B::Device) -> Self {
        Self::from_tensor(Tensor::zeros([hidden_size], device))
    }

    /// Create a state seeded from explicit values
    pub fn from_tensor(tensor: Tensor<B, 1>) -> Self {
        Self {
            state: Param::from_tensor(tensor),
        }
    }

    /// Size of the state vector
    pub fn hidden_size(&self) -> usize {
        self.state.val().dims()[0]
    }

    /// Current value as a `[1, hidden_size]` hidden state.
    ///
    /// Returns a fresh value each call; the parameter itself is never
    /// modified by the recurrence.
    pub fn value(&self) -> HiddenState<B> {
        HiddenState::from_tensor(self.state.val().unsqueeze::<2>())
    }

    pub(crate) fn flat_parameters(&self) -> Vec<f64> {
        self.state.val().into_data().iter::<f64>().collect()
    }
}
