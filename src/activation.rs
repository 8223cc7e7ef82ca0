//! Activation functions for the recurrent update
//!
//! The hidden-state transition is `h' = f(W_ih·x + b_ih + W_hh·h + b_hh)`; this
//! module provides the choices for `f`.

use burn::tensor::{activation, backend::Backend, Tensor};
use serde::{Deserialize, Serialize};

/// Nonlinearity applied to the pre-activation of the recurrent update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nonlinearity {
    /// Hyperbolic tangent, the standard choice for a single-layer RNN
    #[default]
    Tanh,
    /// Rectified linear unit
    Relu,
    /// LeCun's scaled tanh: `1.7159 * tanh(0.666 * x)`
    LeCunTanh,
}

impl Nonlinearity {
    /// Applies the nonlinearity element-wise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use burn::backend::NdArray;
    /// use burn::tensor::Tensor;
    /// use rnn_extrapolate::activation::Nonlinearity;
    ///
    /// type Backend = NdArray<f64>;
    /// let device = Default::default();
    ///
    /// let x = Tensor::<Backend, 1>::from_floats([0.0, 1.0, -1.0], &device);
    /// let y = Nonlinearity::Tanh.apply(x);
    /// assert_eq!(y.dims(), [3]);
    /// ```
    pub fn apply<B: Backend, const D: usize>(&self, x: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Nonlinearity::Tanh => x.tanh(),
            Nonlinearity::Relu => activation::relu(x),
            Nonlinearity::LeCunTanh => (x * 0.666).tanh() * 1.7159,
        }
    }

    /// Scalar reference implementation, used for closed-form checks.
    pub fn apply_scalar(&self, x: f64) -> f64 {
        match self {
            Nonlinearity::Tanh => x.tanh(),
            Nonlinearity::Relu => x.max(0.0),
            Nonlinearity::LeCunTanh => 1.7159 * (0.666 * x).tanh(),
        }
    }
}
