//! # Online Training
//!
//! One SGD-with-momentum update per training example, every epoch:
//!
//! 1. Training-mode forward pass (scheduled sampling)
//! 2. Mean squared error against the shifted target
//! 3. Backpropagation through time (fresh gradients per example)
//! 4. Optimizer step on every parameter, including the learned initial state
//!
//! The per-epoch average loss is reported for monitoring only.

pub mod data;
pub mod trainer;

pub use data::TrainingPair;
pub use trainer::{momentum_sgd, Trainer, TrainingReport};
