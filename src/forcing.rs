//! Scheduled sampling (teacher forcing) policy
//!
//! During a training-mode pass every step after the first flips a biased coin:
//! on success the ground-truth observation is fed to the cell, otherwise the
//! model's own previous prediction is fed back.
//!
//! ```text
//! step 0      : ground truth, no draw
//! step i > 0  : u ~ U[0, 1);  u < p  → ground truth
//!                             u >= p → previous prediction
//! ```
//!
//! The random source is an explicit dependency ([`ForcingSource`]) so callers
//! decide whether runs are reproducible.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability used when the caller does not choose one.
pub const DEFAULT_TEACHER_FORCE_PROB: f64 = 0.5;

/// A source of uniform draws in `[0, 1)` for the forcing coin flip.
pub trait ForcingSource {
    /// Draw the next uniform value.
    fn draw(&mut self) -> f64;
}

impl<R: Rng> ForcingSource for R {
    fn draw(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around when exhausted.
///
/// Useful to script exactly which steps are teacher-forced.
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedDraws {
    /// Create a scripted source.
    ///
    /// # Panics
    /// Panics if `draws` is empty.
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "ScriptedDraws needs at least one draw");
        Self { draws, cursor: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl ForcingSource for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}

/// Teacher forcing decision policy.
///
/// The comparison is strict (`u < p`), so `p = 0` never forces and `p = 1`
/// always forces. Probabilities outside `[0, 1]` are accepted and behave like
/// the nearest extreme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeacherForcing {
    probability: f64,
}

impl Default for TeacherForcing {
    fn default() -> Self {
        Self::new(DEFAULT_TEACHER_FORCE_PROB)
    }
}

impl TeacherForcing {
    /// Create a policy with the given forcing probability.
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    /// Always feed ground truth (classic teacher forcing).
    pub fn always() -> Self {
        Self::new(1.0)
    }

    /// Always feed the model's own predictions.
    pub fn never() -> Self {
        Self::new(0.0)
    }

    /// The configured probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Decide whether `step` consumes the ground-truth observation.
    ///
    /// Step 0 has no previous prediction and never consumes a draw.
    pub fn uses_ground_truth<S: ForcingSource + ?Sized>(&self, step: usize, source: &mut S) -> bool {
        step == 0 || source.draw() < self.probability
    }
}
