//! Online SGD trainer

use super::TrainingPair;
use crate::config::TrainingConfig;
use crate::error::{ForecastError, Result};
use crate::forcing::ForcingSource;
use crate::rnn::ForecastRnn;
use burn::module::AutodiffModule;
use burn::optim::momentum::MomentumConfig;
use burn::optim::{GradientsParams, Optimizer, SgdConfig};
use burn::tensor::backend::AutodiffBackend;
use burn::tensor::ElementConversion;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// Plain SGD with classic momentum (no dampening, no Nesterov, no weight
/// decay) over every parameter of a [`ForecastRnn`].
pub fn momentum_sgd<B: AutodiffBackend>(
    config: &TrainingConfig,
) -> impl Optimizer<ForecastRnn<B>, B> {
    let momentum = MomentumConfig::new()
        .with_momentum(config.momentum)
        .with_dampening(0.0)
        .with_nesterov(false);

    SgdConfig::new()
        .with_momentum(Some(momentum))
        .init::<B, ForecastRnn<B>>()
}

/// Average loss of every completed epoch, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingReport {
    /// Mean per-example loss of each epoch.
    pub epoch_losses: Vec<f64>,
}

impl TrainingReport {
    /// Loss of the first epoch.
    pub fn first(&self) -> Option<f64> {
        self.epoch_losses.first().copied()
    }

    /// Loss of the last epoch.
    pub fn last(&self) -> Option<f64> {
        self.epoch_losses.last().copied()
    }

    /// Whether the last epoch ended below the first.
    pub fn improved(&self) -> bool {
        matches!((self.first(), self.last()), (Some(first), Some(last)) if last < first)
    }
}

/// Online trainer: one optimizer step per training example.
///
/// Owns the model for the duration of training; read it back with
/// [`model`](Self::model) or [`into_model`](Self::into_model).
///
/// # Type Parameters
/// * `B` - Autodiff backend
/// * `O` - Optimizer over [`ForecastRnn`]
pub struct Trainer<B: AutodiffBackend, O> {
    model: ForecastRnn<B>,
    optimizer: O,
    config: TrainingConfig,
    epochs_completed: usize,
}

impl<B, O> Trainer<B, O>
where
    B: AutodiffBackend,
    O: Optimizer<ForecastRnn<B>, B>,
{
    /// Create a trainer.
    ///
    /// # Errors
    /// Returns [`ForecastError::InvalidConfig`] if `config` does not validate.
    pub fn new(model: ForecastRnn<B>, optimizer: O, config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            model,
            optimizer,
            config,
            epochs_completed: 0,
        })
    }

    /// The model in its current state.
    pub fn model(&self) -> &ForecastRnn<B> {
        &self.model
    }

    /// Consume the trainer, keeping the trained model.
    pub fn into_model(self) -> ForecastRnn<B> {
        self.model
    }

    /// Training settings.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Number of epochs run so far.
    pub fn epochs_completed(&self) -> usize {
        self.epochs_completed
    }

    /// Run one epoch: a forward pass, backward pass and optimizer step per
    /// example, in dataset order.
    ///
    /// # Returns
    /// The mean loss over the epoch's examples
    ///
    /// # Errors
    /// [`ForecastError::EmptyDataset`] for an empty dataset, and
    /// [`ForecastError::NonFiniteLoss`] as soon as an example's loss is NaN or
    /// infinite. The offending update is not applied and the epoch is not
    /// counted.
    pub fn train_epoch<S: ForcingSource + ?Sized>(
        &mut self,
        dataset: &[TrainingPair],
        source: &mut S,
    ) -> Result<f64> {
        if dataset.is_empty() {
            return Err(ForecastError::EmptyDataset);
        }

        let epoch = self.epochs_completed;
        let mut total_loss = 0.0;

        for (example, pair) in dataset.iter().enumerate() {
            let loss = self.train_example(pair, source, epoch, example)?;
            debug!(epoch, example, loss, "example trained");
            total_loss += loss;
        }

        self.epochs_completed += 1;
        let average = total_loss / dataset.len() as f64;
        info!(epoch, average_loss = average, "epoch complete");

        Ok(average)
    }

    /// Run `config.epochs` epochs, drawing forcing decisions from `source`.
    pub fn fit_with<S: ForcingSource + ?Sized>(
        &mut self,
        dataset: &[TrainingPair],
        source: &mut S,
    ) -> Result<TrainingReport> {
        info!(
            epochs = self.config.epochs,
            examples = dataset.len(),
            hidden_size = self.model.hidden_size(),
            "starting training"
        );

        let mut report = TrainingReport::default();
        for _ in 0..self.config.epochs {
            report.epoch_losses.push(self.train_epoch(dataset, source)?);
        }

        info!(
            first_loss = report.first(),
            last_loss = report.last(),
            "training finished"
        );
        Ok(report)
    }

    /// Run `config.epochs` epochs using `config.seed` for the forcing coin
    /// flip, or the thread-local generator when no seed is set.
    pub fn fit(&mut self, dataset: &[TrainingPair]) -> Result<TrainingReport> {
        match self.config.seed {
            Some(seed) => self.fit_with(dataset, &mut StdRng::seed_from_u64(seed)),
            None => self.fit_with(dataset, &mut rand::rng()),
        }
    }

    /// Extrapolate `future_steps` values past `input` with the current
    /// parameters.
    ///
    /// Runs on the inference module, so no autodiff graph is recorded and the
    /// parameters are left untouched.
    pub fn forecast<S: ForcingSource + ?Sized>(
        &self,
        input: &[f64],
        future_steps: usize,
        source: &mut S,
    ) -> Result<Vec<f64>> {
        self.model
            .valid()
            .extrapolate(input, future_steps, self.config.teacher_forcing(), source)
    }

    fn train_example<S: ForcingSource + ?Sized>(
        &mut self,
        pair: &TrainingPair,
        source: &mut S,
        epoch: usize,
        example: usize,
    ) -> Result<f64> {
        let pass = self
            .model
            .forward(pair.input(), self.config.teacher_forcing(), source)?;
        let loss = self.model.mse(&pass, pair.target())?;
        let loss_value: f64 = loss.clone().into_scalar().elem();

        if !loss_value.is_finite() {
            warn!(epoch, example, loss = loss_value, "non-finite loss, halting");
            return Err(ForecastError::NonFiniteLoss {
                epoch,
                example,
                loss: loss_value,
            });
        }

        let grads = GradientsParams::from_grads(loss.backward(), &self.model);
        self.model = self
            .optimizer
            .step(self.config.learning_rate, self.model.clone(), grads);

        Ok(loss_value)
    }
}
