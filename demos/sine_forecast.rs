//! Sine Forecast Demo
//!
//! Trains the forecaster on a handful of noisy sine sequences, then
//! extrapolates past a fresh sequence and prints `index,value` lines that a
//! plotting tool can consume directly.
//!
//! Run with `RUST_LOG=info cargo run --example sine_forecast`.

use burn::backend::{Autodiff, NdArray};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rnn_extrapolate::prelude::*;
use tracing_subscriber::EnvFilter;

type Backend = Autodiff<NdArray<f64>>;

const NOISE_STD: f64 = 0.02;
const STEP: f64 = 0.05;

/// One sine sequence with a random domain length and Gaussian noise.
fn noisy_sine<R: Rng>(rng: &mut R, noise: &Normal<f64>) -> Vec<f64> {
    let len: usize = rng.random_range(400..=500);
    (0..len)
        .map(|i| (i as f64 * STEP).sin() + noise.sample(rng))
        .collect()
}

fn main() -> Result<(), ForecastError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let model_config = ModelConfig::default().with_hidden_size(32);
    let training_config = TrainingConfig::default()
        .with_epochs(30)
        .with_learning_rate(0.005)
        .with_momentum(0.9)
        .with_seed(42);
    let extrapolation = ExtrapolationConfig::default();
    model_config.validate()?;

    let mut data_rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, NOISE_STD).expect("valid noise scale");

    let dataset = (0..10)
        .map(|_| TrainingPair::from_series(&noisy_sine(&mut data_rng, &noise)))
        .collect::<Result<Vec<_>, _>>()?;

    let device = Default::default();
    let model = ForecastRnn::<Backend>::new(&model_config, &device);
    let optimizer = momentum_sgd::<Backend>(&training_config);
    let mut trainer = Trainer::new(model, optimizer, training_config)?;

    let report = trainer.fit(&dataset)?;
    eprintln!(
        "loss: first epoch {:.6}, last epoch {:.6}",
        report.first().unwrap_or(f64::NAN),
        report.last().unwrap_or(f64::NAN)
    );

    let observed = noisy_sine(&mut data_rng, &noise);
    let forecast = trainer.forecast(
        &observed,
        extrapolation.future_steps,
        &mut StdRng::seed_from_u64(1),
    )?;

    println!("index,value");
    for (index, value) in forecast.iter().enumerate() {
        println!("{},{}", index, value);
    }

    Ok(())
}
