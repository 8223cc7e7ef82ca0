//! Tests for the training-mode pass and extrapolation

use burn::backend::NdArray;
use burn::nn::Initializer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rnn_extrapolate::prelude::*;

type Backend = NdArray<f64>;

fn model(hidden_size: usize) -> ForecastRnn<Backend> {
    let device = Default::default();
    ForecastRnn::new(&ModelConfig::default().with_hidden_size(hidden_size), &device)
}

fn sine(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i as f64 * 0.15).sin()).collect()
}

#[test]
fn test_output_length_matches_input() {
    let model = model(8);
    let mut rng = StdRng::seed_from_u64(3);

    for len in [1, 2, 17, 120] {
        let pass = model
            .forward(&sine(len), TeacherForcing::default(), &mut rng)
            .unwrap();
        assert_eq!(pass.len(), len);
    }
}

#[test]
fn test_same_seed_is_bit_identical() {
    let model = model(12);
    let input = sine(80);

    let first = model
        .forward(&input, TeacherForcing::default(), &mut StdRng::seed_from_u64(99))
        .unwrap()
        .to_vec();
    let second = model
        .forward(&input, TeacherForcing::default(), &mut StdRng::seed_from_u64(99))
        .unwrap()
        .to_vec();

    assert_eq!(first, second);
}

#[test]
fn test_full_forcing_ignores_draws() {
    let model = model(6);
    let input = sine(40);

    let low = model
        .forward(&input, TeacherForcing::always(), &mut ScriptedDraws::constant(0.0))
        .unwrap()
        .to_vec();
    let high = model
        .forward(&input, TeacherForcing::always(), &mut ScriptedDraws::constant(0.999))
        .unwrap()
        .to_vec();
    let seeded = model
        .forward(&input, TeacherForcing::always(), &mut StdRng::seed_from_u64(5))
        .unwrap()
        .to_vec();

    assert_eq!(low, high);
    assert_eq!(low, seeded);
}

#[test]
fn test_full_forcing_feeds_ground_truth() {
    let device = Default::default();
    let model = model(6);
    let input = sine(10);

    let pass = model
        .forward(&input, TeacherForcing::always(), &mut StdRng::seed_from_u64(0))
        .unwrap()
        .to_vec();

    let mut hidden = model.initial_state().value();
    for (i, &x) in input.iter().enumerate() {
        let (output, next) = model.cell().step(hidden, Sample::from_value(x, &device));
        assert!((output.value() - pass[i]).abs() < 1e-12);
        hidden = next;
    }
}

#[test]
fn test_mixed_draws_route_each_step() {
    let device = Default::default();
    let model = model(6);
    let input = vec![0.2, -0.4, 0.7, 0.5];
    // step 1: 0.1 < 0.5 ground truth, step 2: 0.9 self-fed, step 3: 0.2 ground truth
    let mut source = ScriptedDraws::new(vec![0.1, 0.9, 0.2]);

    let pass = model
        .forward(&input, TeacherForcing::new(0.5), &mut source)
        .unwrap()
        .to_vec();
    assert_eq!(source.consumed(), 3);

    let cell = model.cell();
    let hidden = model.initial_state().value();
    let (y0, hidden) = cell.step(hidden, Sample::from_value(input[0], &device));
    let (y1, hidden) = cell.step(hidden, Sample::from_value(input[1], &device));
    let (y2, hidden) = cell.step(hidden, y1.clone());
    let (y3, _) = cell.step(hidden, Sample::from_value(input[3], &device));

    let expected = [y0.value(), y1.value(), y2.value(), y3.value()];
    for (got, want) in pass.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "{got} != {want}");
    }

    // feeding input[2] at step 2 instead would change the tail
    let forced = model
        .forward(&input, TeacherForcing::always(), &mut ScriptedDraws::constant(0.0))
        .unwrap()
        .to_vec();
    assert_eq!(pass[..2], forced[..2]);
    assert!((pass[2] - forced[2]).abs() > 1e-9);
}

#[test]
fn test_no_forcing_ignores_ground_truth_after_first_step() {
    let model = model(6);
    let a = vec![0.4, 0.9, -0.3, 0.7, 0.1];
    let b = vec![0.4, -5.0, 2.0, 0.0, 9.0];

    let out_a = model
        .forward(&a, TeacherForcing::never(), &mut ScriptedDraws::constant(0.0))
        .unwrap()
        .to_vec();
    let out_b = model
        .forward(&b, TeacherForcing::never(), &mut StdRng::seed_from_u64(1))
        .unwrap()
        .to_vec();

    assert_eq!(out_a, out_b);
}

#[test]
fn test_no_forcing_equals_rollout() {
    let device = Default::default();
    let model = model(5);
    let input = [0.25, 0.0, 0.0, 0.0, 0.0, 0.0];

    let pass = model
        .forward(&input, TeacherForcing::never(), &mut ScriptedDraws::constant(0.0))
        .unwrap()
        .to_vec();

    // first step by hand, then the pure rollout must reproduce the rest
    let (first, hidden) = model
        .cell()
        .step(model.initial_state().value(), Sample::from_value(0.25, &device));
    let first_value = first.value();
    let (rest, _) = model.rollout(first, hidden, input.len() - 1);

    assert_eq!(pass[0], first_value);
    for (got, want) in pass[1..].iter().zip(&rest) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn test_zero_weights_closed_form() {
    let device = Default::default();
    let model = ForecastRnn::<Backend>::with_initializer(
        &ModelConfig::default().with_hidden_size(4),
        Initializer::Zeros,
        &device,
    );

    let pass = model
        .forward(&[0.0, 0.1, 0.2, 0.1, 0.0], TeacherForcing::always(), &mut StdRng::seed_from_u64(2))
        .unwrap();

    // readout of any hidden state is W_out·h + b_out = 0
    assert_eq!(pass.to_vec(), vec![0.0; 5]);
    assert_eq!(pass.final_hidden.to_vec(), vec![0.0; 4]);
}

#[test]
fn test_constant_weights_closed_form() {
    let device = Default::default();
    let c = 0.1;
    let hidden_size = 4;
    let model = ForecastRnn::<Backend>::with_initializer(
        &ModelConfig::default().with_hidden_size(hidden_size),
        Initializer::Constant { value: c },
        &device,
    );
    let input = [0.0, 0.1, 0.2, 0.1, 0.0];

    let pass = model
        .forward(&input, TeacherForcing::always(), &mut ScriptedDraws::constant(0.5))
        .unwrap()
        .to_vec();

    // all units share one value since every weight equals c
    let n = hidden_size as f64;
    let mut h = 0.0f64;
    for (i, &x) in input.iter().enumerate() {
        h = (c * x + c + n * c * h + c).tanh();
        let expected = n * c * h + c;
        assert!(
            (pass[i] - expected).abs() < 1e-12,
            "step {}: got {}, expected {}",
            i,
            pass[i],
            expected
        );
    }
}

#[test]
fn test_extrapolate_length_invariant() {
    let model = model(8);
    let input = sine(30);

    for future_steps in [0, 1, 10, 150] {
        let forecast = model
            .extrapolate(&input, future_steps, TeacherForcing::default(), &mut StdRng::seed_from_u64(4))
            .unwrap();
        assert_eq!(forecast.len(), input.len() + future_steps);
    }
}

#[test]
fn test_extrapolate_zero_steps_returns_pass() {
    let model = model(8);
    let input = sine(30);

    let pass = model
        .forward(&input, TeacherForcing::default(), &mut StdRng::seed_from_u64(8))
        .unwrap()
        .to_vec();
    let forecast = model
        .extrapolate(&input, 0, TeacherForcing::default(), &mut StdRng::seed_from_u64(8))
        .unwrap();

    assert_eq!(forecast, pass);
}

#[test]
fn test_extrapolate_prefix_matches_pass() {
    let model = model(8);
    let input = sine(25);

    let pass = model
        .forward(&input, TeacherForcing::default(), &mut StdRng::seed_from_u64(21))
        .unwrap()
        .to_vec();
    let forecast = model
        .extrapolate(&input, 40, TeacherForcing::default(), &mut StdRng::seed_from_u64(21))
        .unwrap();

    assert_eq!(&forecast[..input.len()], pass.as_slice());
}

#[test]
fn test_extrapolate_does_not_mutate_parameters() {
    let model = model(8);
    let before = model.flat_parameters();

    model
        .extrapolate(&sine(50), 60, TeacherForcing::default(), &mut StdRng::seed_from_u64(6))
        .unwrap();

    assert_eq!(model.flat_parameters(), before);
}

#[test]
fn test_empty_input_rejected() {
    let model = model(4);
    let result = model.extrapolate(&[], 5, TeacherForcing::default(), &mut StdRng::seed_from_u64(0));

    assert!(matches!(result, Err(ForecastError::EmptySequence)));
}
