//! Integration tests for seaworthy-math.

use seaworthy_math::smoothing::{smooth_two_pass, windowed_average};
use seaworthy_math::{mix, smooth_step, RandomEngine, RunningAverage};

// ─── Easing Tests ─────────────────────────────────────────────

#[test]
fn smooth_step_edges() {
    assert_eq!(smooth_step(0.0, 200.0, -10.0), 0.0);
    assert_eq!(smooth_step(0.0, 200.0, 0.0), 0.0);
    assert_eq!(smooth_step(0.0, 200.0, 200.0), 1.0);
    assert_eq!(smooth_step(0.0, 200.0, 500.0), 1.0);
    assert!((smooth_step(0.0, 200.0, 100.0) - 0.5).abs() < 1e-6);
}

#[test]
fn mix_blends_linearly() {
    assert_eq!(mix(2.0, 4.0, 0.0), 2.0);
    assert_eq!(mix(2.0, 4.0, 1.0), 4.0);
    assert!((mix(2.0, 4.0, 0.25) - 2.5).abs() < 1e-6);
}

// ─── Smoothing Tests ──────────────────────────────────────────

#[test]
fn windowed_average_flat_is_identity() {
    let input = vec![3.0; 16];
    let mut output = vec![0.0; 16];
    windowed_average(&input, &mut output, 2);
    assert!(output.iter().all(|&v| (v - 3.0).abs() < 1e-6));
}

#[test]
fn windowed_average_spreads_impulse() {
    let mut input = vec![0.0; 9];
    input[4] = 5.0;
    let mut output = vec![0.0; 9];
    windowed_average(&input, &mut output, 2);
    // Window of 5 around the impulse
    for (i, &v) in output.iter().enumerate() {
        if (2..=6).contains(&i) {
            assert!((v - 1.0).abs() < 1e-6, "sample {} = {}", i, v);
        } else {
            assert_eq!(v, 0.0);
        }
    }
}

#[test]
fn two_pass_preserves_interior_mass() {
    let mut buffer = vec![0.0; 64];
    buffer[32] = 10.0;
    let mut scratch = vec![0.0; 64];
    smooth_two_pass(&mut buffer, &mut scratch, 3);
    let total: f32 = buffer.iter().sum();
    assert!((total - 10.0).abs() < 1e-4);
    // Peak stays at the impulse and is lower than the original
    let peak = buffer.iter().cloned().fold(f32::MIN, f32::max);
    assert_eq!(buffer[32], peak);
    assert!(peak < 10.0);
}

// ─── Running Average Tests ────────────────────────────────────

#[test]
fn running_average_converges() {
    let mut avg = RunningAverage::<4>::new(0.0);
    assert_eq!(avg.update(4.0), 1.0);
    assert_eq!(avg.update(4.0), 2.0);
    assert_eq!(avg.update(4.0), 3.0);
    assert_eq!(avg.update(4.0), 4.0);
    assert_eq!(avg.update(4.0), 4.0);
}

#[test]
fn running_average_reset() {
    let mut avg = RunningAverage::<8>::new(1.0);
    avg.update(100.0);
    avg.reset(2.0);
    assert_eq!(avg.average(), 2.0);
}

// ─── Random Engine Tests ──────────────────────────────────────

#[test]
fn seeded_engines_agree() {
    let mut a = RandomEngine::seeded(7);
    let mut b = RandomEngine::seeded(7);
    for _ in 0..32 {
        assert_eq!(a.unit(), b.unit());
    }
}

#[test]
fn uniform_stays_in_range() {
    let mut rng = RandomEngine::seeded(1);
    for _ in 0..1000 {
        let v = rng.uniform(-2.0, 3.0);
        assert!((-2.0..3.0).contains(&v));
    }
    assert_eq!(rng.uniform(5.0, 5.0), 5.0);
}

#[test]
fn exponential_mean_is_close() {
    let mut rng = RandomEngine::seeded(1234);
    let rate = 1.0 / 60.0;
    let n = 20_000;
    let mean: f32 = (0..n).map(|_| rng.exponential(rate)).sum::<f32>() / n as f32;
    assert!((mean - 60.0).abs() < 3.0, "mean = {}", mean);
}

#[test]
fn exponential_non_positive_rate_is_infinite() {
    let mut rng = RandomEngine::seeded(0);
    assert!(rng.exponential(0.0).is_infinite());
    assert!(rng.exponential(-1.0).is_infinite());
}
