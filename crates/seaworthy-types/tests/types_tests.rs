//! Integration tests for seaworthy-types.

use std::time::Duration;

use seaworthy_types::parameters::{MAX_GRAVITY, MAX_SIMULATION_STEP};
use seaworthy_types::surface::FlatSea;
use seaworthy_types::{
    ManualWallClock, MaterialId, PointId, SeaSurface, SeaworthyError, SimulationParameters,
    SpringId, TriangleId, WallClock,
};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn point_id_index() {
    let id = PointId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn spring_and_triangle_id_index() {
    assert_eq!(SpringId(7).index(), 7);
    assert_eq!(TriangleId(3).index(), 3);
    assert_eq!(MaterialId(2).index(), 2);
}

#[test]
fn ids_are_serializable() {
    let id = SpringId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: SpringId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ───────────────────────────────────────────────

#[test]
fn error_display() {
    let err = SeaworthyError::InvalidConfig("tsunami_rate is NaN".into());
    assert_eq!(err.to_string(), "Invalid configuration: tsunami_rate is NaN");
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: SeaworthyError = io.into();
    assert!(matches!(err, SeaworthyError::Io(_)));
}

// ─── Clock Tests ───────────────────────────────────────────────

#[test]
fn manual_clock_advances() {
    let mut clock = ManualWallClock::new();
    assert_eq!(clock.now(), Duration::ZERO);
    clock.advance(Duration::from_secs(3));
    clock.advance(Duration::from_millis(500));
    assert_eq!(clock.now(), Duration::from_millis(3500));
    clock.set(Duration::from_secs(1));
    assert_eq!(clock.now(), Duration::from_secs(1));
}

#[test]
fn manual_clock_saturates() {
    let mut clock = ManualWallClock::new();
    clock.set(Duration::MAX);
    clock.advance(Duration::from_secs(1));
    assert_eq!(clock.now(), Duration::MAX);
}

#[test]
fn flat_sea_is_flat() {
    let sea = FlatSea(1.5);
    assert_eq!(sea.height_at(-100.0), 1.5);
    assert_eq!(sea.height_at(2000.0), 1.5);
}

// ─── Parameter Tests ───────────────────────────────────────────

#[test]
fn default_parameters_are_valid() {
    SimulationParameters::default().validate().unwrap();
    SimulationParameters::calm().validate().unwrap();
    SimulationParameters::stormy().validate().unwrap();
}

#[test]
fn default_mechanical_dt() {
    let params = SimulationParameters::default();
    let expected = (1.0 / 64.0) / 24.0;
    assert!((params.mechanical_dt() - expected).abs() < 1e-9);
}

#[test]
fn calm_disables_abnormal_waves() {
    let params = SimulationParameters::calm();
    assert_eq!(params.tsunami_rate, 0.0);
    assert_eq!(params.rogue_wave_rate, 0.0);
    assert_eq!(params.basal_wave_height_adjustment, 0.0);
}

#[test]
fn invalid_parameters_rejected() {
    let params = SimulationParameters {
        num_mechanical_dynamics_iterations: 0,
        ..Default::default()
    };
    assert!(matches!(
        params.validate(),
        Err(SeaworthyError::InvalidConfig(_))
    ));

    let params = SimulationParameters {
        wave_smoothness_adjustment: 1.5,
        ..Default::default()
    };
    assert!(params.validate().is_err());

    let params = SimulationParameters {
        tsunami_rate: f32::NAN,
        ..Default::default()
    };
    assert!(params.validate().is_err());
}

#[test]
fn step_and_gravity_are_bounded() {
    let params = SimulationParameters {
        simulation_step_duration: MAX_SIMULATION_STEP,
        gravity: MAX_GRAVITY,
        ..Default::default()
    };
    assert!(params.validate().is_ok());

    let params = SimulationParameters {
        gravity: MAX_GRAVITY * 2.0,
        ..Default::default()
    };
    assert!(params.validate().is_err());

    let params = SimulationParameters {
        simulation_step_duration: MAX_SIMULATION_STEP * 2.0,
        ..Default::default()
    };
    assert!(params.validate().is_err());
}

#[test]
fn negative_rate_is_valid() {
    let params = SimulationParameters {
        rogue_wave_rate: -1.0,
        ..Default::default()
    };
    assert!(params.validate().is_ok());
}

#[test]
fn parameters_toml_roundtrip() {
    let params = SimulationParameters::stormy();
    let text = toml::to_string(&params).unwrap();
    let recovered: SimulationParameters = toml::from_str(&text).unwrap();
    assert_eq!(recovered, params);
}

#[test]
fn partial_toml_fills_defaults() {
    let params: SimulationParameters = toml::from_str("tsunami_rate = 1.0").unwrap();
    assert_eq!(params.tsunami_rate, 1.0);
    assert_eq!(params.num_mechanical_dynamics_iterations, 24);
}
