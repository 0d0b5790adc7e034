//! Integration tests for seaworthy-bench.

use std::time::Duration;

use seaworthy_bench::config::ScenarioConfig;
use seaworthy_bench::metrics::BenchmarkMetrics;
use seaworthy_bench::runner::BenchmarkRunner;
use seaworthy_bench::scenarios::{Scenario, ScenarioKind};
use seaworthy_bench::world::{World, WorldClock};
use seaworthy_debug::{BreakageTally, TelemetryHook};
use seaworthy_material::MaterialDatabase;
use seaworthy_math::Vec2;
use seaworthy_ocean::WindState;
use seaworthy_structure::generators::raft;
use seaworthy_telemetry::VecSink;
use seaworthy_types::{SeaworthyError, SimulationParameters};

fn falling_raft_world() -> World {
    let materials = MaterialDatabase::with_defaults();
    let oak = materials.find("oak_wood").unwrap();
    // Bottom row one metre above the water
    let layer = raft(4, 2, oak).placed_at(Vec2::new(-1.5, 1.0), 1.0);
    World::build(
        &layer,
        &materials,
        SimulationParameters::calm(),
        WindState::calm(),
        9,
        WorldClock::lockstep(),
    )
    .unwrap()
}

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn calm_sea_setup() {
    let s = Scenario::calm_sea().unwrap();
    assert_eq!(s.kind, ScenarioKind::CalmSea);
    assert_eq!(s.layer.occupied_count(), 20);
    assert_eq!(s.params, SimulationParameters::calm());
    assert!(s.tsunami_at_step.is_none());
}

#[test]
fn tsunami_strike_forces_a_tsunami() {
    let s = Scenario::tsunami_strike().unwrap();
    assert_eq!(s.tsunami_at_step, Some(1));
}

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 4);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
        assert_eq!(Scenario::from_kind(kind).unwrap().kind, kind);
    }
    assert_eq!(ScenarioKind::from_name("whirlpool"), None);
}

// ─── World Tests ──────────────────────────────────────────────

#[test]
fn world_steps_advance_both_clocks() {
    let mut world = falling_raft_world();
    world.run(4);

    assert_eq!(world.timestep(), 4);
    assert!((world.sim_time() - 4.0 / 64.0).abs() < 1e-6);
    assert_eq!(world.wall_now(), Duration::from_millis(62) + Duration::from_micros(500));
}

#[test]
fn falling_ship_disturbs_the_ocean() {
    let mut world = falling_raft_world();
    let sink = VecSink::new();
    let log = sink.log();
    world.add_sink(Box::new(sink));

    world.run(120);

    assert!(log.count("ocean_disturbance") >= 1);
    let (lo, hi) = world.ocean().height_range();
    assert!(lo < 0.0 || hi > 0.0);
}

#[test]
fn hooks_see_every_step() {
    let mut world = falling_raft_world();
    world.add_hook(Box::new(TelemetryHook::new()));
    world.add_hook(Box::new(BreakageTally::default()));
    let outcomes = world.run(10);
    world.finish();

    assert_eq!(outcomes.len(), 10);
    assert!(outcomes.iter().all(|o| o.wall_time >= 0.0));
}

#[test]
fn invalid_params_are_rejected_and_kept() {
    let mut world = falling_raft_world();
    let bad = SimulationParameters {
        simulation_step_duration: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        world.set_params(bad),
        Err(SeaworthyError::InvalidConfig(_))
    ));
    assert_eq!(*world.params(), SimulationParameters::calm());
}

#[test]
fn snapshot_matches_world() {
    let mut world = falling_raft_world();
    world.run(3);
    let snap = world.snapshot();

    assert_eq!(snap.timestep, 3);
    assert_eq!(snap.point_count(), world.ship().points().count());
    assert_eq!(snap.ocean_samples.len(), world.ocean().samples().len());
    assert_eq!(snap.position(0), world.ship().points().positions()[0]);
}

#[test]
fn manual_waves_are_reported() {
    let mut world = falling_raft_world();
    let sink = VecSink::new();
    let log = sink.log();
    world.add_sink(Box::new(sink));

    world.trigger_rogue_wave();
    world.adjust_ocean_to(Vec2::new(100.0, 3.0), 0.0);
    world.step();

    assert_eq!(log.count("rogue_wave_triggered"), 1);
    assert!(world.ocean().interactive_waves().is_active());
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_calm_sea() {
    let scenario = Scenario::calm_sea().unwrap().with_timesteps(5);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(metrics.scenario, "calm_sea");
    assert_eq!(metrics.timesteps, 5);
    assert_eq!(metrics.point_count, 20);
    assert_eq!(metrics.broken_springs, 0);
    assert!(metrics.total_wall_time > 0.0);
    assert!(metrics.max_wave_height >= metrics.min_wave_height);
    assert!(metrics.final_centre_of_mass_y.is_finite());
}

#[test]
fn tsunami_strike_raises_waves() {
    let scenario = Scenario::tsunami_strike().unwrap().with_timesteps(64);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert!(metrics.max_wave_height > 1.0, "max wave {}", metrics.max_wave_height);
    assert!(metrics.events >= 1);
}

#[test]
fn overload_loads_the_deck() {
    let scenario = Scenario::overload_raft().unwrap();
    let world = BenchmarkRunner::prepare(&scenario).unwrap();
    let points = world.ship().points();

    let loaded = points
        .live()
        .filter(|&id| points.mass_augmentation(id) == scenario.deck_load)
        .count();
    assert_eq!(loaded, 8);
}

#[test]
fn run_all_scenarios_briefly() {
    for &kind in ScenarioKind::all() {
        let scenario = Scenario::from_kind(kind).unwrap().with_timesteps(3);
        let metrics = BenchmarkRunner::run(&scenario).unwrap();
        assert_eq!(metrics.scenario, kind.name());
        assert!(metrics.total_wall_time >= 0.0);
    }
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn config_applies_overrides() {
    let config = ScenarioConfig::from_toml_str(
        r#"
        scenario = "storm"
        steps = 40
        seed = 77

        [wind]
        base_speed = 25.0
        gust_speed = 40.0

        [parameters]
        tsunami_rate = 0
        basal_wave_height_adjustment = 2.0
        "#,
    )
    .unwrap();

    let scenario = config.to_scenario().unwrap();
    assert_eq!(scenario.kind, ScenarioKind::Storm);
    assert_eq!(scenario.timesteps, 40);
    assert_eq!(scenario.seed, 77);
    assert_eq!(scenario.wind.current_speed, 40.0);
    assert_eq!(scenario.params.tsunami_rate, 0.0);
    assert_eq!(scenario.params.basal_wave_height_adjustment, 2.0);
    // Untouched parameters keep the storm preset
    assert_eq!(
        scenario.params.rogue_wave_rate,
        SimulationParameters::stormy().rogue_wave_rate
    );
}

#[test]
fn minimal_config_uses_scenario_defaults() {
    let config = ScenarioConfig::from_toml_str("scenario = \"calm_sea\"").unwrap();
    let scenario = config.to_scenario().unwrap();
    assert_eq!(scenario.timesteps, Scenario::calm_sea().unwrap().timesteps);
    assert_eq!(scenario.wind, WindState::calm());
}

#[test]
fn config_errors_are_invalid_config() {
    let cases = [
        "scenario = \"whirlpool\"",
        "scenario = \"storm\"\nsteps = 0",
        "scenario = \"storm\"\n[parameters]\nspring_stifness_adjustment = 2.0",
        "scenario = \"storm\"\n[parameters]\nsimulation_step_duration = -1.0",
    ];
    for text in cases {
        let result = ScenarioConfig::from_toml_str(text).and_then(|c| c.to_scenario());
        assert!(
            matches!(result, Err(SeaworthyError::InvalidConfig(_))),
            "accepted: {text}"
        );
    }
}

// ─── Metrics Tests ────────────────────────────────────────────

fn sample_metrics(name: &str) -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: name.into(),
        total_wall_time: 1.5,
        timesteps: 100,
        avg_step_time: 0.015,
        min_step_time: 0.01,
        max_step_time: 0.02,
        point_count: 441,
        spring_count: 1600,
        triangle_count: 800,
        broken_springs: 3,
        stressed_springs: 7,
        destroyed_triangles: 4,
        min_wave_height: -0.5,
        max_wave_height: 1.25,
        final_centre_of_mass_y: -0.3,
        events: 12,
    }
}

#[test]
fn metrics_csv_output() {
    let csv_row = sample_metrics("test").to_csv_row();
    assert!(csv_row.starts_with("test,441,1600,800,100,"));
    assert!(csv_row.contains(",-0.500,1.250,"));
    assert_eq!(
        csv_row.split(',').count(),
        BenchmarkMetrics::to_csv_header().split(',').count()
    );
}

#[test]
fn metrics_csv_multi() {
    let csv = BenchmarkMetrics::to_csv(&[sample_metrics("a"), sample_metrics("b")]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("scenario"));
}

#[test]
fn metrics_json_round_trip() {
    let metrics = sample_metrics("test");
    let json = serde_json::to_string(&metrics).unwrap();
    let recovered: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, metrics);
}
