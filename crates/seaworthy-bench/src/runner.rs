//! Benchmark runner: executes scenarios in a world and collects metrics.

use std::time::Instant;

use seaworthy_telemetry::EventSink;
use seaworthy_types::SeaworthyResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};
use crate::world::{World, WorldClock};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Builds the world for a scenario, deck load applied.
    ///
    /// Worlds are lockstepped so runs are reproducible.
    pub fn prepare(scenario: &Scenario) -> SeaworthyResult<World> {
        let mut world = World::build(
            &scenario.layer,
            &scenario.materials,
            scenario.params.clone(),
            scenario.wind,
            scenario.seed,
            WorldClock::lockstep(),
        )?;

        if scenario.deck_load > 0.0 {
            let points = world.ship_mut().points_mut();
            let deck_y = points
                .live()
                .map(|id| points.position(id).y)
                .fold(f32::NEG_INFINITY, f32::max);
            let deck: Vec<_> = points
                .live()
                .filter(|&id| points.position(id).y >= deck_y - 1e-3)
                .collect();
            for &id in &deck {
                points.set_mass_augmentation(id, scenario.deck_load);
            }
            tracing::debug!(points = deck.len(), load = scenario.deck_load, "deck loaded");
        }

        Ok(world)
    }

    /// Run a single scenario.
    pub fn run(scenario: &Scenario) -> SeaworthyResult<BenchmarkMetrics> {
        Self::run_with_sinks(scenario, Vec::new())
    }

    /// Run a single scenario, delivering its events to `sinks`.
    pub fn run_with_sinks(
        scenario: &Scenario,
        sinks: Vec<Box<dyn EventSink>>,
    ) -> SeaworthyResult<BenchmarkMetrics> {
        let mut world = Self::prepare(scenario)?;
        for sink in sinks {
            world.add_sink(sink);
        }

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut events = 0;
        let (mut min_wave, mut max_wave) = world.ocean().height_range();

        let total_start = Instant::now();

        for step in 0..scenario.timesteps {
            if scenario.tsunami_at_step == Some(step) {
                world.trigger_tsunami();
            }
            let outcome = world.step();
            step_times.push(outcome.wall_time);
            events += outcome.events;

            let (lo, hi) = world.ocean().height_range();
            min_wave = min_wave.min(lo);
            max_wave = max_wave.max(hi);
        }

        world.finish();
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        let ship = world.ship();
        let metrics = BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            timesteps: scenario.timesteps,
            avg_step_time: avg_step,
            min_step_time: if step_times.is_empty() { 0.0 } else { min_step },
            max_step_time: max_step,
            point_count: ship.points().count(),
            spring_count: ship.springs().count(),
            triangle_count: ship.triangles().count(),
            broken_springs: ship.broken_spring_count(),
            stressed_springs: ship.stressed_spring_count(),
            destroyed_triangles: ship.destroyed_triangle_count(),
            min_wave_height: min_wave,
            max_wave_height: max_wave,
            final_centre_of_mass_y: ship.centre_of_mass().map_or(f32::NAN, |c| c.y),
            events,
        };

        tracing::info!(
            scenario = %metrics.scenario,
            steps = metrics.timesteps,
            broken = metrics.broken_springs,
            wall_time = metrics.total_wall_time,
            "scenario finished"
        );

        Ok(metrics)
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> SeaworthyResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)?))
            .collect()
    }
}
