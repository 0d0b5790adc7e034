//! CLI command implementations.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use seaworthy_bench::config::ScenarioConfig;
use seaworthy_bench::metrics::BenchmarkMetrics;
use seaworthy_bench::runner::BenchmarkRunner;
use seaworthy_bench::scenarios::{Scenario, ScenarioKind};
use seaworthy_debug::{BreakageTally, StateSnapshot};
use seaworthy_telemetry::{JsonLinesSink, TracingSink};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Run a simulation from a scenario config file.
pub fn simulate(config_path: &Path, events_path: Option<&Path>, snapshot_dir: &Path) -> CliResult {
    println!("Seaworthy Simulation");
    println!("────────────────────");
    println!("Config: {}", config_path.display());

    let config = ScenarioConfig::load(config_path)?;
    let scenario = config.to_scenario()?;
    let mut world = BenchmarkRunner::prepare(&scenario)?;

    world.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));
    if let Some(path) = events_path {
        let file = BufWriter::new(File::create(path)?);
        world.add_sink(Box::new(JsonLinesSink::new(file)));
        println!("Events: {}", path.display());
    }
    world.add_hook(Box::new(BreakageTally::default()));

    println!(
        "Scenario: {} ({} points, {} springs, {} steps, seed {})",
        scenario.kind.name(),
        world.ship().points().count(),
        world.ship().springs().count(),
        scenario.timesteps,
        scenario.seed,
    );
    println!();

    for step in 0..scenario.timesteps {
        if scenario.tsunami_at_step == Some(step) {
            world.trigger_tsunami();
        }
        world.step();

        if let Some(every) = config.snapshot_every {
            if world.timestep() % every == 0 {
                let path = snapshot_dir.join(format!("snapshot_{:06}.bin", world.timestep()));
                world.snapshot().save(&path)?;
                println!("  snapshot → {}", path.display());
            }
        }
    }
    world.finish();

    let ship = world.ship();
    let (lo, hi) = world.ocean().height_range();
    println!("Sim time:        {:.2}s", world.sim_time());
    println!("Broken springs:  {}", ship.broken_spring_count());
    println!("Stressed:        {}", ship.stressed_spring_count());
    println!("Triangles lost:  {}", ship.destroyed_triangle_count());
    if let Some(com) = ship.centre_of_mass() {
        println!("Centre of mass:  ({:.3}, {:.3})", com.x, com.y);
    }
    println!("Wave range:      [{lo:.3}, {hi:.3}] m");

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&Path>) -> CliResult {
    println!("Seaworthy Benchmark Suite");
    println!("═════════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                return Err(format!(
                    "Unknown scenario: '{scenario_name}'. Available: {}, all",
                    available.join(", ")
                )
                .into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind)?;

        println!(
            "Running: {} ({} cells, {} steps)",
            kind.name(),
            scenario.layer.occupied_count(),
            scenario.timesteps,
        );

        let metrics =
            BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Broken:        {}", metrics.broken_springs);
        println!(
            "  Waves:         [{:.3}, {:.3}] m",
            metrics.min_wave_height, metrics.max_wave_height
        );
        println!();

        all_metrics.push(metrics);
    }

    match output_path {
        Some(path) if path.extension().is_some_and(|e| e == "json") => {
            std::fs::write(path, serde_json::to_string_pretty(&all_metrics)?)?;
            println!("Results written to: {}", path.display());
        }
        Some(path) => {
            std::fs::write(path, BenchmarkMetrics::to_csv(&all_metrics))?;
            println!("Results written to: {}", path.display());
        }
        None => {
            println!("CSV Output:");
            println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
        }
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &Path) -> CliResult {
    println!("Seaworthy Snapshot Inspector");
    println!("────────────────────────────");
    println!();

    let snapshot = StateSnapshot::load(path)?;

    println!("Timestep:      {}", snapshot.timestep);
    println!("Sim time:      {:.4}s", snapshot.sim_time);
    println!(
        "Points:        {} ({} live)",
        snapshot.point_count(),
        snapshot.live_point_count()
    );
    println!("Ocean samples: {}", snapshot.ocean_samples.len());

    if let Some(centroid) = snapshot.centroid() {
        println!("Centroid:      ({:.4}, {:.4})", centroid.x, centroid.y);
    }
    if let Some((lo, hi)) = snapshot.ocean_range() {
        println!("Wave range:    [{lo:.4}, {hi:.4}]");
    }

    Ok(())
}

/// Validate a scenario config, down to building its ship.
pub fn validate(path: &Path) -> CliResult {
    println!("Seaworthy Validator");
    println!("───────────────────");
    println!();

    if path.extension().is_some_and(|e| e == "toml") {
        println!("Validating config: {}", path.display());
        let config = ScenarioConfig::load(path)?;
        let scenario = config.to_scenario()?;
        let world = BenchmarkRunner::prepare(&scenario)?;
        println!(
            "✅ Config is valid ({}: {} points, {} springs, {} triangles).",
            scenario.kind.name(),
            world.ship().points().count(),
            world.ship().springs().count(),
            world.ship().triangles().count(),
        );
        Ok(())
    } else {
        Err("Unsupported file format. Use .toml (scenario config).".into())
    }
}
