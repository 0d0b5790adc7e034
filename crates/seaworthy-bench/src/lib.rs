//! # seaworthy-bench
//!
//! The coupled ship/ocean [`World`], plus the benchmark suite built on it.
//!
//! Provides 4 procedural scenarios, a TOML scenario configuration,
//! metric collection, and CSV/JSON export for regression tracking.

pub mod config;
pub mod metrics;
pub mod runner;
pub mod scenarios;
pub mod world;

pub use config::ScenarioConfig;
pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
pub use world::{StepOutcome, World, WorldClock};
