//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Number of steps executed.
    pub timesteps: u32,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    pub point_count: usize,
    pub spring_count: usize,
    pub triangle_count: usize,
    /// Springs destroyed by the end of the run.
    pub broken_springs: usize,
    /// Springs stressed at the end of the run.
    pub stressed_springs: usize,
    pub destroyed_triangles: usize,
    /// Lowest ocean sample seen during the run (m).
    pub min_wave_height: f32,
    /// Highest ocean sample seen during the run (m).
    pub max_wave_height: f32,
    /// Vertical position of the ship's centre of mass at the end (m).
    pub final_centre_of_mass_y: f32,
    /// Events delivered over the run.
    pub events: usize,
}

impl BenchmarkMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,points,springs,triangles,timesteps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,broken_springs,stressed_springs,destroyed_triangles,min_wave_m,max_wave_m,final_com_y,events".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{},{},{},{:.3},{:.3},{:.3},{}",
            self.scenario,
            self.point_count,
            self.spring_count,
            self.triangle_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.broken_springs,
            self.stressed_springs,
            self.destroyed_triangles,
            self.min_wave_height,
            self.max_wave_height,
            self.final_centre_of_mass_y,
            self.events,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
