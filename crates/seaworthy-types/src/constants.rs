//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.80665;

/// Default duration of one simulation step (seconds).
pub const DEFAULT_SIMULATION_STEP: f32 = 1.0 / 64.0;

/// Number of mechanical sub-iterations per step that the spring strength
/// calibration was made against.
pub const BASE_MECHANICAL_ITERATIONS: u32 = 24;

/// Density of sea water (kg/m³).
pub const WATER_DENSITY: f32 = 1000.0;

/// Width of the simulated world (metres). The world spans
/// `[-MAX_WORLD_WIDTH / 2, MAX_WORLD_WIDTH / 2]` horizontally.
pub const MAX_WORLD_WIDTH: f32 = 5000.0;

/// Half of [`MAX_WORLD_WIDTH`].
pub const HALF_MAX_WORLD_WIDTH: f32 = MAX_WORLD_WIDTH / 2.0;

/// Sea level in world coordinates (metres).
pub const SEA_LEVEL: f32 = 0.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;
