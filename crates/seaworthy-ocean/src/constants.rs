//! Ocean grid geometry and height field scaling.

use seaworthy_types::constants::MAX_WORLD_WIDTH;

/// Number of surface samples across the world width.
pub const SAMPLES_COUNT: usize = 8192;

/// Distance between consecutive samples (m).
pub const DX: f32 = MAX_WORLD_WIDTH / SAMPLES_COUNT as f32;

/// Padding samples on each side of the SWE field, outside the world.
pub const SWE_BOUNDARY_SAMPLES: usize = 48;

/// Length of the SWE height field.
pub const SWE_TOTAL_SAMPLES: usize = SAMPLES_COUNT + 2 * SWE_BOUNDARY_SAMPLES;

/// Neutral SWE height (field units).
pub const SWE_HEIGHT_FIELD_OFFSET: f32 = 100.0;

/// World metres per SWE field unit of deviation from the neutral height.
pub const SWE_HEIGHT_FIELD_AMPLIFICATION: f32 = 5.0;

/// Largest deviation from the neutral height a wave may target (field units).
pub const MAX_RELATIVE_HEIGHT: f32 = 6.0;
