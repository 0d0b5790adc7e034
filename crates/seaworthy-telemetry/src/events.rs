//! Simulation event types.
//!
//! Structured events emitted by the structural and ocean solvers. Events
//! are lightweight value types that carry just enough data to be useful
//! for monitoring, sound/visual feedback, and debugging.

use serde::{Deserialize, Serialize};
use seaworthy_types::{PointId, SpringId, TriangleId};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a step index and carry domain-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub timestep: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    TimestepBegin {
        /// Simulation time at the start of this step (seconds).
        sim_time: f32,
    },

    /// Step completed.
    TimestepEnd {
        /// Wall-clock time for the entire step (seconds).
        wall_time: f64,
    },

    /// A spring exceeded its breaking elongation and was destroyed.
    SpringBroken {
        spring: SpringId,
        /// Name of the spring's base material.
        material: String,
        /// Midpoint of the spring at the moment of breaking (world X, Y).
        position: [f32; 2],
    },

    /// A spring crossed its stress-onset threshold.
    SpringStressed {
        spring: SpringId,
        material: String,
    },

    /// A previously destroyed spring was restored.
    SpringRestored { spring: SpringId },

    /// A triangle was destroyed because one of its edges broke.
    TriangleDestroyed { triangle: TriangleId },

    /// A point was destroyed.
    PointDestroyed { point: PointId },

    /// A tsunami was triggered.
    TsunamiTriggered {
        /// World X of the wave center.
        center_x: f32,
        /// Target height in SWE field units.
        relative_height: f32,
    },

    /// A rogue wave was triggered.
    RogueWaveTriggered {
        center_x: f32,
        relative_height: f32,
    },

    /// Non-zero displacement was pushed into the ocean during a step.
    OceanDisturbance {
        /// Sum of absolute height deltas applied (field units).
        total_displacement: f32,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}

impl EventKind {
    /// Short stable label, used by metric counters and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::TimestepBegin { .. } => "timestep_begin",
            EventKind::TimestepEnd { .. } => "timestep_end",
            EventKind::SpringBroken { .. } => "spring_broken",
            EventKind::SpringStressed { .. } => "spring_stressed",
            EventKind::SpringRestored { .. } => "spring_restored",
            EventKind::TriangleDestroyed { .. } => "triangle_destroyed",
            EventKind::PointDestroyed { .. } => "point_destroyed",
            EventKind::TsunamiTriggered { .. } => "tsunami_triggered",
            EventKind::RogueWaveTriggered { .. } => "rogue_wave_triggered",
            EventKind::OceanDisturbance { .. } => "ocean_disturbance",
        }
    }
}
