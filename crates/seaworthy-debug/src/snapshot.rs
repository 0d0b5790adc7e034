//! State snapshot serialization for offline inspection.
//!
//! A snapshot captures ship point kinematics and the ocean surface
//! samples at one step.

use std::fs;
use std::path::Path;

use seaworthy_math::Vec2;
use seaworthy_types::{SeaworthyError, SeaworthyResult};
use serde::{Deserialize, Serialize};

/// A simulation state snapshot.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Step index when this snapshot was taken.
    pub timestep: u32,
    /// Simulation time in seconds.
    pub sim_time: f32,
    /// Point positions (flat: [x0, y0, x1, y1, ...]).
    pub positions: Vec<f32>,
    /// Point velocities (flat: [vx0, vy0, ...]).
    pub velocities: Vec<f32>,
    /// Deleted flag per point.
    pub deleted: Vec<bool>,
    /// Ocean surface sample heights, left to right.
    pub ocean_samples: Vec<f32>,
}

impl StateSnapshot {
    /// Creates a snapshot from point buffers and ocean sample heights.
    pub fn capture(
        timestep: u32,
        sim_time: f32,
        positions: &[Vec2],
        velocities: &[Vec2],
        deleted: impl IntoIterator<Item = bool>,
        ocean_samples: impl IntoIterator<Item = f32>,
    ) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());

        Self {
            timestep,
            sim_time,
            positions: positions.iter().flat_map(|p| [p.x, p.y]).collect(),
            velocities: velocities.iter().flat_map(|v| [v.x, v.y]).collect(),
            deleted: deleted.into_iter().collect(),
            ocean_samples: ocean_samples.into_iter().collect(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn live_point_count(&self) -> usize {
        self.deleted.iter().filter(|&&d| !d).count()
    }

    pub fn position(&self, index: usize) -> Vec2 {
        Vec2::new(self.positions[2 * index], self.positions[2 * index + 1])
    }

    /// Mean position of live points.
    pub fn centroid(&self) -> Option<Vec2> {
        let (sum, n) = (0..self.point_count())
            .filter(|&i| !self.deleted.get(i).copied().unwrap_or(false))
            .fold((Vec2::ZERO, 0usize), |(sum, n), i| (sum + self.position(i), n + 1));
        (n > 0).then(|| sum / n as f32)
    }

    /// Lowest and highest ocean sample.
    pub fn ocean_range(&self) -> Option<(f32, f32)> {
        let mut iter = self.ocean_samples.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> SeaworthyResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| SeaworthyError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> SeaworthyResult<Self> {
        bincode::deserialize(data).map_err(|e| {
            SeaworthyError::Serialization(format!("snapshot deserialization failed: {e}"))
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SeaworthyResult<()> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> SeaworthyResult<Self> {
        Self::from_bytes(&fs::read(path)?)
    }
}
