//! Shallow-water height and velocity fields.
//!
//! The velocity field is staggered: `velocity[i]` sits on the left edge of
//! height cell `i`, so there is one more velocity than height sample.
//! The outermost velocities are walls and never change.

use seaworthy_math::mix;
use seaworthy_math::smoothing::smooth_two_pass;

use crate::constants::{DX, SWE_BOUNDARY_SAMPLES, SWE_HEIGHT_FIELD_OFFSET, SWE_TOTAL_SAMPLES};

/// Half width of the window smoothing displacement impulses (samples).
pub const DELTA_HEIGHT_SMOOTHING: usize = 8;

/// Largest Courant number a single SWE sub-step runs at.
pub const MAX_COURANT_NUMBER: f32 = 0.5;

/// Upper bound on SWE sub-steps per simulation step.
pub const MAX_SWE_SUBSTEPS: usize = 64;

/// Velocity smoothing reached at a smoothness adjustment of 1.0 with a
/// vanishing Courant number.
pub const MAX_VELOCITY_SMOOTHING: f32 = 0.5;

/// Number of sub-steps keeping each one at or below [`MAX_COURANT_NUMBER`]
/// for waves travelling over `depth` field units.
pub fn courant_substeps(dt: f32, gravity: f32, depth: f32) -> usize {
    let courant = dt / DX * (gravity * depth.max(0.0)).sqrt();
    if !courant.is_finite() {
        return MAX_SWE_SUBSTEPS;
    }
    ((courant / MAX_COURANT_NUMBER).ceil() as usize).clamp(1, MAX_SWE_SUBSTEPS)
}

/// Velocity mix factor for a sub-step at Courant number `courant`.
///
/// Mixing velocities toward their neighbours' average by `s` leaves the
/// shortest wavelength stable only while `s <= 1 - courant²`; the
/// adjustment is mapped onto half of that range.
pub fn velocity_smoothing(adjustment: f32, courant: f32) -> f32 {
    adjustment.clamp(0.0, 1.0) * MAX_VELOCITY_SMOOTHING * (1.0 - courant * courant).max(0.0)
}

/// SWE state and the pending displacement buffer.
#[derive(Debug, Clone)]
pub struct SweField {
    height: Vec<f32>,
    velocity: Vec<f32>,
    delta_height: Vec<f32>,
    scratch: Vec<f32>,
}

impl SweField {
    /// A field at rest at the neutral height.
    pub fn new() -> Self {
        Self {
            height: vec![SWE_HEIGHT_FIELD_OFFSET; SWE_TOTAL_SAMPLES],
            velocity: vec![0.0; SWE_TOTAL_SAMPLES + 1],
            delta_height: vec![0.0; SWE_TOTAL_SAMPLES],
            scratch: vec![0.0; SWE_TOTAL_SAMPLES],
        }
    }

    pub fn height(&self) -> &[f32] {
        &self.height
    }

    pub fn height_mut(&mut self) -> &mut [f32] {
        &mut self.height
    }

    pub fn velocity(&self) -> &[f32] {
        &self.velocity
    }

    pub fn velocity_mut(&mut self) -> &mut [f32] {
        &mut self.velocity
    }

    /// Height of the SWE sample backing world sample `i`.
    #[inline]
    pub fn world_sample_height(&self, i: usize) -> f32 {
        self.height[SWE_BOUNDARY_SAMPLES + i]
    }

    /// Queues a height change at an SWE index, applied smoothed on the
    /// next [`apply_delta_height`](Self::apply_delta_height).
    pub fn add_delta(&mut self, index: usize, delta: f32) {
        debug_assert!(index < SWE_TOTAL_SAMPLES);
        self.delta_height[index] += delta;
    }

    /// Smooths the queued displacements, adds them to the height field and
    /// clears the queue. Returns the total absolute displacement queued.
    pub fn apply_delta_height(&mut self) -> f32 {
        let total: f32 = self.delta_height.iter().map(|d| d.abs()).sum();
        if total == 0.0 {
            return 0.0;
        }

        smooth_two_pass(&mut self.delta_height, &mut self.scratch, DELTA_HEIGHT_SMOOTHING);
        for (h, d) in self.height.iter_mut().zip(self.delta_height.iter_mut()) {
            *h += *d;
            *d = 0.0;
        }

        total
    }

    /// Fades velocity and height deviation to zero across the padding
    /// samples, scaling sample `i` from either end by `i / SWE_BOUNDARY_SAMPLES`.
    pub fn damp_boundaries(&mut self) {
        let hn = self.height.len();
        let vn = self.velocity.len();

        for i in 0..SWE_BOUNDARY_SAMPLES {
            let factor = i as f32 / SWE_BOUNDARY_SAMPLES as f32;

            self.velocity[i] *= factor;
            self.velocity[vn - 1 - i] *= factor;

            for j in [i, hn - 1 - i] {
                self.height[j] =
                    SWE_HEIGHT_FIELD_OFFSET + (self.height[j] - SWE_HEIGHT_FIELD_OFFSET) * factor;
            }
        }
    }

    /// Advances the field by `dt`, split into as many sub-steps as the
    /// deepest sample needs to stay within [`MAX_COURANT_NUMBER`].
    pub fn step(&mut self, dt: f32, gravity: f32, smoothness: f32) {
        let depth = self.height.iter().fold(0.0_f32, |deepest, &h| deepest.max(h));
        let substeps = courant_substeps(dt, gravity, depth);
        let sub_dt = dt / substeps as f32;
        let courant = sub_dt / DX * (gravity * depth).sqrt();
        let mix_factor = velocity_smoothing(smoothness, courant);

        for _ in 0..substeps {
            self.advance(sub_dt, gravity, mix_factor);
        }
    }

    /// One explicit SWE sub-step.
    ///
    /// ```text
    /// h[i] *= 1 + (dt/dx)(v[i] − v[i+1])
    /// v[i]  = mix(v[i], avg(v[i−1], v[i+1]), s) − g(dt/dx)(h[i] − h[i−1])
    /// ```
    ///
    /// The neighbour average reads velocities from before this sub-step on
    /// both sides.
    fn advance(&mut self, dt: f32, gravity: f32, mix_factor: f32) {
        let a = dt / DX;
        let n = self.height.len();

        for i in 0..n {
            self.height[i] *= 1.0 + a * (self.velocity[i] - self.velocity[i + 1]);
        }

        let mut previous_left = self.velocity[0];
        for i in 1..n {
            let current = self.velocity[i];
            let average = (previous_left + self.velocity[i + 1]) * 0.5;
            self.velocity[i] =
                mix(current, average, mix_factor) - gravity * a * (self.height[i] - self.height[i - 1]);
            previous_left = current;
        }
    }

    /// Largest deviation from the neutral height anywhere in the field.
    pub fn max_deviation(&self) -> f32 {
        self.height
            .iter()
            .fold(0.0_f32, |m, &h| m.max((h - SWE_HEIGHT_FIELD_OFFSET).abs()))
    }
}

impl Default for SweField {
    fn default() -> Self {
        Self::new()
    }
}
