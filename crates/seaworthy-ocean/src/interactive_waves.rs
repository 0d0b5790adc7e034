//! Interactive wave injector.
//!
//! A request pulls the SWE height toward a target over a radius. The pull
//! is strongest at the centre and falls off as `1 − (d/r)²`. Requests are
//! stored per sample and re-applied every step while their growth
//! coefficients decay, so an abandoned request lets the field go.

use seaworthy_types::constants::HALF_MAX_WORLD_WIDTH;

use crate::constants::{
    DX, MAX_RELATIVE_HEIGHT, SWE_BOUNDARY_SAMPLES, SWE_HEIGHT_FIELD_OFFSET, SWE_TOTAL_SAMPLES,
};

/// Radius of a request at the maximum relative height (m).
pub const MAX_RADIUS: f32 = 20.0;

/// Numerator of the small-height radius term (m).
pub const RADIUS_ALPHA: f32 = 0.5;

/// Offset of the small-height radius term.
pub const RADIUS_BETA: f32 = 0.1;

/// Multiplicative decay of growth coefficients per step.
pub const GROWTH_DECAY: f32 = 0.9;

/// Growth coefficients below this are cut to zero.
pub const GROWTH_EPSILON: f32 = 1.0e-4;

/// Per-sample targets and growth coefficients over the SWE field.
#[derive(Debug, Clone)]
pub struct InteractiveWaves {
    target_height: Vec<f32>,
    growth: Vec<f32>,
    /// Index range with non-zero growth, to skip idle work.
    active: Option<(usize, usize)>,
}

impl InteractiveWaves {
    pub fn new() -> Self {
        Self {
            target_height: vec![SWE_HEIGHT_FIELD_OFFSET; SWE_TOTAL_SAMPLES],
            growth: vec![0.0; SWE_TOTAL_SAMPLES],
            active: None,
        }
    }

    /// Effective radius (m) of a request.
    pub fn effective_radius(relative_height: f32, requested_radius: f32) -> f32 {
        let hf = relative_height.abs() / MAX_RELATIVE_HEIGHT;
        (MAX_RADIUS * hf + RADIUS_ALPHA / (hf + RADIUS_BETA)).max(requested_radius)
    }

    /// Requests the height at world X to move toward `relative_height`
    /// (field units above neutral) at `growth_rate` per step.
    pub fn request(
        &mut self,
        center_x: f32,
        relative_height: f32,
        growth_rate: f32,
        requested_radius: f32,
    ) {
        let relative_height = relative_height.clamp(-MAX_RELATIVE_HEIGHT, MAX_RELATIVE_HEIGHT);
        let radius = Self::effective_radius(relative_height, requested_radius);
        let target = SWE_HEIGHT_FIELD_OFFSET + relative_height;

        let center = swe_position(center_x);
        let radius_samples = radius / DX;
        let first = (center - radius_samples).floor().max(0.0) as usize;
        let last = ((center + radius_samples).ceil().max(0.0) as usize).min(SWE_TOTAL_SAMPLES - 1);
        if first > last {
            return;
        }

        for i in first..=last {
            let d = (i as f32 - center).abs() / radius_samples;
            if d > 1.0 {
                continue;
            }
            let growth = growth_rate * (1.0 - d * d);
            if growth > self.growth[i] {
                self.growth[i] = growth;
                self.target_height[i] = target;
            }
        }

        self.active = Some(match self.active {
            Some((lo, hi)) => (lo.min(first), hi.max(last)),
            None => (first, last),
        });
    }

    /// Pulls every affected sample toward its target:
    /// `h += (target − h) · growth`.
    pub fn apply(&self, height: &mut [f32]) {
        let Some((lo, hi)) = self.active else {
            return;
        };
        for i in lo..=hi {
            let g = self.growth[i];
            if g > 0.0 {
                height[i] += (self.target_height[i] - height[i]) * g;
            }
        }
    }

    /// Decays all growth coefficients, cutting tiny ones to zero.
    pub fn decay(&mut self) {
        let Some((lo, hi)) = self.active else {
            return;
        };
        let mut any = false;
        for g in &mut self.growth[lo..=hi] {
            *g *= GROWTH_DECAY;
            if *g < GROWTH_EPSILON {
                *g = 0.0;
            } else {
                any = true;
            }
        }
        if !any {
            self.active = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Growth coefficient at an SWE index.
    pub fn growth_at(&self, index: usize) -> f32 {
        self.growth[index]
    }
}

impl Default for InteractiveWaves {
    fn default() -> Self {
        Self::new()
    }
}

/// Fractional SWE index of world X.
#[inline]
pub fn swe_position(x: f32) -> f32 {
    (x + HALF_MAX_WORLD_WIDTH) / DX + SWE_BOUNDARY_SAMPLES as f32
}

/// Nearest SWE index of world X, clamped to the field.
#[inline]
pub fn swe_index(x: f32) -> usize {
    (swe_position(x).round().max(0.0) as usize).min(SWE_TOTAL_SAMPLES - 1)
}
