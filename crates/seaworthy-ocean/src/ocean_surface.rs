//! The ocean surface: SWE field plus synthesized waves, sampled for
//! height queries.

use std::time::Duration;

use seaworthy_math::{RandomEngine, Vec2};
use seaworthy_telemetry::{EventBus, EventKind};
use seaworthy_types::constants::HALF_MAX_WORLD_WIDTH;
use seaworthy_types::{SeaSurface, SimulationParameters};

use crate::abnormal_waves::{AbnormalWaveGenerator, AbnormalWaveKind};
use crate::basal_waves::BasalWaves;
use crate::constants::{
    DX, MAX_RELATIVE_HEIGHT, SAMPLES_COUNT, SWE_HEIGHT_FIELD_AMPLIFICATION,
    SWE_HEIGHT_FIELD_OFFSET, SWE_TOTAL_SAMPLES,
};
use crate::interactive_waves::{swe_index, swe_position, InteractiveWaves};
use crate::swe::SweField;
use crate::wind::{WindRipples, WindState};

/// Slowest growth rate of an `adjust_to` request (per step).
pub const MIN_ADJUST_GROWTH_RATE: f32 = 0.001;

/// Fastest growth rate of an `adjust_to` request (per step).
pub const MAX_ADJUST_GROWTH_RATE: f32 = 0.06;

/// Steepness of the `adjust_to` growth rate falloff with deviation.
pub const ADJUST_GROWTH_FALLOFF: f32 = 2.0;

/// How far a Thanos snap pushes the field below neutral (field units).
pub const THANOS_SNAP_DEPTH: f32 = 1.5;

/// A precomputed surface sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Surface height (world Y).
    pub value: f32,
    /// Height difference to the next sample.
    pub delta_to_next: f32,
}

/// The ocean surface model.
///
/// # Step order
///
/// ```text
/// 1. abnormal wave generators   (schedule, trigger, re-apply)
/// 2. interactive waves          (h += (target − h) · growth)
/// 3. displacement impulses      (smoothed, added, cleared)
/// 4. boundary damping
/// 5. SWE step
/// 6. sample generation          (SWE + basal waves + wind ripples)
/// 7. interactive growth decay
/// ```
#[derive(Debug, Clone)]
pub struct OceanSurface {
    swe: SweField,
    interactive: InteractiveWaves,
    basal: BasalWaves,
    ripples: WindRipples,
    tsunami: AbnormalWaveGenerator,
    rogue_wave: AbnormalWaveGenerator,
    samples: Vec<Sample>,
    sim_time: f32,
    wind_direction: f32,
}

impl OceanSurface {
    /// An ocean at the neutral level carrying the basal waves for `wind`,
    /// with abnormal waves scheduled from wall-clock time `now`.
    ///
    /// Samples are generated at simulation time zero, so the surface can be
    /// queried before the first update.
    pub fn new(
        params: &SimulationParameters,
        wind: &WindState,
        now: Duration,
        rng: &mut RandomEngine,
    ) -> Self {
        let mut ocean = Self {
            swe: SweField::new(),
            interactive: InteractiveWaves::new(),
            basal: BasalWaves::new(),
            ripples: WindRipples::new(),
            tsunami: AbnormalWaveGenerator::new(
                AbnormalWaveKind::Tsunami,
                params.tsunami_rate,
                now,
                rng,
            ),
            rogue_wave: AbnormalWaveGenerator::new(
                AbnormalWaveKind::RogueWave,
                params.rogue_wave_rate,
                now,
                rng,
            ),
            samples: vec![Sample::default(); SAMPLES_COUNT + 1],
            sim_time: 0.0,
            wind_direction: wind.direction(),
        };
        ocean.basal.update(wind.base_speed, params);
        ocean.generate_samples();
        ocean
    }

    /// Advances the ocean by one step.
    ///
    /// `sim_time` is the simulation time at the end of the step; `now` the
    /// current wall-clock time.
    pub fn update(
        &mut self,
        sim_time: f32,
        now: Duration,
        params: &SimulationParameters,
        wind: &WindState,
        rng: &mut RandomEngine,
        events: &EventBus,
    ) {
        self.sim_time = sim_time;
        self.wind_direction = wind.direction();

        // 1. Abnormal waves
        self.tsunami.update(
            now,
            sim_time,
            params.tsunami_rate,
            self.wind_direction,
            rng,
            &mut self.interactive,
            events,
        );
        self.rogue_wave.update(
            now,
            sim_time,
            params.rogue_wave_rate,
            self.wind_direction,
            rng,
            &mut self.interactive,
            events,
        );

        // 2. Interactive waves
        self.interactive.apply(self.swe.height_mut());

        // 3. Displacement impulses
        let displaced = self.swe.apply_delta_height();
        if displaced > 0.0 {
            events.notify(EventKind::OceanDisturbance {
                total_displacement: displaced,
            });
        }

        // 4-5. SWE
        self.swe.damp_boundaries();
        self.swe.step(
            params.simulation_step_duration,
            params.gravity,
            params.wave_smoothness_adjustment,
        );

        // 6. Samples
        self.basal.update(wind.base_speed, params);
        self.ripples.update(wind);
        self.generate_samples();

        // 7. Detach
        self.interactive.decay();
    }

    fn generate_samples(&mut self) {
        let t = self.sim_time;
        for (i, sample) in self.samples.iter_mut().enumerate() {
            let x = -HALF_MAX_WORLD_WIDTH + i as f32 * DX;
            let swe = (self.swe.world_sample_height(i) - SWE_HEIGHT_FIELD_OFFSET)
                * SWE_HEIGHT_FIELD_AMPLIFICATION;
            sample.value = swe + self.basal.height(x, t) + self.ripples.height(x, t);
        }

        for i in 0..SAMPLES_COUNT {
            self.samples[i].delta_to_next = self.samples[i + 1].value - self.samples[i].value;
        }
        self.samples[SAMPLES_COUNT].delta_to_next = 0.0;
    }

    /// Surface height (world Y) at world X, linearly interpolated between
    /// samples. Clamped to the world edges.
    pub fn height_at(&self, x: f32) -> f32 {
        let s = ((x + HALF_MAX_WORLD_WIDTH) / DX).clamp(0.0, SAMPLES_COUNT as f32);
        let i = (s.floor() as usize).min(SAMPLES_COUNT);
        let frac = s - i as f32;
        let sample = &self.samples[i];
        sample.value + sample.delta_to_next * frac
    }

    /// Pulls the surface at `position.x` toward `position.y`.
    ///
    /// The target is clamped to the maximum relative height. Small
    /// deviations are approached fast, large ones slowly.
    pub fn adjust_to(&mut self, position: Vec2, radius: f32) {
        let relative = (position.y / SWE_HEIGHT_FIELD_AMPLIFICATION)
            .clamp(-MAX_RELATIVE_HEIGHT, MAX_RELATIVE_HEIGHT);
        let current = self.swe.height()[swe_index(position.x)] - SWE_HEIGHT_FIELD_OFFSET;
        let deviation = (relative - current).abs();

        let rate = MIN_ADJUST_GROWTH_RATE
            + (MAX_ADJUST_GROWTH_RATE - MIN_ADJUST_GROWTH_RATE)
                / (1.0 + ADJUST_GROWTH_FALLOFF * deviation);

        self.interactive.request(position.x, relative, rate, radius);
    }

    /// Depresses the SWE field between two world X fronts.
    pub fn apply_thanos_snap(&mut self, left_front_x: f32, right_front_x: f32) {
        let (left, right) = if left_front_x <= right_front_x {
            (left_front_x, right_front_x)
        } else {
            (right_front_x, left_front_x)
        };
        let first = swe_index(left);
        let last = swe_index(right);
        let floor = SWE_HEIGHT_FIELD_OFFSET - MAX_RELATIVE_HEIGHT;

        for h in &mut self.swe.height_mut()[first..=last] {
            *h = (*h - THANOS_SNAP_DEPTH).max(floor);
        }

        tracing::debug!(left, right, "thanos snap applied to ocean");
    }

    /// Queues a surface displacement of `dy` world metres at world X.
    /// Displacements outside the SWE field are dropped on either side.
    pub fn displace_at(&mut self, x: f32, dy: f32) {
        let position = swe_position(x);
        if !(0.0..=(SWE_TOTAL_SAMPLES - 1) as f32).contains(&position) {
            return;
        }
        let index = swe_index(x);
        self.swe.add_delta(index, dy / SWE_HEIGHT_FIELD_AMPLIFICATION);
    }

    /// Triggers a tsunami now. Returns its centre.
    pub fn trigger_tsunami(&mut self, rng: &mut RandomEngine, events: &EventBus) -> f32 {
        self.tsunami.trigger(
            self.sim_time,
            self.wind_direction,
            rng,
            &mut self.interactive,
            events,
        )
    }

    /// Triggers a rogue wave now. Returns its centre.
    pub fn trigger_rogue_wave(&mut self, rng: &mut RandomEngine, events: &EventBus) -> f32 {
        self.rogue_wave.trigger(
            self.sim_time,
            self.wind_direction,
            rng,
            &mut self.interactive,
            events,
        )
    }

    // ─── Inspection ───

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn swe(&self) -> &SweField {
        &self.swe
    }

    pub fn basal_waves(&self) -> &BasalWaves {
        &self.basal
    }

    pub fn tsunami(&self) -> &AbnormalWaveGenerator {
        &self.tsunami
    }

    pub fn rogue_wave(&self) -> &AbnormalWaveGenerator {
        &self.rogue_wave
    }

    pub fn interactive_waves(&self) -> &InteractiveWaves {
        &self.interactive
    }

    /// Lowest and highest sample values.
    pub fn height_range(&self) -> (f32, f32) {
        self.samples
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.value), hi.max(s.value))
            })
    }
}

impl SeaSurface for OceanSurface {
    fn height_at(&self, x: f32) -> f32 {
        OceanSurface::height_at(self, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm_ocean() -> OceanSurface {
        let mut rng = RandomEngine::seeded(1);
        OceanSurface::new(
            &SimulationParameters::calm(),
            &WindState::calm(),
            Duration::ZERO,
            &mut rng,
        )
    }

    #[test]
    fn height_interpolates_between_samples() {
        let mut ocean = calm_ocean();
        ocean.samples[10] = Sample {
            value: 2.0,
            delta_to_next: 1.0,
        };
        ocean.samples[11] = Sample {
            value: 3.0,
            delta_to_next: -3.0,
        };

        let x10 = -HALF_MAX_WORLD_WIDTH + 10.0 * DX;
        assert!((ocean.height_at(x10) - 2.0).abs() < 1e-4);
        assert!((ocean.height_at(x10 + 0.5 * DX) - 2.5).abs() < 1e-3);
    }

    #[test]
    fn height_is_clamped_at_world_edges() {
        let mut ocean = calm_ocean();
        ocean.samples[0].value = -1.0;
        ocean.samples[SAMPLES_COUNT].value = 4.0;

        assert_eq!(ocean.height_at(-1.0e6), -1.0);
        assert_eq!(ocean.height_at(1.0e6), 4.0);
    }
}
