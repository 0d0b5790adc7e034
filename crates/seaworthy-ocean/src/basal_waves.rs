//! Basal waves: the large-scale periodic background swell.
//!
//! Two sine waves are superimposed. The secondary wave has a shorter
//! wavenumber, a smaller amplitude and a slowly drifting phase, so the
//! sum never settles into an obvious period.

use std::f32::consts::{FRAC_PI_2, TAU};

use seaworthy_types::constants::EPSILON;
use seaworthy_types::SimulationParameters;

/// Primary amplitude at zero wind (m), before the height adjustment.
pub const MIN_AMPLITUDE: f32 = 0.7;

/// Primary amplitude at and beyond [`AMPLITUDE_SATURATION_WIND`] (m).
pub const MAX_AMPLITUDE: f32 = 2.0;

/// Wind speed at which the amplitude saturates (km/h).
pub const AMPLITUDE_SATURATION_WIND: f32 = 30.0;

/// Primary wavelength at zero wind (m).
pub const BASE_WAVELENGTH: f32 = 100.0;

/// Wavelength increase per km/h of wind (m).
pub const WAVELENGTH_PER_KMH: f32 = 2.5;

/// Secondary wave amplitude relative to the primary.
pub const SECONDARY_AMPLITUDE_RATIO: f32 = 0.75;

/// Secondary wavenumber relative to the primary.
pub const SECONDARY_WAVENUMBER_RATIO: f32 = 0.66;

/// Angular frequency of the secondary wave's phase drift (rad/s).
pub const SECONDARY_PHASE_DRIFT: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    wind_base_speed: f32,
    height_adjustment: f32,
    length_adjustment: f32,
    speed_adjustment: f32,
    gravity: f32,
}

/// Coefficients of the two basal waves, memoized on their inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BasalWaves {
    key: Option<CacheKey>,
    pub amplitude1: f32,
    pub wavenumber1: f32,
    pub angular_velocity1: f32,
    pub amplitude2: f32,
    pub wavenumber2: f32,
    pub angular_velocity2: f32,
}

impl BasalWaves {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the coefficients if the wind base speed or any basal
    /// wave adjustment changed. Returns true if it recomputed.
    pub fn update(&mut self, wind_base_speed: f32, params: &SimulationParameters) -> bool {
        let key = CacheKey {
            wind_base_speed,
            height_adjustment: params.basal_wave_height_adjustment,
            length_adjustment: params.basal_wave_length_adjustment,
            speed_adjustment: params.basal_wave_speed_adjustment,
            gravity: params.gravity,
        };
        if self.key == Some(key) {
            return false;
        }

        let wind = wind_base_speed.abs();
        let saturation = (wind / AMPLITUDE_SATURATION_WIND).min(1.0);
        let amplitude = (MIN_AMPLITUDE + (MAX_AMPLITUDE - MIN_AMPLITUDE) * saturation)
            * key.height_adjustment
            / 2.0;

        let wavelength = (BASE_WAVELENGTH + WAVELENGTH_PER_KMH * wind) * key.length_adjustment;
        let wavenumber = if wavelength > EPSILON {
            TAU / wavelength
        } else {
            0.0
        };

        // A wave without a wavelength contributes nothing
        let amplitude = if wavenumber > 0.0 { amplitude } else { 0.0 };
        let wavenumber2 = SECONDARY_WAVENUMBER_RATIO * wavenumber;

        self.amplitude1 = amplitude;
        self.wavenumber1 = wavenumber;
        self.angular_velocity1 = key.speed_adjustment * (key.gravity * wavenumber).sqrt();
        self.amplitude2 = SECONDARY_AMPLITUDE_RATIO * amplitude;
        self.wavenumber2 = wavenumber2;
        self.angular_velocity2 = key.speed_adjustment * (key.gravity * wavenumber2).sqrt();
        self.key = Some(key);

        tracing::debug!(
            amplitude,
            wavelength,
            angular_velocity = self.angular_velocity1,
            "basal wave coefficients recomputed"
        );

        true
    }

    /// Basal wave height at world X and simulation time `t` (m).
    #[inline]
    pub fn height(&self, x: f32, t: f32) -> f32 {
        let phase2 = FRAC_PI_2 * (SECONDARY_PHASE_DRIFT * t).sin();
        self.amplitude1 * (self.wavenumber1 * x - self.angular_velocity1 * t).sin()
            + self.amplitude2 * (self.wavenumber2 * x - self.angular_velocity2 * t + phase2).sin()
    }
}
