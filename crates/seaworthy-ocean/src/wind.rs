//! Wind state, as driven by an external wind model.

use seaworthy_math::RunningAverage;

/// Wind speeds in km/h. Positive blows toward +X.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindState {
    /// Steady component.
    pub base_speed: f32,
    /// Instantaneous speed, including gusts.
    pub current_speed: f32,
}

impl WindState {
    /// Steady wind with no gust.
    pub fn steady(speed: f32) -> Self {
        Self {
            base_speed: speed,
            current_speed: speed,
        }
    }

    /// No wind at all.
    pub fn calm() -> Self {
        Self::default()
    }

    /// Amount by which the current speed exceeds the base speed.
    pub fn gust_excess(&self) -> f32 {
        (self.current_speed.abs() - self.base_speed.abs()).max(0.0)
    }

    /// +1 for wind toward +X, -1 toward -X, 0 for no wind.
    pub fn direction(&self) -> f32 {
        if self.base_speed > 0.0 {
            1.0
        } else if self.base_speed < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}

/// Ripple amplitude per km/h of averaged gust excess (m).
pub const WIND_RIPPLE_AMPLITUDE_PER_KMH: f32 = 0.015;

/// Fixed ripple wavenumber (rad/m).
pub const WIND_RIPPLE_WAVENUMBER: f32 = 0.5;

/// Ripple angular velocity is this divided by the base wind speed.
pub const WIND_RIPPLE_ANGULAR_VELOCITY_FACTOR: f32 = 128.0;

/// Below this base speed ripples do not travel (km/h).
const MIN_RIPPLE_WIND_SPEED: f32 = 0.1;

/// Short wind ripples driven by gusts.
#[derive(Debug, Clone)]
pub struct WindRipples {
    gust_average: RunningAverage<32>,
    amplitude: f32,
    angular_velocity: f32,
}

impl WindRipples {
    pub fn new() -> Self {
        Self {
            gust_average: RunningAverage::new(0.0),
            amplitude: 0.0,
            angular_velocity: 0.0,
        }
    }

    /// Folds in the current wind.
    pub fn update(&mut self, wind: &WindState) {
        let average = self.gust_average.update(wind.gust_excess());
        self.amplitude = WIND_RIPPLE_AMPLITUDE_PER_KMH * average;
        self.angular_velocity = if wind.base_speed.abs() > MIN_RIPPLE_WIND_SPEED {
            WIND_RIPPLE_ANGULAR_VELOCITY_FACTOR / wind.base_speed
        } else {
            0.0
        };
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Ripple height at world X and simulation time `t` (m).
    #[inline]
    pub fn height(&self, x: f32, t: f32) -> f32 {
        self.amplitude * (WIND_RIPPLE_WAVENUMBER * x - self.angular_velocity * t).sin()
    }
}

impl Default for WindRipples {
    fn default() -> Self {
        Self::new()
    }
}
