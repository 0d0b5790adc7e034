//! Spring coefficient engine.
//!
//! Pure functions computing a spring's stiffness, damping and breaking
//! elongation from its materials, the state of its endpoints and the
//! global adjustments. [`crate::springs::Springs`] applies them.
//!
//! | Coefficient | Formula |
//! |---|---|
//! | stiffness | `REDUCTION × k_mat × adj × m_f / dt² × melt` |
//! | damping | `DAMPING × adj × m_f / dt` |
//! | breaking elongation | `strength × adj × iter_corr × decay × rest × melt_tol × jitter` |
//!
//! with `m_f = mA·mB / (mA + mB)` on augmented masses.

use seaworthy_math::{mix, smooth_step};
use seaworthy_types::constants::BASE_MECHANICAL_ITERATIONS;
use seaworthy_types::SimulationParameters;

/// Fraction of the critical stiffness that springs are driven at.
pub const SPRING_REDUCTION_FRACTION: f32 = 0.5;

/// Fraction of the critical damping that springs are driven at.
pub const SPRING_DAMPING_COEFFICIENT: f32 = 0.03;

/// Width of the overheat window over which melting takes full effect (K).
pub const MELTING_OVERHEAT_WINDOW: f32 = 200.0;

/// Stiffness multiplier of a fully melted spring.
pub const MIN_MELTING_STIFFNESS_FACTOR: f32 = 0.05;

/// Breaking elongation multiplier of a fully melted spring.
pub const MAX_MELTING_STRENGTH_FACTOR: f32 = 10.0;

/// Fraction of the gap to a higher target stiffness closed per update.
pub const STIFFNESS_INCREASE_FILTER: f32 = 0.03;

/// Maximum relative deviation of a spring's breaking elongation due to
/// its endpoints' personality seeds.
pub const PERSONALITY_JITTER: f32 = 0.05;

/// A melting spring never grows beyond this multiple of its factory length.
pub const MAX_REST_LENGTH_GROWTH: f32 = 2.0;

/// Inputs describing one spring at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringInputs {
    pub mass_a: f32,
    pub mass_b: f32,
    pub material_stiffness: f32,
    pub material_strength: f32,
    /// Unadjusted melting temperature of the base material (K).
    pub melting_temperature: f32,
    /// Average of the endpoints' temperatures (K).
    pub temperature: f32,
    /// Average of the endpoints' decay. Range: 0.0–1.0 (1.0 = pristine).
    pub decay: f32,
    /// Average of the endpoints' personality seeds. Range: -1.0–1.0.
    pub personality: f32,
    pub rest_length: f32,
}

/// Coefficients of one spring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringCoefficients {
    pub stiffness: f32,
    pub damping: f32,
    pub breaking_elongation: f32,
}

impl SpringCoefficients {
    /// Coefficients of a destroyed spring.
    pub const ZERO: Self = Self {
        stiffness: 0.0,
        damping: 0.0,
        breaking_elongation: 0.0,
    };
}

/// Reduced mass of the two endpoints.
#[inline]
pub fn mass_factor(mass_a: f32, mass_b: f32) -> f32 {
    debug_assert!(mass_a > 0.0 && mass_b > 0.0);
    (mass_a * mass_b) / (mass_a + mass_b)
}

/// How far past its (adjusted) melting point a spring is, in `[0, 1]`.
#[inline]
pub fn melt_progress(temperature: f32, melting_temperature: f32, adjustment: f32) -> f32 {
    let overheat = temperature - melting_temperature * adjustment;
    smooth_step(0.0, MELTING_OVERHEAT_WINDOW, overheat)
}

/// Stiffness multiplier: 1 when solid, ramping down to
/// [`MIN_MELTING_STIFFNESS_FACTOR`] when fully melted.
#[inline]
pub fn melting_factor(progress: f32) -> f32 {
    mix(1.0, MIN_MELTING_STIFFNESS_FACTOR, progress)
}

/// Breaking elongation multiplier: 1 when solid, ramping up to
/// [`MAX_MELTING_STRENGTH_FACTOR`] when fully melted.
#[inline]
pub fn melting_tolerance(progress: f32) -> f32 {
    mix(1.0, MAX_MELTING_STRENGTH_FACTOR, progress)
}

/// Compensates breaking elongations for the number of mechanical
/// iterations: more iterations make springs effectively stiffer, so they
/// need to tolerate less elongation.
///
/// Equals 1 at [`BASE_MECHANICAL_ITERATIONS`].
#[inline]
pub fn iterations_correction(iterations: u32) -> f32 {
    let r = iterations as f32 / BASE_MECHANICAL_ITERATIONS as f32;
    4.0 / (1.0 + 3.0 * r.powf(1.3))
}

/// Target coefficients for a spring, before any smoothing.
pub fn compute(inputs: &SpringInputs, params: &SimulationParameters) -> SpringCoefficients {
    let dt = params.mechanical_dt();
    let mf = mass_factor(inputs.mass_a, inputs.mass_b);
    let progress = melt_progress(
        inputs.temperature,
        inputs.melting_temperature,
        params.melting_temperature_adjustment,
    );

    let stiffness = SPRING_REDUCTION_FRACTION
        * inputs.material_stiffness
        * params.spring_stiffness_adjustment
        * mf
        / (dt * dt)
        * melting_factor(progress);

    let damping = SPRING_DAMPING_COEFFICIENT * params.spring_damping_adjustment * mf / dt;

    let breaking_elongation = inputs.material_strength
        * params.spring_strength_adjustment
        * iterations_correction(params.num_mechanical_dynamics_iterations)
        * inputs.decay
        * inputs.rest_length
        * melting_tolerance(progress)
        * (1.0 + PERSONALITY_JITTER * inputs.personality);

    SpringCoefficients {
        stiffness,
        damping,
        breaking_elongation: breaking_elongation.max(0.0),
    }
}

/// Next stiffness given the current one and a new target.
///
/// Increases are low-pass filtered so that a sudden stiffening does not
/// inject energy; decreases apply immediately.
#[inline]
pub fn filter_stiffness(current: f32, target: f32) -> f32 {
    if target > current {
        current + (target - current) * STIFFNESS_INCREASE_FILTER
    } else {
        target
    }
}

/// Rest length after one step of sustained melting.
///
/// The rest length follows the current length upward, never shrinks, and
/// never exceeds [`MAX_REST_LENGTH_GROWTH`] times the factory length.
#[inline]
pub fn melted_rest_length(previous: f32, current_length: f32, factory: f32) -> f32 {
    previous.max(current_length.min(MAX_REST_LENGTH_GROWTH * factory))
}
