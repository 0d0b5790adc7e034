//! Global simulation parameters.
//!
//! One parameter set is shared by the structural solver and the ocean.
//! Both keep a cached copy and compare it against the live set every step,
//! recomputing derived coefficients only when something changed.

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_MECHANICAL_ITERATIONS, DEFAULT_SIMULATION_STEP, GRAVITY};
use crate::error::{SeaworthyError, SeaworthyResult};

/// Longest accepted simulation step (seconds).
pub const MAX_SIMULATION_STEP: f32 = 0.1;

/// Strongest accepted gravity (m/s²).
pub const MAX_GRAVITY: f32 = 100.0;

/// Tunable parameters for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Duration of one simulation step (seconds).
    pub simulation_step_duration: f32,

    /// Mechanical sub-iterations per step.
    pub num_mechanical_dynamics_iterations: u32,

    /// Multiplier on spring stiffness coefficients.
    pub spring_stiffness_adjustment: f32,

    /// Multiplier on spring damping coefficients.
    pub spring_damping_adjustment: f32,

    /// Multiplier on spring breaking elongations.
    pub spring_strength_adjustment: f32,

    /// Multiplier on material melting temperatures.
    pub melting_temperature_adjustment: f32,

    /// Fraction of point velocity removed every mechanical sub-iteration.
    pub global_damping: f32,

    /// Multiplier on water density (buoyancy).
    pub water_density_adjustment: f32,

    /// Gravitational acceleration (m/s², positive down).
    pub gravity: f32,

    /// Multiplier on basal wave amplitude.
    pub basal_wave_height_adjustment: f32,

    /// Multiplier on basal wave length.
    pub basal_wave_length_adjustment: f32,

    /// Multiplier on basal wave angular velocity.
    pub basal_wave_speed_adjustment: f32,

    /// SWE velocity smoothing. Range: 0.0–1.0, mapped onto the stable
    /// smoothing range of the SWE step.
    pub wave_smoothness_adjustment: f32,

    /// Mean interval between tsunamis (minutes). Non-positive disables.
    pub tsunami_rate: f32,

    /// Mean interval between rogue waves (minutes). Non-positive disables.
    pub rogue_wave_rate: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            simulation_step_duration: DEFAULT_SIMULATION_STEP,
            num_mechanical_dynamics_iterations: BASE_MECHANICAL_ITERATIONS,
            spring_stiffness_adjustment: 1.0,
            spring_damping_adjustment: 1.0,
            spring_strength_adjustment: 1.0,
            melting_temperature_adjustment: 1.0,
            global_damping: 0.0004,
            water_density_adjustment: 1.0,
            gravity: GRAVITY,
            basal_wave_height_adjustment: 1.0,
            basal_wave_length_adjustment: 1.0,
            basal_wave_speed_adjustment: 1.0,
            wave_smoothness_adjustment: 0.4,
            tsunami_rate: 15.0,
            rogue_wave_rate: 2.0,
        }
    }
}

impl SimulationParameters {
    /// Flat sea, no abnormal waves.
    pub fn calm() -> Self {
        Self {
            basal_wave_height_adjustment: 0.0,
            tsunami_rate: 0.0,
            rogue_wave_rate: 0.0,
            ..Default::default()
        }
    }

    /// Tall, long basal waves and frequent rogue waves.
    pub fn stormy() -> Self {
        Self {
            basal_wave_height_adjustment: 3.0,
            basal_wave_length_adjustment: 1.5,
            basal_wave_speed_adjustment: 1.2,
            tsunami_rate: 5.0,
            rogue_wave_rate: 0.5,
            ..Default::default()
        }
    }

    /// Duration of one mechanical sub-iteration (seconds).
    pub fn mechanical_dt(&self) -> f32 {
        self.simulation_step_duration / self.num_mechanical_dynamics_iterations.max(1) as f32
    }

    /// Checks every parameter against its valid range.
    pub fn validate(&self) -> SeaworthyResult<()> {
        fn check(ok: bool, what: &str) -> SeaworthyResult<()> {
            if ok {
                Ok(())
            } else {
                Err(SeaworthyError::InvalidConfig(what.to_string()))
            }
        }

        check(
            self.simulation_step_duration > 0.0
                && self.simulation_step_duration <= MAX_SIMULATION_STEP,
            "simulation_step_duration must be within (0, 0.1]",
        )?;
        check(
            (1..=256).contains(&self.num_mechanical_dynamics_iterations),
            "num_mechanical_dynamics_iterations must be within [1, 256]",
        )?;
        check(
            self.spring_stiffness_adjustment > 0.0 && self.spring_stiffness_adjustment <= 4.0,
            "spring_stiffness_adjustment must be within (0, 4]",
        )?;
        check(
            self.spring_damping_adjustment >= 0.0 && self.spring_damping_adjustment.is_finite(),
            "spring_damping_adjustment must be non-negative",
        )?;
        check(
            self.spring_strength_adjustment > 0.0 && self.spring_strength_adjustment.is_finite(),
            "spring_strength_adjustment must be positive",
        )?;
        check(
            self.melting_temperature_adjustment > 0.0
                && self.melting_temperature_adjustment.is_finite(),
            "melting_temperature_adjustment must be positive",
        )?;
        check(
            (0.0..1.0).contains(&self.global_damping),
            "global_damping must be within [0, 1)",
        )?;
        check(
            self.water_density_adjustment >= 0.0 && self.water_density_adjustment.is_finite(),
            "water_density_adjustment must be non-negative",
        )?;
        check(
            (0.0..=MAX_GRAVITY).contains(&self.gravity),
            "gravity must be within [0, 100]",
        )?;
        for (value, name) in [
            (self.basal_wave_height_adjustment, "basal_wave_height_adjustment"),
            (self.basal_wave_length_adjustment, "basal_wave_length_adjustment"),
            (self.basal_wave_speed_adjustment, "basal_wave_speed_adjustment"),
        ] {
            check(
                value >= 0.0 && value.is_finite(),
                &format!("{name} must be non-negative"),
            )?;
        }
        check(
            (0.0..=1.0).contains(&self.wave_smoothness_adjustment),
            "wave_smoothness_adjustment must be within [0, 1]",
        )?;
        // Non-positive rates are legal and disable scheduling
        check(self.tsunami_rate.is_finite(), "tsunami_rate must be finite")?;
        check(self.rogue_wave_rate.is_finite(), "rogue_wave_rate must be finite")?;

        Ok(())
    }
}
