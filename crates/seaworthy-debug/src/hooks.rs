//! Inspection hooks for live debugging.
//!
//! Hooks are called by the world loop at fixed points of every step to
//! capture state without touching the solvers.

use seaworthy_telemetry::events::{EventKind, SimulationEvent};

/// Trait for simulation inspection hooks.
///
/// # Lifecycle
///
/// ```text
/// for each step:
///   hook.on_timestep_begin(...)
///   (ocean update, ship update)
///   hook.on_strain(...)
///   hook.on_timestep_end(...)
/// hook.on_simulation_end()
/// ```
pub trait InspectionHook: Send {
    /// Called at the beginning of each step.
    fn on_timestep_begin(&mut self, timestep: u32, sim_time: f32) {
        let _ = (timestep, sim_time);
    }

    /// Called after the ship's strain pass.
    fn on_strain(&mut self, timestep: u32, broken: usize, newly_stressed: usize) {
        let _ = (timestep, broken, newly_stressed);
    }

    /// Called at the end of each step with the step's wall time (s).
    fn on_timestep_end(&mut self, timestep: u32, wall_time: f64) {
        let _ = (timestep, wall_time);
    }

    /// Called when the simulation completes.
    fn on_simulation_end(&mut self) {}

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Hook that turns step boundaries into telemetry events.
///
/// Events are buffered; the owner drains them into an
/// [`EventBus`](seaworthy_telemetry::EventBus).
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
}

impl TelemetryHook {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for TelemetryHook {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionHook for TelemetryHook {
    fn on_timestep_begin(&mut self, timestep: u32, sim_time: f32) {
        self.events.push(SimulationEvent::new(
            timestep,
            EventKind::TimestepBegin { sim_time },
        ));
    }

    fn on_timestep_end(&mut self, timestep: u32, wall_time: f64) {
        self.events.push(SimulationEvent::new(
            timestep,
            EventKind::TimestepEnd { wall_time },
        ));
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}

/// Running totals of strain activity.
#[derive(Debug, Clone, Default)]
pub struct BreakageTally {
    pub steps: u32,
    pub broken: usize,
    pub newly_stressed: usize,
    /// First step that broke a spring.
    pub first_break: Option<u32>,
}

impl InspectionHook for BreakageTally {
    fn on_strain(&mut self, timestep: u32, broken: usize, newly_stressed: usize) {
        self.steps += 1;
        self.broken += broken;
        self.newly_stressed += newly_stressed;
        if broken > 0 && self.first_break.is_none() {
            self.first_break = Some(timestep);
        }
    }

    fn on_simulation_end(&mut self) {
        tracing::debug!(
            steps = self.steps,
            broken = self.broken,
            stressed = self.newly_stressed,
            "breakage tally"
        );
    }

    fn name(&self) -> &str {
        "breakage_tally"
    }
}
