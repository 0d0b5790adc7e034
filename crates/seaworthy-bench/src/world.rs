//! The coupled world: one ship floating on one ocean.
//!
//! # Step order
//!
//! ```text
//! hooks: on_timestep_begin
//! clock tick, sim_time += dt
//! ocean.update        (abnormal waves, interactive waves, SWE, samples)
//! ship.update         (buoyancy queries read the updated ocean)
//! ship displacements  → ocean.displace_at  (applied next ocean update)
//! hooks: on_strain, on_timestep_end
//! event bus flush
//! ```

use std::time::{Duration, Instant};

use seaworthy_debug::{InspectionHook, StateSnapshot};
use seaworthy_material::MaterialDatabase;
use seaworthy_math::{RandomEngine, Vec2};
use seaworthy_ocean::{OceanSurface, WindState};
use seaworthy_solver::{Ship, StrainReport};
use seaworthy_structure::StructureLayer;
use seaworthy_telemetry::{EventBus, EventSink};
use seaworthy_types::{
    ManualWallClock, PointId, SeaworthyResult, SimulationParameters, SystemWallClock, WallClock,
};

/// Wall-clock source of a world.
#[derive(Debug, Clone, Copy)]
pub enum WorldClock {
    /// Real time; abnormal wave cadence follows the host clock.
    Realtime(SystemWallClock),
    /// Advances by exactly one step duration per step. Deterministic.
    Lockstep(ManualWallClock),
}

impl WorldClock {
    pub fn realtime() -> Self {
        WorldClock::Realtime(SystemWallClock::new())
    }

    pub fn lockstep() -> Self {
        WorldClock::Lockstep(ManualWallClock::new())
    }

    fn tick(&mut self, dt: f32) {
        if let WorldClock::Lockstep(clock) = self {
            clock.advance(Duration::from_secs_f32(dt));
        }
    }
}

impl WallClock for WorldClock {
    fn now(&self) -> Duration {
        match self {
            WorldClock::Realtime(clock) => clock.now(),
            WorldClock::Lockstep(clock) => clock.now(),
        }
    }
}

/// What one world step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub strain: StrainReport,
    /// Host time spent in the step (s).
    pub wall_time: f64,
    /// Events delivered to sinks.
    pub events: usize,
}

/// A ship, the ocean it floats on, and everything they share.
pub struct World {
    ship: Ship,
    ocean: OceanSurface,
    params: SimulationParameters,
    wind: WindState,
    rng: RandomEngine,
    clock: WorldClock,
    events: EventBus,
    hooks: Vec<Box<dyn InspectionHook>>,
    timestep: u32,
    sim_time: f32,
}

impl World {
    /// Builds a ship from `layer` and launches it on a calm ocean.
    ///
    /// All randomness, ship and ocean alike, comes from one engine
    /// seeded with `seed`.
    pub fn build(
        layer: &StructureLayer,
        materials: &MaterialDatabase,
        params: SimulationParameters,
        wind: WindState,
        seed: u64,
        clock: WorldClock,
    ) -> SeaworthyResult<Self> {
        params.validate()?;
        let mut rng = RandomEngine::seeded(seed);
        let ship = Ship::build(layer, materials, &params, &mut rng)?;
        let ocean = OceanSurface::new(&params, &wind, clock.now(), &mut rng);

        Ok(Self {
            ship,
            ocean,
            params,
            wind,
            rng,
            clock,
            events: EventBus::new(),
            hooks: Vec::new(),
            timestep: 0,
            sim_time: 0.0,
        })
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.events.add_sink(sink);
    }

    pub fn add_hook(&mut self, hook: Box<dyn InspectionHook>) {
        tracing::debug!(hook = hook.name(), "inspection hook added");
        self.hooks.push(hook);
    }

    /// Advances ocean and ship by one step.
    pub fn step(&mut self) -> StepOutcome {
        let started = Instant::now();
        let timestep = self.timestep;
        let dt = self.params.simulation_step_duration;

        self.events.begin_timestep(timestep);
        for hook in &mut self.hooks {
            hook.on_timestep_begin(timestep, self.sim_time);
        }

        self.clock.tick(dt);
        self.sim_time += dt;

        self.ocean.update(
            self.sim_time,
            self.clock.now(),
            &self.params,
            &self.wind,
            &mut self.rng,
            &self.events,
        );
        let strain = self.ship.update(&self.params, &self.ocean, &self.events);
        for displacement in self.ship.take_ocean_displacements() {
            self.ocean.displace_at(displacement.x, displacement.dy);
        }

        let wall_time = started.elapsed().as_secs_f64();
        for hook in &mut self.hooks {
            hook.on_strain(timestep, strain.broken, strain.newly_stressed);
            hook.on_timestep_end(timestep, wall_time);
        }

        let events = self.events.flush();
        self.timestep += 1;

        StepOutcome {
            strain,
            wall_time,
            events,
        }
    }

    /// Runs `steps` steps and returns their outcomes.
    pub fn run(&mut self, steps: u32) -> Vec<StepOutcome> {
        (0..steps).map(|_| self.step()).collect()
    }

    /// Ends the run: notifies hooks and finalizes sinks.
    pub fn finish(&mut self) {
        for hook in &mut self.hooks {
            hook.on_simulation_end();
        }
        self.events.finalize();
    }

    /// Replaces the simulation parameters. Invalid parameters are
    /// rejected and the current ones kept.
    pub fn set_params(&mut self, params: SimulationParameters) -> SeaworthyResult<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn set_wind(&mut self, wind: WindState) {
        self.wind = wind;
    }

    pub fn trigger_tsunami(&mut self) -> f32 {
        self.ocean.trigger_tsunami(&mut self.rng, &self.events)
    }

    pub fn trigger_rogue_wave(&mut self) -> f32 {
        self.ocean.trigger_rogue_wave(&mut self.rng, &self.events)
    }

    /// Pulls the ocean surface toward a world position.
    pub fn adjust_ocean_to(&mut self, position: Vec2, radius: f32) {
        self.ocean.adjust_to(position, radius);
    }

    /// Captures ship points and ocean samples.
    pub fn snapshot(&self) -> StateSnapshot {
        let points = self.ship.points();
        StateSnapshot::capture(
            self.timestep,
            self.sim_time,
            points.positions(),
            points.velocities(),
            (0..points.count()).map(|i| points.is_deleted(PointId(i as u32))),
            self.ocean.samples().iter().map(|s| s.value),
        )
    }

    // ─── Accessors ───

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn ocean(&self) -> &OceanSurface {
        &self.ocean
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn wind(&self) -> WindState {
        self.wind
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn timestep(&self) -> u32 {
        self.timestep
    }

    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }

    /// Current wall-clock reading.
    pub fn wall_now(&self) -> Duration {
        self.clock.now()
    }
}
