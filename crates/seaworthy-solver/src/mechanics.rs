//! Mechanical integrator.
//!
//! Each step runs `num_mechanical_dynamics_iterations` sub-iterations of
//! semi-implicit Euler over the point buffers:
//!
//! 1. Gravity and buoyancy against the sea surface
//! 2. Spring forces: stiffness × elongation plus damping × relative
//!    velocity, along the spring direction
//! 3. Velocity integration with water drag and global damping
//! 4. Position integration
//!
//! The sea surface is sampled once per step; it does not move between
//! sub-iterations.

use seaworthy_math::Vec2;
use seaworthy_types::constants::WATER_DENSITY;
use seaworthy_types::{PointId, SeaSurface, SimulationParameters};

use crate::points::Points;
use crate::springs::Springs;

/// Volume of water a fully buoyant point displaces (m³).
pub const POINT_VOLUME: f32 = 1.0;

/// Depth over which buoyancy ramps from zero to full (m).
pub const BUOYANCY_RAMP_DEPTH: f32 = 1.0;

/// Fraction of velocity removed per second in water.
pub const WATER_DRAG: f32 = 0.6;

/// Ocean displacement per unit of vertical speed when a point crosses
/// the surface (m per m/s).
pub const IMPACT_DISPLACEMENT_FACTOR: f32 = 0.02;

/// Largest ocean displacement a single point produces in one step (m).
pub const MAX_IMPACT_DISPLACEMENT: f32 = 0.5;

/// A push a point gave the sea surface while crossing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanDisplacement {
    /// World X of the crossing.
    pub x: f32,
    /// Height change requested at `x` (m, negative depresses).
    pub dy: f32,
}

/// Integrator scratch buffers.
#[derive(Debug, Clone, Default)]
pub struct Mechanics {
    sea_height: Vec<f32>,
    submersion: Vec<f32>,
    was_underwater: Vec<bool>,
}

impl Mechanics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the points by one simulation step.
    ///
    /// Returns the displacements of points that crossed the surface.
    pub fn step(
        &mut self,
        points: &mut Points,
        springs: &Springs,
        params: &SimulationParameters,
        sea: &dyn SeaSurface,
    ) -> Vec<OceanDisplacement> {
        let n = points.count();
        self.sea_height.resize(n, 0.0);
        self.submersion.resize(n, 0.0);
        self.was_underwater.resize(n, false);

        for i in 0..n {
            let position = points.positions()[i];
            let h = sea.height_at(position.x);
            self.sea_height[i] = h;
            self.was_underwater[i] = position.y < h;
        }

        let dt = params.mechanical_dt();
        for _ in 0..params.num_mechanical_dynamics_iterations {
            self.accumulate_forces(points, springs, params);
            self.integrate(points, params, dt);
        }

        self.collect_displacements(points)
    }

    fn accumulate_forces(
        &mut self,
        points: &mut Points,
        springs: &Springs,
        params: &SimulationParameters,
    ) {
        let water_weight =
            WATER_DENSITY * params.water_density_adjustment * params.gravity * POINT_VOLUME;

        // Gravity and buoyancy
        for i in 0..points.count() {
            let id = PointId(i as u32);
            let mass = points.mass(id);
            let fill = points.buoyancy_volume_fill(id);
            let depth = self.sea_height[i] - points.positions()[i].y;
            let submersion = (depth / BUOYANCY_RAMP_DEPTH).clamp(0.0, 1.0);
            self.submersion[i] = submersion;

            points.force[i] =
                Vec2::new(0.0, -params.gravity * mass + fill * water_weight * submersion);
        }

        // Springs
        for s in springs.live() {
            let a = springs.endpoint_a(s);
            let b = springs.endpoint_b(s);
            let delta = points.position(b) - points.position(a);
            let length = delta.length();
            if length <= 0.0 {
                continue;
            }
            let dir = delta / length;
            let elongation = length - springs.rest_length(s);
            let relative_velocity = (points.velocity(b) - points.velocity(a)).dot(dir);

            let f = dir
                * (springs.stiffness[s.index()] * elongation
                    + springs.damping[s.index()] * relative_velocity);

            points.force[a.index()] += f;
            points.force[b.index()] -= f;
        }
    }

    fn integrate(&self, points: &mut Points, params: &SimulationParameters, dt: f32) {
        let n = points.count();
        let global_retention = 1.0 - params.global_damping;

        for i in 0..n {
            let id = PointId(i as u32);
            if points.is_deleted(id) || points.is_pinned(id) {
                continue;
            }
            let inv_mass = 1.0 / points.mass(id);
            let drag_retention = (1.0 - WATER_DRAG * self.submersion[i] * dt).max(0.0);

            let (position, velocity, force) = points.kinematics_mut();
            let v = (velocity[i] + force[i] * inv_mass * dt) * drag_retention * global_retention;
            velocity[i] = v;
            position[i] += v * dt;
        }
    }

    fn collect_displacements(&self, points: &Points) -> Vec<OceanDisplacement> {
        let mut displacements = Vec::new();

        for id in points.live() {
            let i = id.index();
            let position = points.position(id);
            let is_underwater = position.y < self.sea_height[i];
            if is_underwater == self.was_underwater[i] {
                continue;
            }

            let dy = (points.velocity(id).y * IMPACT_DISPLACEMENT_FACTOR)
                .clamp(-MAX_IMPACT_DISPLACEMENT, MAX_IMPACT_DISPLACEMENT);
            if dy != 0.0 {
                displacements.push(OceanDisplacement { x: position.x, dy });
            }
        }

        displacements
    }
}
