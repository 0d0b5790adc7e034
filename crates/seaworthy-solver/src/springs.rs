//! Spring buffers and the per-spring lifecycle operations.
//!
//! Springs are never removed from the buffers. A destroyed spring keeps
//! its slot with zeroed coefficients and its deleted flag set; restoring
//! it recomputes everything from scratch.

use seaworthy_material::MaterialDatabase;
use seaworthy_math::Vec2;
use seaworthy_telemetry::{EventBus, EventKind};
use seaworthy_types::{MaterialId, PointId, SimulationParameters, SpringId, TriangleId};

use crate::coefficients::{self, SpringCoefficients, SpringInputs};
use crate::points::Points;
use crate::triangles::Triangles;

/// Width of the data-parallel batches springs are processed in.
pub const SPRING_BATCH_SIZE: usize = 4;

/// Relative gap below which a filtered stiffness counts as converged.
const STIFFNESS_CONVERGENCE_TOLERANCE: f32 = 1.0e-4;

/// Strain state of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrainState {
    Unstressed,
    Stressed,
    Destroyed,
}

/// SoA spring buffers.
#[derive(Debug, Clone, Default)]
pub struct Springs {
    // ─── Endpoints ───
    endpoint_a: Vec<PointId>,
    endpoint_b: Vec<PointId>,

    // ─── Geometry ───
    factory_rest_length: Vec<f32>,
    rest_length: Vec<f32>,
    /// Cached at the last length update.
    length: Vec<f32>,
    /// Unit vector from A to B, cached with `length`.
    direction: Vec<Vec2>,

    // ─── Coefficients ───
    pub(crate) stiffness: Vec<f32>,
    pub(crate) damping: Vec<f32>,
    breaking_elongation: Vec<f32>,

    // ─── Material ───
    base_material: Vec<MaterialId>,
    material_stiffness: Vec<f32>,
    material_strength: Vec<f32>,
    melting_temperature: Vec<f32>,
    strain_threshold_fraction: Vec<f32>,
    water_permeability: Vec<f32>,
    thermal_conductivity: Vec<f32>,
    is_rope: Vec<bool>,

    // ─── State ───
    pub(crate) is_stressed: Vec<bool>,
    is_deleted: Vec<bool>,
    triangles: Vec<Vec<TriangleId>>,
}

impl Springs {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            endpoint_a: Vec::with_capacity(capacity),
            endpoint_b: Vec::with_capacity(capacity),
            factory_rest_length: Vec::with_capacity(capacity),
            rest_length: Vec::with_capacity(capacity),
            length: Vec::with_capacity(capacity),
            direction: Vec::with_capacity(capacity),
            stiffness: Vec::with_capacity(capacity),
            damping: Vec::with_capacity(capacity),
            breaking_elongation: Vec::with_capacity(capacity),
            base_material: Vec::with_capacity(capacity),
            material_stiffness: Vec::with_capacity(capacity),
            material_strength: Vec::with_capacity(capacity),
            melting_temperature: Vec::with_capacity(capacity),
            strain_threshold_fraction: Vec::with_capacity(capacity),
            water_permeability: Vec::with_capacity(capacity),
            thermal_conductivity: Vec::with_capacity(capacity),
            is_rope: Vec::with_capacity(capacity),
            is_stressed: Vec::with_capacity(capacity),
            is_deleted: Vec::with_capacity(capacity),
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Connects two points with a spring at their current distance.
    ///
    /// The base material is the weaker endpoint's. Coefficients are
    /// computed immediately, without smoothing.
    pub fn add(
        &mut self,
        a: PointId,
        b: PointId,
        points: &mut Points,
        materials: &MaterialDatabase,
        params: &SimulationParameters,
    ) -> SpringId {
        debug_assert_ne!(a, b);
        let id = SpringId(self.endpoint_a.len() as u32);

        let material_a = materials.get(points.material(a));
        let material_b = materials.get(points.material(b));
        let (base_id, base) = if material_b.strength < material_a.strength {
            (points.material(b), material_b)
        } else {
            (points.material(a), material_a)
        };

        let delta = points.position(b) - points.position(a);
        let length = delta.length();
        debug_assert!(length > 0.0, "spring endpoints coincide");

        self.endpoint_a.push(a);
        self.endpoint_b.push(b);
        self.factory_rest_length.push(length);
        self.rest_length.push(length);
        self.length.push(length);
        self.direction.push(delta.normalize_or_zero());
        self.stiffness.push(0.0);
        self.damping.push(0.0);
        self.breaking_elongation.push(0.0);
        self.base_material.push(base_id);
        self.material_stiffness.push(base.stiffness);
        self.material_strength.push(base.strength);
        self.melting_temperature.push(base.melting_temperature);
        self.strain_threshold_fraction.push(base.strain_threshold_fraction);
        self.water_permeability
            .push(if points.is_hull(a) || points.is_hull(b) { 0.0 } else { 1.0 });
        self.thermal_conductivity
            .push((material_a.thermal_conductivity + material_b.thermal_conductivity) * 0.5);
        self.is_rope.push(points.is_rope(a) && points.is_rope(b));
        self.is_stressed.push(false);
        self.is_deleted.push(false);
        self.triangles.push(Vec::new());

        self.set_coefficients(id, coefficients::compute(&self.inputs(id, points), params));

        points.connect_spring(a, id);
        points.connect_spring(b, id);

        id
    }

    pub(crate) fn add_triangle(&mut self, id: SpringId, triangle: TriangleId) {
        self.triangles[id.index()].push(triangle);
    }

    /// Total number of springs, including deleted ones.
    pub fn count(&self) -> usize {
        self.endpoint_a.len()
    }

    /// Ids of springs that are not deleted.
    pub fn live(&self) -> impl Iterator<Item = SpringId> + '_ {
        self.is_deleted
            .iter()
            .enumerate()
            .filter(|&(_, &deleted)| !deleted)
            .map(|(i, _)| SpringId(i as u32))
    }

    // ─── Endpoint queries ───

    #[inline]
    pub fn endpoint_a(&self, id: SpringId) -> PointId {
        self.endpoint_a[id.index()]
    }

    #[inline]
    pub fn endpoint_b(&self, id: SpringId) -> PointId {
        self.endpoint_b[id.index()]
    }

    /// The endpoint that is not `point`.
    pub fn other_endpoint(&self, id: SpringId, point: PointId) -> PointId {
        let (a, b) = (self.endpoint_a(id), self.endpoint_b(id));
        debug_assert!(point == a || point == b);
        if point == a {
            b
        } else {
            a
        }
    }

    // ─── Geometry ───

    pub fn factory_rest_length(&self, id: SpringId) -> f32 {
        self.factory_rest_length[id.index()]
    }

    pub fn rest_length(&self, id: SpringId) -> f32 {
        self.rest_length[id.index()]
    }

    /// Length at the last length update.
    pub fn length(&self, id: SpringId) -> f32 {
        self.length[id.index()]
    }

    pub fn direction(&self, id: SpringId) -> Vec2 {
        self.direction[id.index()]
    }

    /// Signed elongation at the last length update.
    pub fn strain(&self, id: SpringId) -> f32 {
        self.length[id.index()] - self.rest_length[id.index()]
    }

    // ─── Coefficients ───

    pub fn coefficients(&self, id: SpringId) -> SpringCoefficients {
        SpringCoefficients {
            stiffness: self.stiffness[id.index()],
            damping: self.damping[id.index()],
            breaking_elongation: self.breaking_elongation[id.index()],
        }
    }

    pub fn stiffness(&self, id: SpringId) -> f32 {
        self.stiffness[id.index()]
    }

    pub fn damping(&self, id: SpringId) -> f32 {
        self.damping[id.index()]
    }

    pub fn breaking_elongation(&self, id: SpringId) -> f32 {
        self.breaking_elongation[id.index()]
    }

    // ─── Material ───

    /// The weaker of the two endpoint materials.
    pub fn base_material(&self, id: SpringId) -> MaterialId {
        self.base_material[id.index()]
    }

    pub fn strain_threshold_fraction(&self, id: SpringId) -> f32 {
        self.strain_threshold_fraction[id.index()]
    }

    /// 0.0 if either endpoint is hull, 1.0 otherwise.
    pub fn water_permeability(&self, id: SpringId) -> f32 {
        self.water_permeability[id.index()]
    }

    pub fn thermal_conductivity(&self, id: SpringId) -> f32 {
        self.thermal_conductivity[id.index()]
    }

    /// True if both endpoints are rope.
    pub fn is_rope(&self, id: SpringId) -> bool {
        self.is_rope[id.index()]
    }

    // ─── State ───

    pub fn is_stressed(&self, id: SpringId) -> bool {
        self.is_stressed[id.index()]
    }

    #[inline]
    pub fn is_deleted(&self, id: SpringId) -> bool {
        self.is_deleted[id.index()]
    }

    pub fn strain_state(&self, id: SpringId) -> StrainState {
        if self.is_deleted(id) {
            StrainState::Destroyed
        } else if self.is_stressed(id) {
            StrainState::Stressed
        } else {
            StrainState::Unstressed
        }
    }

    /// Triangles having this spring as an edge.
    pub fn triangles(&self, id: SpringId) -> &[TriangleId] {
        &self.triangles[id.index()]
    }

    // ─── Per-step updates ───

    /// Recomputes cached lengths and directions from point positions,
    /// in batches of [`SPRING_BATCH_SIZE`].
    pub fn update_lengths(&mut self, points: &Points) {
        let n = self.count();
        for start in (0..n).step_by(SPRING_BATCH_SIZE) {
            for i in start..(start + SPRING_BATCH_SIZE).min(n) {
                let delta =
                    points.position(self.endpoint_b[i]) - points.position(self.endpoint_a[i]);
                let length = delta.length();
                self.length[i] = length;
                self.direction[i] = if length > 0.0 { delta / length } else { Vec2::ZERO };
            }
        }
    }

    /// Grows the rest length of overheated springs toward their current
    /// length. Returns true if any rest length changed.
    pub fn update_for_melting(&mut self, points: &Points, params: &SimulationParameters) -> bool {
        let mut changed = false;

        for i in 0..self.count() {
            if self.is_deleted[i] {
                continue;
            }
            let temperature = (points.temperature(self.endpoint_a[i])
                + points.temperature(self.endpoint_b[i]))
                * 0.5;
            let progress = coefficients::melt_progress(
                temperature,
                self.melting_temperature[i],
                params.melting_temperature_adjustment,
            );
            if progress <= 0.0 {
                continue;
            }

            let rest = coefficients::melted_rest_length(
                self.rest_length[i],
                self.length[i],
                self.factory_rest_length[i],
            );
            if rest != self.rest_length[i] {
                self.rest_length[i] = rest;
                changed = true;
            }
        }

        changed
    }

    /// Recomputes the coefficients of every live spring.
    ///
    /// With `smooth` set, stiffness increases are low-pass filtered;
    /// otherwise every coefficient jumps to its target. Returns true while
    /// some stiffness is still climbing toward its target.
    pub fn recalculate_coefficients(
        &mut self,
        points: &Points,
        params: &SimulationParameters,
        smooth: bool,
    ) -> bool {
        let mut converging = false;

        for i in 0..self.count() {
            if self.is_deleted[i] {
                continue;
            }
            let id = SpringId(i as u32);
            let mut target = coefficients::compute(&self.inputs(id, points), params);
            if smooth {
                let filtered = coefficients::filter_stiffness(self.stiffness[i], target.stiffness);
                converging |=
                    target.stiffness - filtered > STIFFNESS_CONVERGENCE_TOLERANCE * target.stiffness;
                target.stiffness = filtered;
            }
            self.set_coefficients(id, target);
        }

        converging
    }

    // ─── Lifecycle ───

    /// Destroys a spring: zeroes its coefficients, marks it deleted,
    /// detaches it from its endpoints and destroys the triangles using it.
    ///
    /// Returns false if the spring was already destroyed.
    pub fn destroy(
        &mut self,
        id: SpringId,
        points: &mut Points,
        triangles: &mut Triangles,
        materials: &MaterialDatabase,
        events: &EventBus,
    ) -> bool {
        let i = id.index();
        if self.is_deleted[i] {
            return false;
        }

        let (a, b) = (self.endpoint_a[i], self.endpoint_b[i]);
        let midpoint = (points.position(a) + points.position(b)) * 0.5;

        self.set_coefficients(id, SpringCoefficients::ZERO);
        self.is_stressed[i] = false;
        self.is_deleted[i] = true;

        points.disconnect_spring(a, id);
        points.disconnect_spring(b, id);

        events.notify(EventKind::SpringBroken {
            spring: id,
            material: materials.get(self.base_material[i]).name.clone(),
            position: midpoint.to_array(),
        });

        for &t in &self.triangles[i] {
            triangles.destroy(t, events);
        }

        true
    }

    /// Restores a destroyed spring with coefficients computed from scratch.
    ///
    /// Both endpoints must be alive. Destroyed triangles stay destroyed.
    pub fn restore(
        &mut self,
        id: SpringId,
        points: &mut Points,
        params: &SimulationParameters,
        events: &EventBus,
    ) {
        let i = id.index();
        debug_assert!(self.is_deleted[i], "restoring a live spring");
        let (a, b) = (self.endpoint_a[i], self.endpoint_b[i]);
        debug_assert!(!points.is_deleted(a) && !points.is_deleted(b));
        if !self.is_deleted[i] {
            return;
        }

        self.is_deleted[i] = false;
        self.is_stressed[i] = false;

        let delta = points.position(b) - points.position(a);
        self.length[i] = delta.length();
        self.direction[i] = delta.normalize_or_zero();
        self.set_coefficients(id, coefficients::compute(&self.inputs(id, points), params));

        points.connect_spring(a, id);
        points.connect_spring(b, id);

        events.notify(EventKind::SpringRestored { spring: id });
    }

    fn set_coefficients(&mut self, id: SpringId, c: SpringCoefficients) {
        let i = id.index();
        self.stiffness[i] = c.stiffness;
        self.damping[i] = c.damping;
        self.breaking_elongation[i] = c.breaking_elongation;
    }

    fn inputs(&self, id: SpringId, points: &Points) -> SpringInputs {
        let i = id.index();
        let (a, b) = (self.endpoint_a[i], self.endpoint_b[i]);
        SpringInputs {
            mass_a: points.mass(a),
            mass_b: points.mass(b),
            material_stiffness: self.material_stiffness[i],
            material_strength: self.material_strength[i],
            melting_temperature: self.melting_temperature[i],
            temperature: (points.temperature(a) + points.temperature(b)) * 0.5,
            decay: (points.decay(a) + points.decay(b)) * 0.5,
            personality: (points.personality_seed(a) + points.personality_seed(b)) * 0.5,
            rest_length: self.rest_length[i],
        }
    }
}
