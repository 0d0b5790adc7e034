//! Point buffers: one entry per structural point, SoA layout.
//!
//! Points are never removed from the buffers; destroying a point only
//! sets its deleted flag, so every [`PointId`] stays valid.

use seaworthy_material::StructuralMaterial;
use seaworthy_math::{RandomEngine, Vec2};
use seaworthy_types::{MaterialId, PointId, SpringId};

/// Temperature of a freshly built point (K).
pub const AMBIENT_TEMPERATURE: f32 = 298.15;

/// SoA point buffers.
///
/// # Layout
///
/// All arrays have length `count()`:
/// ```text
/// position: [p0, p1, p2, ...]
/// velocity: [v0, v1, v2, ...]
/// ...
/// ```
#[derive(Debug, Clone, Default)]
pub struct Points {
    // ─── Kinematics ───
    position: Vec<Vec2>,
    velocity: Vec<Vec2>,
    /// Force accumulator, cleared every mechanical sub-iteration.
    pub(crate) force: Vec<Vec2>,

    // ─── Material ───
    material: Vec<MaterialId>,
    material_mass: Vec<f32>,
    mass_augmentation: Vec<f32>,
    buoyancy_volume_fill: Vec<f32>,
    is_hull: Vec<bool>,
    is_rope: Vec<bool>,

    // ─── Dynamic state ───
    temperature: Vec<f32>,
    decay: Vec<f32>,
    /// Random in `[-1, 1)`, fixed at creation.
    personality_seed: Vec<f32>,
    /// Signed strain ratio of the most strained connected spring.
    stress: Vec<f32>,
    is_pinned: Vec<bool>,
    is_deleted: Vec<bool>,

    // ─── Connectivity ───
    connected_springs: Vec<Vec<SpringId>>,

    /// Set when a temperature, decay or mass changes; spring coefficients
    /// depending on them are stale.
    coefficients_dirty: bool,
}

impl Points {
    /// Creates empty buffers with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            position: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            force: Vec::with_capacity(capacity),
            material: Vec::with_capacity(capacity),
            material_mass: Vec::with_capacity(capacity),
            mass_augmentation: Vec::with_capacity(capacity),
            buoyancy_volume_fill: Vec::with_capacity(capacity),
            is_hull: Vec::with_capacity(capacity),
            is_rope: Vec::with_capacity(capacity),
            temperature: Vec::with_capacity(capacity),
            decay: Vec::with_capacity(capacity),
            personality_seed: Vec::with_capacity(capacity),
            stress: Vec::with_capacity(capacity),
            is_pinned: Vec::with_capacity(capacity),
            is_deleted: Vec::with_capacity(capacity),
            connected_springs: Vec::with_capacity(capacity),
            coefficients_dirty: false,
        }
    }

    /// Appends a point at rest and returns its id.
    pub fn add(
        &mut self,
        position: Vec2,
        material_id: MaterialId,
        material: &StructuralMaterial,
        rng: &mut RandomEngine,
    ) -> PointId {
        let id = PointId(self.position.len() as u32);

        self.position.push(position);
        self.velocity.push(Vec2::ZERO);
        self.force.push(Vec2::ZERO);
        self.material.push(material_id);
        self.material_mass.push(material.mass);
        self.mass_augmentation.push(0.0);
        self.buoyancy_volume_fill.push(material.buoyancy_volume_fill);
        self.is_hull.push(material.is_hull);
        self.is_rope.push(material.is_rope);
        self.temperature.push(AMBIENT_TEMPERATURE);
        self.decay.push(1.0);
        self.personality_seed.push(rng.uniform(-1.0, 1.0));
        self.stress.push(0.0);
        self.is_pinned.push(false);
        self.is_deleted.push(false);
        self.connected_springs.push(Vec::new());

        id
    }

    /// Total number of points, including deleted ones.
    pub fn count(&self) -> usize {
        self.position.len()
    }

    /// Ids of points that are not deleted.
    pub fn live(&self) -> impl Iterator<Item = PointId> + '_ {
        self.is_deleted
            .iter()
            .enumerate()
            .filter(|&(_, &deleted)| !deleted)
            .map(|(i, _)| PointId(i as u32))
    }

    // ─── Kinematics ───

    #[inline]
    pub fn position(&self, id: PointId) -> Vec2 {
        self.position[id.index()]
    }

    pub fn set_position(&mut self, id: PointId, position: Vec2) {
        self.position[id.index()] = position;
    }

    #[inline]
    pub fn velocity(&self, id: PointId) -> Vec2 {
        self.velocity[id.index()]
    }

    pub fn set_velocity(&mut self, id: PointId, velocity: Vec2) {
        self.velocity[id.index()] = velocity;
    }

    /// All positions, indexed by point.
    pub fn positions(&self) -> &[Vec2] {
        &self.position
    }

    pub fn velocities(&self) -> &[Vec2] {
        &self.velocity
    }

    pub(crate) fn kinematics_mut(&mut self) -> (&mut [Vec2], &mut [Vec2], &mut [Vec2]) {
        (&mut self.position, &mut self.velocity, &mut self.force)
    }

    // ─── Material ───

    pub fn material(&self, id: PointId) -> MaterialId {
        self.material[id.index()]
    }

    /// Material mass plus dynamic augmentation (kg).
    #[inline]
    pub fn mass(&self, id: PointId) -> f32 {
        self.material_mass[id.index()] + self.mass_augmentation[id.index()]
    }

    pub fn buoyancy_volume_fill(&self, id: PointId) -> f32 {
        self.buoyancy_volume_fill[id.index()]
    }

    pub fn is_hull(&self, id: PointId) -> bool {
        self.is_hull[id.index()]
    }

    pub fn is_rope(&self, id: PointId) -> bool {
        self.is_rope[id.index()]
    }

    // ─── Dynamic state ───

    pub fn temperature(&self, id: PointId) -> f32 {
        self.temperature[id.index()]
    }

    pub fn set_temperature(&mut self, id: PointId, temperature: f32) {
        self.temperature[id.index()] = temperature;
        self.coefficients_dirty = true;
    }

    pub fn decay(&self, id: PointId) -> f32 {
        self.decay[id.index()]
    }

    /// Sets decay. Range: 0.0–1.0 (1.0 = pristine).
    pub fn set_decay(&mut self, id: PointId, decay: f32) {
        debug_assert!((0.0..=1.0).contains(&decay));
        self.decay[id.index()] = decay;
        self.coefficients_dirty = true;
    }

    pub fn mass_augmentation(&self, id: PointId) -> f32 {
        self.mass_augmentation[id.index()]
    }

    /// Sets extra mass carried by the point, e.g. absorbed water (kg).
    pub fn set_mass_augmentation(&mut self, id: PointId, augmentation: f32) {
        debug_assert!(augmentation >= 0.0);
        self.mass_augmentation[id.index()] = augmentation;
        self.coefficients_dirty = true;
    }

    pub fn personality_seed(&self, id: PointId) -> f32 {
        self.personality_seed[id.index()]
    }

    /// Signed strain ratio of the most strained connected spring.
    pub fn stress(&self, id: PointId) -> f32 {
        self.stress[id.index()]
    }

    pub(crate) fn stress_mut(&mut self) -> &mut [f32] {
        &mut self.stress
    }

    pub fn is_pinned(&self, id: PointId) -> bool {
        self.is_pinned[id.index()]
    }

    /// Pins or unpins a point. Pinned points are not integrated.
    pub fn set_pinned(&mut self, id: PointId, pinned: bool) {
        self.is_pinned[id.index()] = pinned;
        if pinned {
            self.velocity[id.index()] = Vec2::ZERO;
        }
    }

    #[inline]
    pub fn is_deleted(&self, id: PointId) -> bool {
        self.is_deleted[id.index()]
    }

    /// Marks a point deleted. Callers detach its springs first.
    pub(crate) fn mark_deleted(&mut self, id: PointId) {
        debug_assert!(self.connected_springs[id.index()].is_empty());
        self.is_deleted[id.index()] = true;
        self.velocity[id.index()] = Vec2::ZERO;
        self.stress[id.index()] = 0.0;
    }

    // ─── Connectivity ───

    /// Springs currently attached to the point.
    pub fn connected_springs(&self, id: PointId) -> &[SpringId] {
        &self.connected_springs[id.index()]
    }

    pub(crate) fn connect_spring(&mut self, id: PointId, spring: SpringId) {
        let list = &mut self.connected_springs[id.index()];
        debug_assert!(!list.contains(&spring));
        list.push(spring);
    }

    pub(crate) fn disconnect_spring(&mut self, id: PointId, spring: SpringId) {
        let list = &mut self.connected_springs[id.index()];
        if let Some(pos) = list.iter().position(|&s| s == spring) {
            list.swap_remove(pos);
        }
    }

    /// Returns and clears the stale-coefficients flag.
    pub(crate) fn take_coefficients_dirty(&mut self) -> bool {
        std::mem::take(&mut self.coefficients_dirty)
    }
}
