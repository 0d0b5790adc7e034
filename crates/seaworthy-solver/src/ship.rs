//! A simulated ship: its points, springs and triangles, stepped together.

use seaworthy_material::MaterialDatabase;
use seaworthy_math::{RandomEngine, Vec2};
use seaworthy_structure::{StructureLayer, StructureTopology};
use seaworthy_telemetry::{EventBus, EventKind};
use seaworthy_types::{
    PointId, SeaSurface, SeaworthyError, SeaworthyResult, SimulationParameters, SpringId,
    TriangleId,
};

use crate::mechanics::{Mechanics, OceanDisplacement};
use crate::points::Points;
use crate::springs::Springs;
use crate::strain::StrainReport;
use crate::triangles::Triangles;

/// A ship built from a structure layer.
///
/// # Step order
///
/// ```text
/// parameters changed?  → recompute coefficients (smoothed)
/// mechanics            → positions, velocities, ocean displacements
/// spring lengths       → batches of 4
/// melting              → rest length growth
/// coefficients stale?  → recompute (smoothed)
/// strain pass          → stress, breakage, events
/// ```
#[derive(Debug, Clone)]
pub struct Ship {
    materials: MaterialDatabase,
    points: Points,
    springs: Springs,
    triangles: Triangles,
    mechanics: Mechanics,
    /// Parameters the current coefficients were computed from.
    cached_params: SimulationParameters,
    /// Set while filtered stiffnesses are still climbing.
    stiffness_converging: bool,
    ocean_displacements: Vec<OceanDisplacement>,
}

impl Ship {
    /// Builds a ship from a structure layer.
    pub fn build(
        layer: &StructureLayer,
        materials: &MaterialDatabase,
        params: &SimulationParameters,
        rng: &mut RandomEngine,
    ) -> SeaworthyResult<Self> {
        let topology = StructureTopology::build(layer)?;
        Self::from_topology(&topology, materials, params, rng)
    }

    /// Builds a ship from a prebuilt topology.
    ///
    /// Fails if the parameters are invalid, or if the topology references
    /// a material missing from the database or an invalid material.
    pub fn from_topology(
        topology: &StructureTopology,
        materials: &MaterialDatabase,
        params: &SimulationParameters,
        rng: &mut RandomEngine,
    ) -> SeaworthyResult<Self> {
        params.validate()?;

        let mut points = Points::with_capacity(topology.point_count());
        for spec in &topology.points {
            if spec.material.index() >= materials.len() {
                return Err(SeaworthyError::UnknownMaterial(format!(
                    "material id {} at cell {:?}",
                    spec.material.0, spec.cell
                )));
            }
            let material = materials.get(spec.material);
            material.validate()?;
            points.add(spec.position, spec.material, material, rng);
        }

        let mut springs = Springs::with_capacity(topology.spring_count());
        for &[a, b] in &topology.springs {
            springs.add(PointId(a), PointId(b), &mut points, materials, params);
        }

        let mut triangles = Triangles::with_capacity(topology.triangle_count());
        for (vertices, edges) in topology.triangles.iter().zip(&topology.triangle_springs) {
            let sub_springs = edges.map(SpringId);
            let t = triangles.add(vertices.map(PointId), sub_springs);
            for s in sub_springs {
                springs.add_triangle(s, t);
            }
        }

        tracing::info!(
            points = points.count(),
            springs = springs.count(),
            triangles = triangles.count(),
            "ship built"
        );

        Ok(Self {
            materials: materials.clone(),
            points,
            springs,
            triangles,
            mechanics: Mechanics::new(),
            cached_params: params.clone(),
            stiffness_converging: false,
            ocean_displacements: Vec::new(),
        })
    }

    /// Advances the ship by one simulation step.
    pub fn update(
        &mut self,
        params: &SimulationParameters,
        sea: &dyn SeaSurface,
        events: &EventBus,
    ) -> StrainReport {
        let mut coefficients_stale = self.stiffness_converging;

        if *params != self.cached_params {
            tracing::debug!("simulation parameters changed; recomputing spring coefficients");
            self.cached_params = params.clone();
            coefficients_stale = true;
        }

        let displacements =
            self.mechanics
                .step(&mut self.points, &self.springs, &self.cached_params, sea);
        self.ocean_displacements.extend(displacements);

        self.springs.update_lengths(&self.points);

        let melted = self
            .springs
            .update_for_melting(&self.points, &self.cached_params);
        coefficients_stale |= melted;
        coefficients_stale |= self.points.take_coefficients_dirty();

        // At most one filtered recalculation per step
        if coefficients_stale {
            self.stiffness_converging =
                self.springs
                    .recalculate_coefficients(&self.points, &self.cached_params, true);
        }

        self.springs.update_for_strain(
            &mut self.points,
            &mut self.triangles,
            &self.materials,
            events,
        )
    }

    // ─── Accessors ───

    pub fn points(&self) -> &Points {
        &self.points
    }

    /// Mutable point access for thermal and mass inputs.
    pub fn points_mut(&mut self) -> &mut Points {
        &mut self.points
    }

    pub fn springs(&self) -> &Springs {
        &self.springs
    }

    pub fn triangles(&self) -> &Triangles {
        &self.triangles
    }

    pub fn materials(&self) -> &MaterialDatabase {
        &self.materials
    }

    /// Displacements collected since the last call, for the ocean.
    pub fn take_ocean_displacements(&mut self) -> Vec<OceanDisplacement> {
        std::mem::take(&mut self.ocean_displacements)
    }

    // ─── Destruction ───

    /// Destroys a spring. No-op if it is already destroyed.
    pub fn destroy_spring(&mut self, id: SpringId, events: &EventBus) -> bool {
        self.springs.destroy(
            id,
            &mut self.points,
            &mut self.triangles,
            &self.materials,
            events,
        )
    }

    /// Restores a destroyed spring using the parameters of the last step.
    pub fn restore_spring(&mut self, id: SpringId, events: &EventBus) {
        self.springs
            .restore(id, &mut self.points, &self.cached_params, events);
    }

    /// Destroys every spring attached to a point, then the point itself.
    pub fn destroy_point(&mut self, id: PointId, events: &EventBus) {
        if self.points.is_deleted(id) {
            return;
        }
        let attached: Vec<SpringId> = self.points.connected_springs(id).to_vec();
        for s in attached {
            self.destroy_spring(s, events);
        }
        self.points.mark_deleted(id);
        events.notify(EventKind::PointDestroyed { point: id });
    }

    // ─── Statistics ───

    pub fn broken_spring_count(&self) -> usize {
        self.springs.count() - self.springs.live().count()
    }

    pub fn stressed_spring_count(&self) -> usize {
        self.springs
            .live()
            .filter(|&s| self.springs.is_stressed(s))
            .count()
    }

    pub fn destroyed_triangle_count(&self) -> usize {
        self.triangles.count() - self.triangles.live_count()
    }

    /// Total mass of live points (kg).
    pub fn total_mass(&self) -> f32 {
        self.points.live().map(|p| self.points.mass(p)).sum()
    }

    /// Mass-weighted centre of live points, or `None` if none are left.
    pub fn centre_of_mass(&self) -> Option<Vec2> {
        let total = self.total_mass();
        if total <= 0.0 {
            return None;
        }
        let weighted: Vec2 = self
            .points
            .live()
            .map(|p| self.points.position(p) * self.points.mass(p))
            .sum();
        Some(weighted / total)
    }

    /// Triangles that are still intact.
    pub fn live_triangles(&self) -> impl Iterator<Item = TriangleId> + '_ {
        (0..self.triangles.count() as u32)
            .map(TriangleId)
            .filter(|&t| !self.triangles.is_deleted(t))
    }
}
