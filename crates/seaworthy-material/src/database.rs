//! Material database with structural presets.

use std::collections::HashMap;

use seaworthy_types::{MaterialId, SeaworthyError, SeaworthyResult};

use crate::properties::StructuralMaterial;

/// An id-addressed collection of structural materials.
///
/// Materials are looked up by name at build time and by [`MaterialId`]
/// afterwards. Ids are dense and never reused.
#[derive(Debug, Clone)]
pub struct MaterialDatabase {
    materials: Vec<StructuralMaterial>,
    by_name: HashMap<String, MaterialId>,
}

impl MaterialDatabase {
    /// Creates a new database with the built-in presets.
    pub fn with_defaults() -> Self {
        let mut db = Self::empty();

        for material in [oak_wood(), iron_hull(), steel_beam(), glass(), hemp_rope()] {
            db.register(material);
        }

        db
    }

    /// Creates an empty database.
    pub fn empty() -> Self {
        Self {
            materials: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Registers a material. Overwrites (keeping the id) if the name
    /// already exists.
    pub fn register(&mut self, material: StructuralMaterial) -> MaterialId {
        if let Some(&id) = self.by_name.get(&material.name) {
            self.materials[id.index()] = material;
            return id;
        }

        let id = MaterialId(self.materials.len() as u16);
        self.by_name.insert(material.name.clone(), id);
        self.materials.push(material);
        id
    }

    /// Registers a material after validating it.
    pub fn register_validated(
        &mut self,
        material: StructuralMaterial,
    ) -> SeaworthyResult<MaterialId> {
        material.validate()?;
        Ok(self.register(material))
    }

    /// Looks up a material by id.
    ///
    /// Ids come from this database, so an unknown id is a programming error.
    pub fn get(&self, id: MaterialId) -> &StructuralMaterial {
        &self.materials[id.index()]
    }

    /// Looks up a material id by name.
    pub fn find(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    /// Looks up a material id by name, failing with `UnknownMaterial`.
    pub fn require(&self, name: &str) -> SeaworthyResult<MaterialId> {
        self.find(name)
            .ok_or_else(|| SeaworthyError::UnknownMaterial(name.to_string()))
    }

    /// Returns all registered material names, in id order.
    pub fn names(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }

    /// Returns the number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the database is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialDatabase {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Presets ─────────────────────────────────────────────────

/// Oak planking. Light, buoyant, burns before it melts.
fn oak_wood() -> StructuralMaterial {
    StructuralMaterial {
        name: "oak_wood".into(),
        mass: 750.0,
        strength: 0.6,
        stiffness: 0.9,
        melting_temperature: 573.15,
        thermal_conductivity: 0.17,
        strain_threshold_fraction: 0.5,
        buoyancy_volume_fill: 0.9,
        is_hull: true,
        is_rope: false,
    }
}

/// Riveted iron hull plate.
fn iron_hull() -> StructuralMaterial {
    StructuralMaterial {
        name: "iron_hull".into(),
        mass: 2500.0,
        strength: 0.9,
        stiffness: 1.0,
        melting_temperature: 1811.0,
        thermal_conductivity: 80.0,
        strain_threshold_fraction: 0.5,
        buoyancy_volume_fill: 0.3,
        is_hull: true,
        is_rope: false,
    }
}

/// Structural steel beam. Strong and heavy; not watertight.
fn steel_beam() -> StructuralMaterial {
    StructuralMaterial {
        name: "steel_beam".into(),
        mass: 3000.0,
        strength: 1.2,
        stiffness: 1.0,
        melting_temperature: 1643.0,
        thermal_conductivity: 45.0,
        strain_threshold_fraction: 0.6,
        buoyancy_volume_fill: 0.2,
        is_hull: false,
        is_rope: false,
    }
}

/// Window glass. Stiff and brittle.
fn glass() -> StructuralMaterial {
    StructuralMaterial {
        name: "glass".into(),
        mass: 1250.0,
        strength: 0.05,
        stiffness: 1.0,
        melting_temperature: 1673.0,
        thermal_conductivity: 0.8,
        strain_threshold_fraction: 0.3,
        buoyancy_volume_fill: 0.5,
        is_hull: true,
        is_rope: false,
    }
}

/// Hemp rope. Soft, very tolerant of elongation.
fn hemp_rope() -> StructuralMaterial {
    StructuralMaterial {
        name: "hemp_rope".into(),
        mass: 120.0,
        strength: 3.0,
        stiffness: 0.4,
        melting_temperature: 493.15,
        thermal_conductivity: 0.05,
        strain_threshold_fraction: 0.7,
        buoyancy_volume_fill: 0.8,
        is_hull: false,
        is_rope: true,
    }
}
