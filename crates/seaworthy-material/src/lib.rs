//! # seaworthy-material
//!
//! Structural material properties and the material database.
//!
//! Materials are queried when points and springs are constructed; the
//! solvers copy the values they need into their own buffers and never
//! consult the database during a step.

pub mod database;
pub mod properties;

pub use database::MaterialDatabase;
pub use properties::StructuralMaterial;
