//! # seaworthy-structure
//!
//! Ship structure description, before it becomes a simulated body.
//!
//! ## Key Types
//!
//! - [`StructureLayer`]: a grid of cells, each empty or holding a
//!   structural material. One occupied cell becomes one point.
//! - [`StructureTopology`]: Points, springs and triangles derived from a
//!   layer by 8-neighbour adjacency.
//! - Procedural generators for test and benchmark ships (rafts, hull
//!   boxes, ropes).

pub mod generators;
pub mod layer;
pub mod topology;

pub use layer::StructureLayer;
pub use topology::{PointSpec, StructureTopology};
