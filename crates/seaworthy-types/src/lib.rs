//! # seaworthy-types
//!
//! Shared types, identifiers, error types, clocks, physical constants and
//! global simulation parameters for the Seaworthy ship simulation.
//!
//! This crate has no solver logic. It defines the vocabulary
//! that all other Seaworthy crates share.

pub mod clock;
pub mod constants;
pub mod error;
pub mod ids;
pub mod parameters;
pub mod scalar;
pub mod surface;

pub use clock::{ManualWallClock, SystemWallClock, WallClock};
pub use error::{SeaworthyError, SeaworthyResult};
pub use ids::{MaterialId, PointId, SpringId, TriangleId};
pub use parameters::SimulationParameters;
pub use scalar::Scalar;
pub use surface::SeaSurface;
