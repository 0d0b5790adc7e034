//! # seaworthy-solver
//!
//! Mass-spring structural solver for floating, breakable ships.
//!
//! ## Architecture
//!
//! ```text
//! Ship
//!  ├── Points       SoA buffers: kinematics, mass, temperature, decay
//!  ├── Springs      SoA buffers: endpoints, rest/cached length, coefficients
//!  ├── Triangles    surface triangles, destroyed in cascade
//!  └── Mechanics    gravity, buoyancy, spring forces, integration
//! ```
//!
//! The coefficient engine ([`coefficients`]) is a set of pure functions;
//! the strain pass ([`strain`]) drives the per-spring state machine.

pub mod coefficients;
pub mod mechanics;
pub mod points;
pub mod ship;
pub mod springs;
pub mod strain;
pub mod triangles;

pub use coefficients::SpringCoefficients;
pub use mechanics::OceanDisplacement;
pub use points::Points;
pub use seaworthy_types::SimulationParameters;
pub use ship::Ship;
pub use springs::{Springs, StrainState};
pub use strain::StrainReport;
pub use triangles::Triangles;
