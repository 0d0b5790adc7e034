//! Scalar type alias for the simulation.

/// The floating-point type used throughout the simulation.
///
/// Element buffers, the SWE fields and all coefficients are stored as `f32`;
/// wall-clock bookkeeping uses `std::time::Duration` instead.
pub type Scalar = f32;
