//! Read-only view of the sea surface consumed by the structural solver.

/// Height query over the sea surface.
///
/// Implemented by the ocean model; the structural solver only ever reads
/// through this trait, so the two subsystems never share mutable state.
pub trait SeaSurface {
    /// Returns the water surface height (world Y) at world X.
    ///
    /// Must be valid for every X within the simulated world width.
    fn height_at(&self, x: f32) -> f32;
}

/// A perfectly flat sea at a fixed height.
#[derive(Debug, Clone, Copy)]
pub struct FlatSea(pub f32);

impl SeaSurface for FlatSea {
    fn height_at(&self, _x: f32) -> f32 {
        self.0
    }
}
