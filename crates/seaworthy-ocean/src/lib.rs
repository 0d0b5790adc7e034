//! # seaworthy-ocean
//!
//! One-dimensional ocean surface for the ship simulation.
//!
//! The surface is the sum of three parts:
//!
//! - A shallow-water (SWE) height/velocity field that carries everything
//!   interactive: ship displacements, user-requested waves, tsunamis and
//!   rogue waves ([`swe`], [`interactive_waves`], [`abnormal_waves`])
//! - Two superimposed basal sine waves shaped by wind and the basal wave
//!   adjustments ([`basal_waves`])
//! - Short wind ripples driven by gusts ([`wind`])
//!
//! [`OceanSurface`] steps all of them and precomputes the samples that
//! height queries interpolate.

pub mod abnormal_waves;
pub mod basal_waves;
pub mod constants;
pub mod interactive_waves;
pub mod ocean_surface;
pub mod swe;
pub mod wind;

pub use abnormal_waves::{AbnormalWaveGenerator, AbnormalWaveKind, WaveState};
pub use ocean_surface::{OceanSurface, Sample};
pub use wind::WindState;
