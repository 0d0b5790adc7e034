//! # seaworthy-math
//!
//! Numeric building blocks shared by the structural and ocean solvers.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`) as the canonical 2D vector
//! - Scalar easing and blending helpers (`smooth_step`, `mix`)
//! - Windowed moving-average smoothing over slices
//! - A fixed-window [`RunningAverage`]
//! - The seedable [`RandomEngine`] injected into every component that
//!   needs randomness

pub mod random;
pub mod running_average;
pub mod smoothing;

pub use glam::Vec2;
pub use random::RandomEngine;
pub use running_average::RunningAverage;
pub use smoothing::{mix, smooth_step};
