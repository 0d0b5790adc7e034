//! # seaworthy-debug
//!
//! Inspection hooks and state snapshots for debugging simulation issues.
//! Snapshots serialize ship points and ocean samples to binary so a run
//! can be inspected offline.

pub mod hooks;
pub mod snapshot;

pub use hooks::{BreakageTally, InspectionHook, TelemetryHook};
pub use snapshot::StateSnapshot;
