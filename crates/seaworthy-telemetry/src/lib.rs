//! # seaworthy-telemetry
//!
//! Event bus for simulation telemetry. The structural and ocean solvers
//! emit structured events (spring breaks, stress onsets, abnormal waves,
//! ocean disturbances) that are consumed by pluggable sinks (in-memory
//! logs, `tracing`, JSON lines files).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventLog, EventSink, JsonLinesSink, TracingSink, VecSink};
