//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them (collect in memory,
//! forward to `tracing`, write JSON lines).

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::events::SimulationEvent;

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the simulation ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Shared handle to the events collected by a [`VecSink`].
///
/// The sink itself is owned by the bus; the log stays readable from outside.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl EventLog {
    /// Copy of every collected event.
    pub fn events(&self) -> Vec<SimulationEvent> {
        self.lock().clone()
    }

    /// Number of collected events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of collected events whose kind has the given label.
    pub fn count(&self, label: &str) -> usize {
        self.lock().iter().filter(|e| e.kind.label() == label).count()
    }

    /// Removes and returns every collected event.
    pub fn drain(&self) -> Vec<SimulationEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SimulationEvent>> {
        // A poisoned log still holds valid events
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A simple sink that collects events in memory for testing and inspection.
#[derive(Debug, Default)]
pub struct VecSink {
    log: EventLog,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the collected events, valid after the sink is boxed.
    pub fn log(&self) -> EventLog {
        self.log.clone()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.log.lock().push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        let label = event.kind.label();
        match self.level {
            tracing::Level::ERROR => {
                tracing::error!(timestep = event.timestep, event = ?event.kind, "{label}")
            }
            tracing::Level::WARN => {
                tracing::warn!(timestep = event.timestep, event = ?event.kind, "{label}")
            }
            tracing::Level::INFO => {
                tracing::info!(timestep = event.timestep, event = ?event.kind, "{label}")
            }
            tracing::Level::DEBUG => {
                tracing::debug!(timestep = event.timestep, event = ?event.kind, "{label}")
            }
            _ => {
                tracing::trace!(timestep = event.timestep, event = ?event.kind, "{label}")
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

/// A sink that writes one JSON object per event.
///
/// Write failures are logged once and the sink goes quiet; telemetry never
/// fails the simulation.
pub struct JsonLinesSink<W: Write + Send> {
    writer: W,
    failed: bool,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &SimulationEvent) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn handle(&mut self, event: &SimulationEvent) {
        if self.failed {
            return;
        }
        if let Err(err) = self.write_event(event) {
            tracing::warn!(error = %err, "json event sink disabled after write failure");
            self.failed = true;
        }
    }

    fn finalize(&mut self) {
        if let Err(err) = self.writer.flush() {
            tracing::warn!(error = %err, "json event sink flush failed");
        }
    }

    fn name(&self) -> &str {
        "json_lines_sink"
    }
}
