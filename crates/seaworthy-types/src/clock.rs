//! Wall-clock time sources.
//!
//! The simulation works with two distinct time domains:
//!
//! - **Simulation time** (`f32` seconds) advances by the step duration and
//!   drives physically meaningful durations such as wave lifespans.
//! - **Wall-clock time** ([`Duration`] since an arbitrary origin) drives
//!   real-time cadences such as abnormal wave scheduling, independent of
//!   simulation speed.
//!
//! Never mix the two.

use std::time::{Duration, Instant};

/// Source of wall-clock timestamps.
pub trait WallClock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemWallClock {
    origin: Instant,
}

impl SystemWallClock {
    /// Starts a clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemWallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemWallClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced wall clock for tests and offline runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualWallClock {
    now: Duration,
}

impl ManualWallClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.now = self.now.saturating_add(by);
    }

    /// Sets the clock to an absolute time.
    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }
}

impl WallClock for ManualWallClock {
    fn now(&self) -> Duration {
        self.now
    }
}
