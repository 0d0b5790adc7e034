//! Tsunami and rogue wave generators.
//!
//! Each generator is a two-state machine. While idle it waits for a
//! wall-clock deadline drawn from an exponential distribution; once
//! triggered it re-applies an interactive wave every step for a fixed
//! span of simulation time, then goes idle and schedules the next one.

use std::time::Duration;

use seaworthy_math::RandomEngine;
use seaworthy_telemetry::{EventBus, EventKind};
use seaworthy_types::constants::{HALF_MAX_WORLD_WIDTH, MAX_WORLD_WIDTH};

use crate::constants::MAX_RELATIVE_HEIGHT;
use crate::interactive_waves::InteractiveWaves;

/// Which abnormal wave a generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbnormalWaveKind {
    Tsunami,
    RogueWave,
}

/// Fixed characteristics of an abnormal wave kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbnormalWaveProfile {
    /// Simulation time the wave stays active (s).
    pub active_duration: f32,
    /// Minimum wall-clock time between the end of one wave and the next.
    pub grace_period: Duration,
    /// Target height range, as fractions of [`MAX_RELATIVE_HEIGHT`].
    pub height_fraction: (f32, f32),
    /// Growth rate of the injected interactive wave (per step).
    pub growth_rate: f32,
    /// Requested radius of the injected interactive wave (m).
    pub radius: f32,
}

/// Distance of the rogue wave centre from the world edge (m).
pub const ROGUE_WAVE_EDGE_MARGIN: f32 = 100.0;

/// Fraction of the world width, around the centre, where tsunamis start.
pub const TSUNAMI_CENTRAL_FRACTION: f32 = 0.8;

impl AbnormalWaveKind {
    pub fn profile(self) -> AbnormalWaveProfile {
        match self {
            AbnormalWaveKind::Tsunami => AbnormalWaveProfile {
                active_duration: 5.0,
                grace_period: Duration::from_secs(120),
                height_fraction: (0.5, 0.8),
                growth_rate: 0.01,
                radius: 60.0,
            },
            AbnormalWaveKind::RogueWave => AbnormalWaveProfile {
                active_duration: 2.0,
                grace_period: Duration::from_secs(5),
                height_fraction: (0.3, 0.5),
                growth_rate: 0.03,
                radius: 15.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AbnormalWaveKind::Tsunami => "tsunami",
            AbnormalWaveKind::RogueWave => "rogue_wave",
        }
    }
}

/// State of an abnormal wave generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveState {
    Idle,
    Active {
        center_x: f32,
        relative_height: f32,
        growth_rate: f32,
        start_sim_time: f32,
    },
}

/// Scheduler and state machine for one abnormal wave kind.
#[derive(Debug, Clone)]
pub struct AbnormalWaveGenerator {
    kind: AbnormalWaveKind,
    state: WaveState,
    /// Wall-clock deadline of the next trigger; `Duration::MAX` when disabled.
    next_occurrence: Duration,
    /// Rate (minutes) the current deadline was drawn with.
    cached_rate: f32,
}

impl AbnormalWaveGenerator {
    /// Creates an idle generator and schedules its first occurrence.
    pub fn new(
        kind: AbnormalWaveKind,
        rate_minutes: f32,
        now: Duration,
        rng: &mut RandomEngine,
    ) -> Self {
        let mut generator = Self {
            kind,
            state: WaveState::Idle,
            next_occurrence: Duration::MAX,
            cached_rate: rate_minutes,
        };
        generator.schedule(now, rng);
        generator
    }

    pub fn kind(&self) -> AbnormalWaveKind {
        self.kind
    }

    pub fn state(&self) -> WaveState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, WaveState::Active { .. })
    }

    /// Wall-clock deadline of the next automatic trigger.
    pub fn next_occurrence(&self) -> Duration {
        self.next_occurrence
    }

    /// Advances the state machine by one step.
    ///
    /// `now` is wall-clock time, `sim_time` simulation time. While active,
    /// the wave is re-applied to `waves`.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        now: Duration,
        sim_time: f32,
        rate_minutes: f32,
        wind_direction: f32,
        rng: &mut RandomEngine,
        waves: &mut InteractiveWaves,
        events: &EventBus,
    ) {
        if rate_minutes != self.cached_rate {
            self.cached_rate = rate_minutes;
            if !self.is_active() {
                self.schedule(now, rng);
            }
        }

        match self.state {
            WaveState::Active {
                center_x,
                relative_height,
                growth_rate,
                start_sim_time,
            } => {
                if sim_time - start_sim_time > self.kind.profile().active_duration {
                    self.state = WaveState::Idle;
                    self.schedule(now, rng);
                } else {
                    let radius = self.kind.profile().radius;
                    waves.request(center_x, relative_height, growth_rate, radius);
                }
            }
            WaveState::Idle => {
                if now >= self.next_occurrence {
                    self.trigger(sim_time, wind_direction, rng, waves, events);
                }
            }
        }
    }

    /// Starts a wave immediately, whatever the schedule says.
    ///
    /// Returns the world X of the wave centre.
    pub fn trigger(
        &mut self,
        sim_time: f32,
        wind_direction: f32,
        rng: &mut RandomEngine,
        waves: &mut InteractiveWaves,
        events: &EventBus,
    ) -> f32 {
        let profile = self.kind.profile();

        let center_x = match self.kind {
            AbnormalWaveKind::Tsunami => {
                let half_span = MAX_WORLD_WIDTH * TSUNAMI_CENTRAL_FRACTION / 2.0;
                rng.uniform(-half_span, half_span)
            }
            // Upwind edge; no wind counts as wind toward +X
            AbnormalWaveKind::RogueWave => {
                let upwind = if wind_direction < 0.0 { 1.0 } else { -1.0 };
                upwind * (HALF_MAX_WORLD_WIDTH - ROGUE_WAVE_EDGE_MARGIN)
            }
        };
        let relative_height = MAX_RELATIVE_HEIGHT
            * rng.uniform(profile.height_fraction.0, profile.height_fraction.1);

        self.state = WaveState::Active {
            center_x,
            relative_height,
            growth_rate: profile.growth_rate,
            start_sim_time: sim_time,
        };
        waves.request(center_x, relative_height, profile.growth_rate, profile.radius);

        tracing::info!(
            kind = self.kind.name(),
            center_x,
            relative_height,
            "abnormal wave triggered"
        );
        events.notify(match self.kind {
            AbnormalWaveKind::Tsunami => EventKind::TsunamiTriggered {
                center_x,
                relative_height,
            },
            AbnormalWaveKind::RogueWave => EventKind::RogueWaveTriggered {
                center_x,
                relative_height,
            },
        });

        center_x
    }

    /// Draws the next deadline: `now + max(grace, Exp(mean = rate))`.
    fn schedule(&mut self, now: Duration, rng: &mut RandomEngine) {
        self.next_occurrence = next_occurrence(
            now,
            self.cached_rate,
            self.kind.profile().grace_period,
            rng,
        );
        if self.next_occurrence == Duration::MAX {
            tracing::warn!(kind = self.kind.name(), "abnormal wave scheduling disabled");
        } else {
            tracing::debug!(
                kind = self.kind.name(),
                in_seconds = (self.next_occurrence - now).as_secs_f32(),
                "abnormal wave scheduled"
            );
        }
    }
}

/// Deadline of the next occurrence for a mean interval of `rate_minutes`.
///
/// Non-positive rates disable scheduling and yield `Duration::MAX`.
pub fn next_occurrence(
    now: Duration,
    rate_minutes: f32,
    grace_period: Duration,
    rng: &mut RandomEngine,
) -> Duration {
    if rate_minutes.is_nan() || rate_minutes <= 0.0 {
        return Duration::MAX;
    }

    let mean_seconds = rate_minutes * 60.0;
    let sample = rng.exponential(1.0 / mean_seconds);
    let wait = Duration::try_from_secs_f32(sample)
        .unwrap_or(Duration::MAX)
        .max(grace_period);

    now.saturating_add(wait)
}
