//! Injectable random engine.
//!
//! A single engine is created by the owner of the simulation and passed by
//! `&mut` into every component that needs randomness: point personality
//! seeds at construction time, and abnormal wave trigger sampling at run
//! time. Seeding it makes a whole run reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform and exponential random source.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Deterministic engine for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Engine seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Uniform value in `[min, max)`. Returns `min` for an empty range.
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Uniform index in `[0, len)`.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.gen_range(0..len)
    }

    /// Sample from the exponential distribution with the given rate
    /// (mean `1 / rate`), by inverse transform.
    ///
    /// A non-positive rate yields `f32::INFINITY`.
    pub fn exponential(&mut self, rate: f32) -> f32 {
        if rate <= 0.0 {
            return f32::INFINITY;
        }
        // 1 - u is in (0, 1], so ln never sees zero
        let u = 1.0 - self.unit();
        -u.ln() / rate
    }

    /// Bernoulli trial with success probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }
}
