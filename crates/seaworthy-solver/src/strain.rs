//! Strain and breakage state machine.
//!
//! ```text
//!   Unstressed ──|strain| > T·B──▶ Stressed
//!   Stressed ──|strain| < 0.08·B──▶ Unstressed
//!   any ──|strain| > B──▶ Destroyed (until restored)
//! ```
//!
//! `B` is the spring's breaking elongation and `T` its base material's
//! strain threshold fraction.

use seaworthy_material::MaterialDatabase;
use seaworthy_telemetry::{EventBus, EventKind};
use seaworthy_types::SpringId;

use crate::points::Points;
use crate::springs::{Springs, SPRING_BATCH_SIZE};
use crate::triangles::Triangles;

/// Below this fraction of the breaking elongation a stressed spring
/// relaxes back to unstressed.
pub const STRESS_RELEASE_FRACTION: f32 = 0.08;

/// What a strain pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrainReport {
    pub broken: usize,
    pub newly_stressed: usize,
    pub relaxed: usize,
}

impl Springs {
    /// Runs the strain state machine over every live spring, in batches
    /// of [`SPRING_BATCH_SIZE`], using the cached lengths.
    ///
    /// Also recomputes each point's stress as the signed strain ratio of
    /// its most strained spring.
    pub fn update_for_strain(
        &mut self,
        points: &mut Points,
        triangles: &mut Triangles,
        materials: &MaterialDatabase,
        events: &EventBus,
    ) -> StrainReport {
        let mut report = StrainReport::default();
        points.stress_mut().fill(0.0);

        let n = self.count();
        for start in (0..n).step_by(SPRING_BATCH_SIZE) {
            for i in start..(start + SPRING_BATCH_SIZE).min(n) {
                let id = SpringId(i as u32);
                if self.is_deleted(id) {
                    continue;
                }

                let strain = self.strain(id);
                let abs_strain = strain.abs();
                let breaking = self.breaking_elongation(id);

                if abs_strain > breaking {
                    self.destroy(id, points, triangles, materials, events);
                    report.broken += 1;
                    continue;
                }

                if !self.is_stressed[i] {
                    if abs_strain > self.strain_threshold_fraction(id) * breaking {
                        self.is_stressed[i] = true;
                        report.newly_stressed += 1;
                        events.notify(EventKind::SpringStressed {
                            spring: id,
                            material: materials.get(self.base_material(id)).name.clone(),
                        });
                    }
                } else if abs_strain < STRESS_RELEASE_FRACTION * breaking {
                    self.is_stressed[i] = false;
                    report.relaxed += 1;
                }

                let ratio = if breaking > 0.0 { strain / breaking } else { 0.0 };
                let stress = points.stress_mut();
                for p in [self.endpoint_a(id), self.endpoint_b(id)] {
                    if ratio.abs() > stress[p.index()].abs() {
                        stress[p.index()] = ratio;
                    }
                }
            }
        }

        if report.broken > 0 {
            tracing::debug!(broken = report.broken, "springs broke under strain");
        }

        report
    }
}
