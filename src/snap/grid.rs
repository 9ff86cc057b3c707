//! Snap onto a regular lat/lng lattice

use glam::DVec2;

use crate::geo::{EARTH_RADIUS, distance};
use crate::types::{LatLng, Meters};

use super::{SnapCandidate, SnapInput, SnapKind, SnapStrategy};

/// Rounds latitude and longitude independently to the nearest multiple of
/// `step` degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSnap {
    pub step: f64,
}

impl GridSnap {
    /// Lattice derived from the snap threshold: the cell size is the power of
    /// ten at or above `5 × threshold`, scaled by `1 / (R × 100)` into a step
    /// in degrees.
    pub fn for_threshold(threshold: Meters) -> Self {
        let cell = 10f64.powf((threshold.raw() * 5.0).log10().ceil());
        GridSnap {
            step: cell / EARTH_RADIUS.raw() / 100.0,
        }
    }

    pub fn step_degrees(&self) -> f64 {
        self.step
    }

    /// Nearest lattice point
    pub fn round(&self, p: LatLng) -> LatLng {
        let step = DVec2::splat(self.step);
        LatLng::from_dvec2((p.to_dvec2() / step).round() * step)
    }
}

impl SnapStrategy for GridSnap {
    fn kind(&self) -> SnapKind {
        SnapKind::Grid
    }

    fn propose(&self, input: &SnapInput<'_>) -> Option<SnapCandidate> {
        // A non-positive or non-finite threshold yields no usable lattice
        if !(self.step.is_finite() && self.step > 0.0) {
            return None;
        }

        let snapped = self.round(input.position);
        Some(SnapCandidate {
            position: snapped,
            kind: SnapKind::Grid,
            score: distance(input.position, snapped).raw(),
        })
    }
}
