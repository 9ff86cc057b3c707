//! Snap the edge leading into the dragged vertex onto a fixed bearing

use crate::geo::{bearing_degrees, distance, project};
use crate::types::Degrees;

use super::{SnapCandidate, SnapInput, SnapKind, SnapStrategy};

/// North, the diagonals and the cardinals, in ascending order
pub const COMPASS_TARGETS: [Degrees; 8] = [
    Degrees(0.0),
    Degrees(45.0),
    Degrees(90.0),
    Degrees(135.0),
    Degrees(180.0),
    Degrees(225.0),
    Degrees(270.0),
    Degrees(315.0),
];

/// How far off a target bearing an edge may be and still snap
pub const DEFAULT_TOLERANCE: Degrees = Degrees(5.0);

/// Rotates the drag position around the previous vertex onto a target
/// bearing, keeping its distance from that vertex.
///
/// Targets are checked in order and the first one within `tolerance` wins,
/// even if a later target is closer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSnap {
    pub targets: &'static [Degrees],
    pub tolerance: Degrees,
}

impl Default for AngleSnap {
    fn default() -> Self {
        AngleSnap {
            targets: &COMPASS_TARGETS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SnapStrategy for AngleSnap {
    fn kind(&self) -> SnapKind {
        SnapKind::Angle
    }

    fn propose(&self, input: &SnapInput<'_>) -> Option<SnapCandidate> {
        let anchor = input.previous()?.position;
        let bearing = bearing_degrees(anchor, input.position);

        let (target, off_by) = self
            .targets
            .iter()
            .map(|&t| (t, bearing.separation(t)))
            .find(|&(_, diff)| diff < self.tolerance)?;

        let reach = distance(anchor, input.position);
        crate::log::trace!(bearing = bearing.raw(), target = target.raw(), "angle snap");

        Some(SnapCandidate {
            position: project(anchor, target, reach),
            kind: SnapKind::Angle,
            score: off_by.raw(),
        })
    }
}
