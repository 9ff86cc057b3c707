//! Snap onto an existing vertex

use crate::geo::distance;
use crate::types::Meters;

use super::{SnapCandidate, SnapInput, SnapKind, SnapStrategy};

/// Pulls the drag position onto the nearest other vertex within `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexSnap {
    pub threshold: Meters,
}

impl VertexSnap {
    pub fn new(threshold: Meters) -> Self {
        VertexSnap { threshold }
    }
}

impl SnapStrategy for VertexSnap {
    fn kind(&self) -> SnapKind {
        SnapKind::Vertex
    }

    fn propose(&self, input: &SnapInput<'_>) -> Option<SnapCandidate> {
        let mut best: Option<SnapCandidate> = None;

        for vertex in input.others() {
            let d = distance(input.position, vertex.position);
            // Strict comparison keeps the first of equally near vertices
            if d < self.threshold && best.is_none_or(|b| d.raw() < b.score) {
                best = Some(SnapCandidate {
                    position: vertex.position,
                    kind: SnapKind::Vertex,
                    score: d.raw(),
                });
            }
        }

        crate::log::trace!(found = best.is_some(), "vertex snap");
        best
    }
}
