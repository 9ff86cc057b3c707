//! Assisted vertex placement while dragging
//!
//! This module is organized into submodules:
//! - `config`: `SnapConfig`, the per-call switches and distance threshold
//! - `vertex`: snap onto another vertex of the polygon
//! - `angle`: snap the incoming edge onto a cardinal or diagonal bearing
//! - `grid`: snap onto a regular lat/lng lattice
//! - `resolve`: run the enabled strategies and pick at most one correction
//!
//! Every strategy is a pure function of the drag position, the vertex
//! sequence and its own parameters. Nothing here owns or mutates vertices.

pub mod angle;
pub mod config;
pub mod grid;
pub mod resolve;
pub mod vertex;

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::types::{LatLng, Vertex, VertexId};

pub use angle::AngleSnap;
pub use config::SnapConfig;
pub use grid::GridSnap;
pub use resolve::{SnapOutcome, Snapper, resolve};
pub use vertex::VertexSnap;

/// Which strategy produced a correction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapKind {
    Vertex,
    Angle,
    Grid,
}

impl SnapKind {
    /// Human-facing name for the snap indicator
    pub fn label(self) -> &'static str {
        match self {
            SnapKind::Vertex => "Vertex",
            SnapKind::Angle => "Angle",
            SnapKind::Grid => "Grid",
        }
    }
}

impl fmt::Display for SnapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A proposed correction.
///
/// `score` ranks candidates: meters for vertex and grid snaps, degrees of
/// angular deviation for angle snaps. Lower is better.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapCandidate {
    pub position: LatLng,
    pub kind: SnapKind,
    pub score: f64,
}

/// Everything a strategy may look at for one pointer-move event
#[derive(Clone, Copy, Debug)]
pub struct SnapInput<'a> {
    /// Raw, uncorrected drag position
    pub position: LatLng,
    /// Current polygon boundary, in order
    pub vertices: &'a [Vertex],
    /// Vertex being moved, if the caller knows it
    pub dragged: Option<VertexId>,
}

impl<'a> SnapInput<'a> {
    pub fn new(position: LatLng, vertices: &'a [Vertex], dragged: Option<VertexId>) -> Self {
        SnapInput { position, vertices, dragged }
    }

    /// Index of the dragged vertex in the sequence
    pub fn dragged_index(&self) -> Option<usize> {
        let id = self.dragged?;
        self.vertices.iter().position(|v| v.id == id)
    }

    /// The vertex right before the dragged one, wrapping to the last vertex
    /// when the first one is dragged.
    pub fn previous(&self) -> Option<&'a Vertex> {
        let i = self.dragged_index()?;
        let n = self.vertices.len();
        if n < 2 {
            return None;
        }
        self.vertices.get((i + n - 1) % n)
    }

    /// Vertices other than the dragged one, in sequence order
    pub fn others(&self) -> impl Iterator<Item = &'a Vertex> + 'a {
        let dragged = self.dragged;
        self.vertices.iter().filter(move |v| Some(v.id) != dragged)
    }
}

/// Common behavior for all snap strategies
#[enum_dispatch]
pub trait SnapStrategy {
    /// The kind every candidate from this strategy carries
    fn kind(&self) -> SnapKind;

    /// Propose a correction, or nothing if this strategy has no opinion
    fn propose(&self, input: &SnapInput<'_>) -> Option<SnapCandidate>;
}

/// The closed set of strategies, in evaluation order
#[enum_dispatch(SnapStrategy)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strategy {
    VertexSnap,
    AngleSnap,
    GridSnap,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Vec<Vertex> {
        vec![
            Vertex::new(10, 0.0, 0.0),
            Vertex::new(20, 0.0, 1.0),
            Vertex::new(30, 1.0, 1.0),
        ]
    }

    #[test]
    fn previous_wraps_to_last() {
        let vs = ring();
        let input = SnapInput::new(LatLng::default(), &vs, Some(VertexId(10)));
        assert_eq!(input.dragged_index(), Some(0));
        assert_eq!(input.previous().map(|v| v.id), Some(VertexId(30)));

        let input = SnapInput::new(LatLng::default(), &vs, Some(VertexId(30)));
        assert_eq!(input.previous().map(|v| v.id), Some(VertexId(20)));
    }

    #[test]
    fn previous_needs_a_known_dragged_vertex() {
        let vs = ring();
        assert!(SnapInput::new(LatLng::default(), &vs, None).previous().is_none());
        assert!(SnapInput::new(LatLng::default(), &vs, Some(VertexId(99))).previous().is_none());
    }

    #[test]
    fn others_skips_dragged() {
        let vs = ring();
        let input = SnapInput::new(LatLng::default(), &vs, Some(VertexId(20)));
        let ids: Vec<_> = input.others().map(|v| v.id.0).collect();
        assert_eq!(ids, vec![10, 30]);

        let input = SnapInput::new(LatLng::default(), &vs, None);
        assert_eq!(input.others().count(), 3);
    }

    #[test]
    fn strategy_dispatches_kind() {
        let strategies: [Strategy; 3] = [
            VertexSnap::new(crate::types::Meters(5.0)).into(),
            AngleSnap::default().into(),
            GridSnap::for_threshold(crate::types::Meters(5.0)).into(),
        ];
        let kinds: Vec<_> = strategies.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![SnapKind::Vertex, SnapKind::Angle, SnapKind::Grid]);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(SnapKind::Vertex.to_string(), "Vertex");
        assert_eq!(SnapKind::Angle.label(), "Angle");
        assert_eq!(SnapKind::Grid.label(), "Grid");
    }
}
