//! Pick at most one correction for a drag position

use crate::types::{LatLng, Vertex, VertexId};

use super::{
    AngleSnap, GridSnap, SnapCandidate, SnapConfig, SnapInput, SnapKind, SnapStrategy, Strategy,
    VertexSnap,
};

/// Result of resolving one drag position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapOutcome {
    /// Where the dragged vertex should go: corrected, or the raw input
    pub position: LatLng,
    /// The candidate that was applied, if any
    pub fired: Option<SnapCandidate>,
}

impl SnapOutcome {
    fn unchanged(position: LatLng) -> Self {
        SnapOutcome { position, fired: None }
    }

    pub fn snapped(&self) -> bool {
        self.fired.is_some()
    }

    pub fn kind(&self) -> Option<SnapKind> {
        self.fired.map(|c| c.kind)
    }
}

/// A caller-owned snap resolver.
///
/// Build one per configuration and call [`Snapper::resolve`] on every pointer
/// move; the strategy list is derived once from the configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapper {
    config: SnapConfig,
    strategies: Vec<Strategy>,
}

impl Snapper {
    pub fn new(config: SnapConfig) -> Self {
        let mut strategies = Vec::with_capacity(3);
        if config.vertex_snapping {
            strategies.push(VertexSnap::new(config.distance_threshold).into());
        }
        if config.angle_snapping {
            strategies.push(AngleSnap::default().into());
        }
        if config.grid_snapping {
            strategies.push(GridSnap::for_threshold(config.distance_threshold).into());
        }
        Snapper { config, strategies }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Replace the configuration, e.g. after the user flips a toggle
    pub fn set_config(&mut self, config: SnapConfig) {
        *self = Snapper::new(config);
    }

    /// Enabled strategies, in evaluation order
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Every candidate the enabled strategies propose, in evaluation order
    pub fn candidates<'a>(
        &'a self,
        input: &'a SnapInput<'a>,
    ) -> impl Iterator<Item = SnapCandidate> + 'a {
        self.strategies.iter().filter_map(move |s| s.propose(input))
    }

    /// Correct `position` for a drag of `dragged` over `vertices`.
    ///
    /// Passes the position through untouched when snapping is disabled or
    /// fewer than two vertices exist. Otherwise the lowest-scoring candidate
    /// wins (earliest strategy on ties) and applies only if its score is
    /// below the distance threshold. Scores are compared as raw numbers even
    /// though angle scores are degrees and the others meters.
    ///
    /// `zoom` is accepted from the map layer and does not affect the result.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn resolve(
        &self,
        position: LatLng,
        vertices: &[Vertex],
        dragged: Option<VertexId>,
        zoom: f64,
    ) -> SnapOutcome {
        if !self.config.enabled || vertices.len() < 2 {
            return SnapOutcome::unchanged(position);
        }

        let input = SnapInput::new(position, vertices, dragged);
        let Some(best) = closest(self.candidates(&input)) else {
            crate::log::debug!(zoom, "no snap candidates");
            return SnapOutcome::unchanged(position);
        };

        if best.score < self.config.distance_threshold.raw() {
            crate::log::debug!(kind = %best.kind, score = best.score, zoom, "snap fired");
            SnapOutcome {
                position: best.position,
                fired: Some(best),
            }
        } else {
            crate::log::debug!(kind = %best.kind, score = best.score, zoom, "best snap over threshold");
            SnapOutcome::unchanged(position)
        }
    }
}

/// Lowest score wins; the first of equal scores is kept.
pub(crate) fn closest(candidates: impl IntoIterator<Item = SnapCandidate>) -> Option<SnapCandidate> {
    candidates
        .into_iter()
        .min_by(|a, b| a.score.total_cmp(&b.score))
}

/// Resolve one drag position with a throwaway [`Snapper`].
pub fn resolve(
    position: LatLng,
    vertices: &[Vertex],
    dragged: Option<VertexId>,
    config: &SnapConfig,
    zoom: f64,
) -> SnapOutcome {
    Snapper::new(*config).resolve(position, vertices, dragged, zoom)
}
