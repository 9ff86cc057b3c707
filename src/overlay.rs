//! Reference grid drawn over the map viewport
//!
//! Unlike grid snapping, whose lattice derives from the snap threshold, the
//! visible grid uses a spacing the user picks in meters.

use crate::errors::GridError;
use crate::geo::{EARTH_RADIUS, GeoBounds};
use crate::types::Meters;

/// Upper bound on lines per axis for one viewport
pub const MAX_GRID_LINES: usize = 512;

/// Positions of grid lines covering a viewport, in degrees
#[derive(Clone, Debug, PartialEq)]
pub struct GridLines {
    /// Spacing between neighbouring lines, in degrees
    pub step: f64,
    /// Constant-latitude (east-west) lines, south to north
    pub latitudes: Vec<f64>,
    /// Constant-longitude (north-south) lines, west to east
    pub longitudes: Vec<f64>,
}

impl GridLines {
    /// Lay out lines every `spacing` meters over `bounds`, extended outward
    /// to whole steps on every side.
    pub fn for_bounds(bounds: GeoBounds, spacing: Meters) -> Result<GridLines, GridError> {
        if !(spacing.is_finite() && spacing.raw() > 0.0) {
            return Err(GridError::InvalidSpacing { spacing: spacing.raw() });
        }

        let step = (spacing.raw() / EARTH_RADIUS.raw()).to_degrees();
        let latitudes = axis(bounds.min.lat, bounds.max.lat, step)?;
        let longitudes = axis(bounds.min.lng, bounds.max.lng, step)?;

        crate::log::debug!(
            step,
            latitudes = latitudes.len(),
            longitudes = longitudes.len(),
            "grid overlay"
        );
        Ok(GridLines { step, latitudes, longitudes })
    }

    pub fn len(&self) -> usize {
        self.latitudes.len() + self.longitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latitudes.is_empty() && self.longitudes.is_empty()
    }
}

/// Multiples of `step` from `floor(min)` to `ceil(max)` inclusive
fn axis(min: f64, max: f64, step: f64) -> Result<Vec<f64>, GridError> {
    let first = (min / step).floor();
    let last = (max / step).ceil();
    let count = last - first + 1.0;

    if !count.is_finite() || count > MAX_GRID_LINES as f64 {
        return Err(GridError::TooDense {
            lines: if count.is_finite() { count as usize } else { usize::MAX },
            max: MAX_GRID_LINES,
        });
    }
    if count < 1.0 {
        return Ok(Vec::new());
    }

    // Integer multiples keep every line an exact multiple of the step
    Ok((0..count as usize).map(|k| (first + k as f64) * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LatLng;

    fn viewport(min: (f64, f64), max: (f64, f64)) -> GeoBounds {
        GeoBounds {
            min: LatLng::new(min.0, min.1),
            max: LatLng::new(max.0, max.1),
        }
    }

    #[test]
    fn lines_cover_the_viewport() {
        let b = viewport((37.774, -122.42), (37.776, -122.418));
        let grid = GridLines::for_bounds(b, Meters(10.0)).unwrap();

        assert!((grid.step - (10.0 / 6_371_000f64).to_degrees()).abs() < 1e-15);
        assert!(grid.latitudes[0] <= b.min.lat + 1e-12);
        assert!(*grid.latitudes.last().unwrap() >= b.max.lat - 1e-12);
        assert!(grid.longitudes[0] <= b.min.lng + 1e-12);
        assert!(*grid.longitudes.last().unwrap() >= b.max.lng - 1e-12);
        for pair in grid.latitudes.windows(2) {
            assert!((pair[1] - pair[0] - grid.step).abs() < 1e-12);
        }
    }

    #[test]
    fn line_count_matches_span() {
        let step = (100.0 / 6_371_000f64).to_degrees();
        // Between lattice lines 0 and 4 on both axes
        let b = viewport((0.5 * step, 0.5 * step), (3.5 * step, 3.5 * step));
        let grid = GridLines::for_bounds(b, Meters(100.0)).unwrap();
        assert_eq!(grid.latitudes.len(), 5);
        assert_eq!(grid.longitudes.len(), 5);
        assert_eq!(grid.len(), 10);
        assert!(!grid.is_empty());
    }

    #[test]
    fn rejects_bad_spacing() {
        let b = viewport((0.0, 0.0), (1.0, 1.0));
        for s in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                GridLines::for_bounds(b, Meters(s)),
                Err(GridError::InvalidSpacing { .. })
            ));
        }
    }

    #[test]
    fn refuses_dense_grids() {
        // 1 m spacing over a whole degree is ~111k lines
        let b = viewport((0.0, 0.0), (1.0, 1.0));
        let err = GridLines::for_bounds(b, Meters(1.0)).unwrap_err();
        assert!(matches!(err, GridError::TooDense { max: MAX_GRID_LINES, .. }));
    }
}
