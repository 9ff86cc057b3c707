//! Live measurements of the polygon being edited.
//!
//! Recomputed in full from the vertex sequence on every change; there is no
//! incremental update path, so a result is always consistent with the
//! vertices it came from.

use std::fmt;

use crate::geo::{perimeter, polygon_area, side_lengths};
use crate::types::{Meters, Positioned, SquareMeters};
use crate::units::{Unit, format_area, format_distance};

/// Side lengths, perimeter and area of a closed ring
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementResult {
    /// One entry per edge, indexed by the edge's originating vertex
    pub side_lengths: Vec<Meters>,
    pub perimeter: Meters,
    /// Exactly zero below three vertices
    pub area: SquareMeters,
}

/// Measure the ring formed by `points`.
///
/// Returns `None` below two points: there is nothing to display, which is
/// different from a measured zero.
pub fn aggregate<P: Positioned>(points: &[P]) -> Option<MeasurementResult> {
    if points.len() < 2 {
        return None;
    }

    let result = MeasurementResult {
        side_lengths: side_lengths(points),
        perimeter: perimeter(points),
        area: polygon_area(points),
    };
    crate::log::trace!(
        sides = result.side_lengths.len(),
        perimeter = result.perimeter.raw(),
        area = result.area.raw(),
        "measured"
    );
    Some(result)
}

impl MeasurementResult {
    /// Display strings for the measurement panel and export legend
    pub fn report(&self, unit: Unit) -> MeasurementReport {
        MeasurementReport {
            sides: self
                .side_lengths
                .iter()
                .enumerate()
                .map(|(i, &len)| format!("Side {}: {}", i + 1, format_distance(len, unit)))
                .collect(),
            perimeter: format!("Perimeter: {}", format_distance(self.perimeter, unit)),
            area: format!("Area: {}", format_area(self.area, unit)),
        }
    }
}

/// Formatted measurement lines in one display unit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasurementReport {
    /// `"Side 1: 12.34 m"`, one per edge, 1-based
    pub sides: Vec<String>,
    pub perimeter: String,
    pub area: String,
}

impl fmt::Display for MeasurementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for side in &self.sides {
            writeln!(f, "{side}")?;
        }
        writeln!(f, "{}", self.perimeter)?;
        write!(f, "{}", self.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::EARTH_RADIUS;
    use crate::types::{LatLng, Vertex};

    fn deg(m: f64) -> f64 {
        (m / EARTH_RADIUS.raw()).to_degrees()
    }

    #[test]
    fn nothing_below_two_vertices() {
        assert_eq!(aggregate::<Vertex>(&[]), None);
        assert_eq!(aggregate(&[Vertex::new(1, 10.0, 10.0)]), None);
    }

    #[test]
    fn two_vertices_double_back() {
        let vs = [Vertex::new(1, 0.0, 0.0), Vertex::new(2, 0.0, 0.001)];
        let m = aggregate(&vs).unwrap();
        assert_eq!(m.side_lengths.len(), 2);
        assert_eq!(m.side_lengths[0], m.side_lengths[1]);
        assert_eq!(m.area, SquareMeters::ZERO);
        assert_eq!(m.perimeter, m.side_lengths[0] * 2.0);
    }

    #[test]
    fn one_side_per_vertex() {
        let s = deg(100.0);
        let vs = [
            Vertex::new(1, 0.0, 0.0),
            Vertex::new(2, 0.0, s),
            Vertex::new(3, s, s),
            Vertex::new(4, s, 0.0),
        ];
        let m = aggregate(&vs).unwrap();
        assert_eq!(m.side_lengths.len(), 4);
        assert!((m.perimeter.raw() - 400.0).abs() < 4.0);
        assert!((m.area.raw() - 10_000.0).abs() < 100.0);
    }

    #[test]
    fn works_on_bare_coordinates() {
        let pts = [LatLng::new(0.0, 0.0), LatLng::new(0.0, 0.001), LatLng::new(0.001, 0.0)];
        let m = aggregate(&pts).unwrap();
        assert_eq!(m.side_lengths.len(), 3);
        assert!(m.area.raw() > 0.0);
    }

    #[test]
    fn report_lines() {
        let m = MeasurementResult {
            side_lengths: vec![Meters(10.0), Meters(20.0), Meters(22.360_679_775)],
            perimeter: Meters(52.360_679_775),
            area: SquareMeters(100.0),
        };
        insta::assert_snapshot!(m.report(Unit::Meters), @r"
        Side 1: 10.00 m
        Side 2: 20.00 m
        Side 3: 22.36 m
        Perimeter: 52.36 m
        Area: 100.00 m²
        ");
        insta::assert_snapshot!(m.report(Unit::Feet), @r"
        Side 1: 32.81 ft
        Side 2: 65.62 ft
        Side 3: 73.36 ft
        Perimeter: 171.79 ft
        Area: 1076.39 ft²
        ");
    }

    #[test]
    fn report_of_degenerate_ring() {
        let m = MeasurementResult {
            side_lengths: vec![Meters(0.0), Meters(0.0)],
            perimeter: Meters::ZERO,
            area: SquareMeters::ZERO,
        };
        let report = m.report(Unit::Inches);
        assert_eq!(report.sides, vec!["Side 1: 0.00 in", "Side 2: 0.00 in"]);
        assert_eq!(report.area, "Area: 0.00 in²");
    }
}
