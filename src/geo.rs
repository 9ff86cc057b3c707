//! Spherical geometry primitives.
//!
//! All functions treat a slice of points as a closed ring: edge `i` runs from
//! point `i` to point `(i + 1) % n`, including the wrap edge back to the start.
//! Distances use a sphere of fixed radius [`EARTH_RADIUS`].

use glam::DVec2;

use crate::types::{Degrees, LatLng, Meters, Positioned, SquareMeters};

/// Mean Earth radius used for every distance and area computation
pub const EARTH_RADIUS: Meters = Meters(6_371_000.0);

/// Great-circle distance between two points (haversine).
///
/// Always defined; precision degrades near antipodal points.
pub fn distance(a: LatLng, b: LatLng) -> Meters {
    let (lat1, _) = a.to_radians();
    let (lat2, _) = b.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS * c
}

/// Direction from `a` to `b` in `[0, 360)`, clockwise from north.
///
/// This is `atan2(Δlng, Δlat)` on raw degree deltas: a tangent-plane
/// approximation, not a geodesic initial bearing. Good enough over the tens of
/// meters snapping works at.
pub fn bearing_degrees(a: LatLng, b: LatLng) -> Degrees {
    let delta = b.to_dvec2() - a.to_dvec2();
    Degrees(delta.x.atan2(delta.y).to_degrees()).normalized()
}

/// Point reached by travelling `distance` from `origin` along `bearing`,
/// using an equirectangular approximation.
pub fn project(origin: LatLng, bearing: Degrees, distance: Meters) -> LatLng {
    let theta = bearing.to_radians();
    let angular = distance.raw() / EARTH_RADIUS.raw();
    let d_lat = (angular * theta.cos()).to_degrees();
    let d_lng = (angular * theta.sin()).to_degrees() / origin.lat.to_radians().cos();
    LatLng::from_dvec2(origin.to_dvec2() + DVec2::new(d_lng, d_lat))
}

/// Every edge of the closed ring, as `(from, to)` pairs.
///
/// Yields nothing for fewer than 2 points.
pub fn edges<P: Positioned>(points: &[P]) -> impl Iterator<Item = (LatLng, LatLng)> + '_ {
    let n = if points.len() < 2 { 0 } else { points.len() };
    (0..n).map(move |i| (points[i].position(), points[(i + 1) % n].position()))
}

/// Length of each edge, indexed by the edge's originating point.
pub fn side_lengths<P: Positioned>(points: &[P]) -> Vec<Meters> {
    edges(points).map(|(a, b)| distance(a, b)).collect()
}

/// Sum of all edge lengths including the wrap edge. Zero below 2 points.
pub fn perimeter<P: Positioned>(points: &[P]) -> Meters {
    edges(points).map(|(a, b)| distance(a, b)).sum()
}

/// Unsigned polygon area from the spherical excess ring sum
/// `Σ Δλ · (2 + sin φ1 + sin φ2) · R² / 2`.
///
/// Valid for polygons small relative to the Earth (lots, parcels) that do not
/// cross the antimeridian. Zero below 3 points.
pub fn polygon_area<P: Positioned>(points: &[P]) -> SquareMeters {
    if points.len() < 3 {
        return SquareMeters::ZERO;
    }

    let sum: f64 = edges(points)
        .map(|(a, b)| {
            let d_lng = (b.lng - a.lng).to_radians();
            d_lng * (2.0 + a.lat.to_radians().sin() + b.lat.to_radians().sin())
        })
        .sum();

    (EARTH_RADIUS * EARTH_RADIUS * sum * 0.5).abs()
}

/// Arithmetic lat/lng midpoint of every edge, wrap edge included.
pub fn edge_midpoints<P: Positioned>(points: &[P]) -> Vec<LatLng> {
    edges(points)
        .map(|(a, b)| LatLng::from_dvec2((a.to_dvec2() + b.to_dvec2()) * 0.5))
        .collect()
}

/// Axis-aligned lat/lng envelope
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    /// South-west corner
    pub min: LatLng,
    /// North-east corner
    pub max: LatLng,
}

impl GeoBounds {
    pub fn lat_range(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    pub fn lng_range(&self) -> f64 {
        self.max.lng - self.min.lng
    }

    /// The larger of the two ranges, in degrees. Fitting this span to a
    /// canvas keeps the aspect ratio of the shape.
    pub fn span(&self) -> f64 {
        self.lat_range().max(self.lng_range())
    }

    pub fn center(&self) -> LatLng {
        LatLng::from_dvec2((self.min.to_dvec2() + self.max.to_dvec2()) * 0.5)
    }

    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.min.lat && p.lat <= self.max.lat && p.lng >= self.min.lng && p.lng <= self.max.lng
    }
}

/// Envelope of all points, or `None` when there are none.
pub fn bounds<P: Positioned>(points: &[P]) -> Option<GeoBounds> {
    let first = points.first()?.position().to_dvec2();
    let (min, max) = points
        .iter()
        .map(|p| p.position().to_dvec2())
        .fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    Some(GeoBounds {
        min: LatLng::from_dvec2(min),
        max: LatLng::from_dvec2(max),
    })
}
