//! Strongly-typed numeric primitives for geomeasure (zero-cost newtypes).
//!
//! Distances are always carried as [`Meters`], areas as [`SquareMeters`], and
//! angles as [`Degrees`]. Display units only appear at the formatting edge
//! (see [`crate::units`]).

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Linear distance in meters (the canonical internal unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Meters(pub f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    /// Create a length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Meters, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Meters(val))
        }
    }

    /// Create a strictly positive length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Meters, NumericError> {
        let m = Meters::try_new(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(m)
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters { Meters(self.0 + rhs.0) }
}
impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters { Meters(self.0 - rhs.0) }
}
impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters { Meters(self.0 * rhs) }
}
impl Div<f64> for Meters {
    type Output = Meters;
    fn div(self, rhs: f64) -> Meters { Meters(self.0 / rhs) }
}

/// Meters * Meters = SquareMeters
impl Mul<Meters> for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters { SquareMeters(self.0 * rhs.0) }
}

impl AddAssign for Meters {
    fn add_assign(&mut self, rhs: Meters) {
        self.0 += rhs.0;
    }
}

impl Sum for Meters {
    fn sum<I: Iterator<Item = Meters>>(iter: I) -> Meters {
        iter.fold(Meters::ZERO, Add::add)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Area in square meters
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct SquareMeters(pub f64);

impl SquareMeters {
    pub const ZERO: SquareMeters = SquareMeters(0.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn abs(self) -> SquareMeters {
        SquareMeters(self.0.abs())
    }
}

impl Mul<f64> for SquareMeters {
    type Output = SquareMeters;
    fn mul(self, rhs: f64) -> SquareMeters { SquareMeters(self.0 * rhs) }
}

impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Normalize into `[0, 360)`.
    pub fn normalized(self) -> Degrees {
        let d = self.0.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if d >= 360.0 { Degrees(0.0) } else { Degrees(d) }
    }

    /// Smallest angle between two directions, in `[0, 180]`.
    pub fn separation(self, other: Degrees) -> Degrees {
        let diff = (self.0 - other.0).abs();
        if diff > 180.0 { Degrees(360.0 - diff) } else { Degrees(diff) }
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// A geographic coordinate in degrees.
///
/// No range validation is performed: out-of-range values produce
/// mathematically defined but meaningless results downstream.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    /// As a plane vector with x = longitude and y = latitude.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.lng, self.lat)
    }

    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        LatLng { lat: v.y, lng: v.x }
    }

    /// `(lat, lng)` in radians
    #[inline]
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Anything that sits at a coordinate.
pub trait Positioned {
    fn position(&self) -> LatLng;
}

impl Positioned for LatLng {
    #[inline]
    fn position(&self) -> LatLng {
        *self
    }
}

impl<P: Positioned> Positioned for &P {
    #[inline]
    fn position(&self) -> LatLng {
        (**self).position()
    }
}

/// Opaque vertex identifier, stable for the lifetime of a drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One point of a polygon boundary. Sequence order defines the edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub position: LatLng,
}

impl Vertex {
    pub fn new(id: u64, lat: f64, lng: f64) -> Self {
        Vertex {
            id: VertexId(id),
            position: LatLng::new(lat, lng),
        }
    }
}

impl Positioned for Vertex {
    #[inline]
    fn position(&self) -> LatLng {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Meters tests ====================

    #[test]
    fn meters_try_new_rejects_nan_and_infinity() {
        assert_eq!(Meters::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Meters::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Meters::try_new(f64::NEG_INFINITY), Err(NumericError::Infinite));
        assert_eq!(Meters::try_new(-2.0), Ok(Meters(-2.0)));
    }

    #[test]
    fn meters_try_positive() {
        assert_eq!(Meters::try_positive(10.0), Ok(Meters(10.0)));
        assert_eq!(Meters::try_positive(0.0), Err(NumericError::Zero));
        assert_eq!(Meters::try_positive(-1.0), Err(NumericError::Negative));
        assert_eq!(Meters::try_positive(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn meters_arithmetic() {
        let a = Meters(3.0);
        let b = Meters(2.0);

        assert_eq!(a + b, Meters(5.0));
        assert_eq!(a - b, Meters(1.0));
        assert_eq!(a * 2.0, Meters(6.0));
        assert_eq!(a / 2.0, Meters(1.5));
        assert_eq!(a * b, SquareMeters(6.0));
    }

    #[test]
    fn meters_sum() {
        let total: Meters = [Meters(1.0), Meters(2.5), Meters(0.5)].into_iter().sum();
        assert_eq!(total, Meters(4.0));
        let empty: Meters = std::iter::empty().sum();
        assert_eq!(empty, Meters::ZERO);
    }

    // ==================== Degrees tests ====================

    #[test]
    fn degrees_normalized() {
        assert_eq!(Degrees(-90.0).normalized(), Degrees(270.0));
        assert_eq!(Degrees(360.0).normalized(), Degrees(0.0));
        assert_eq!(Degrees(45.0).normalized(), Degrees(45.0));
        assert_eq!(Degrees(725.0).normalized(), Degrees(5.0));
    }

    #[test]
    fn degrees_separation_wraps() {
        assert_eq!(Degrees(358.0).separation(Degrees(0.0)), Degrees(2.0));
        assert_eq!(Degrees(0.0).separation(Degrees(358.0)), Degrees(2.0));
        assert_eq!(Degrees(90.0).separation(Degrees(270.0)), Degrees(180.0));
        assert_eq!(Degrees(50.0).separation(Degrees(45.0)), Degrees(5.0));
    }

    // ==================== LatLng tests ====================

    #[test]
    fn latlng_dvec2_axes() {
        let p = LatLng::new(12.5, -70.25);
        let v = p.to_dvec2();
        assert_eq!(v.x, -70.25);
        assert_eq!(v.y, 12.5);
        assert_eq!(LatLng::from_dvec2(v), p);
    }

    #[test]
    fn vertex_is_positioned() {
        let v = Vertex::new(7, 1.0, 2.0);
        assert_eq!(v.id, VertexId(7));
        assert_eq!(v.position(), LatLng::new(1.0, 2.0));
        assert_eq!((&v).position(), LatLng::new(1.0, 2.0));
    }
}
