//! Display units and conversion.
//!
//! Meters and square meters are the pivot: every conversion goes
//! `from → meters → to`, never directly between two display units.

use std::fmt;
use std::str::FromStr;

use crate::errors::UnitError;
use crate::types::{Meters, SquareMeters};

const METERS_PER_FOOT: f64 = 0.3048;
const METERS_PER_INCH: f64 = 0.0254;

/// A unit the user can pick for display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Meters,
    Feet,
    Inches,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Meters, Unit::Feet, Unit::Inches];

    /// How many meters one of this unit is
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Unit::Meters => 1.0,
            Unit::Feet => METERS_PER_FOOT,
            Unit::Inches => METERS_PER_INCH,
        }
    }

    /// How many square meters one square of this unit is
    pub fn square_meters_per_unit(self) -> f64 {
        let f = self.meters_per_unit();
        f * f
    }

    /// Short suffix for lengths
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Feet => "ft",
            Unit::Inches => "in",
        }
    }

    /// Short suffix for areas
    pub fn area_suffix(self) -> &'static str {
        match self {
            Unit::Meters => "m²",
            Unit::Feet => "ft²",
            Unit::Inches => "in²",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Meters => "meters",
            Unit::Feet => "feet",
            Unit::Inches => "inches",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meters" | "meter" | "m" => Ok(Unit::Meters),
            "feet" | "foot" | "ft" => Ok(Unit::Feet),
            "inches" | "inch" | "in" => Ok(Unit::Inches),
            _ => Err(UnitError::Unknown { name: s.to_string() }),
        }
    }
}

/// Convert a length between display units.
pub fn convert_distance(value: f64, from: Unit, to: Unit) -> f64 {
    value * from.meters_per_unit() / to.meters_per_unit()
}

/// Convert an area between display units.
pub fn convert_area(value: f64, from: Unit, to: Unit) -> f64 {
    value * from.square_meters_per_unit() / to.square_meters_per_unit()
}

/// Render a length as `"<value> <suffix>"` with two decimals, e.g. `"12.34 ft"`.
pub fn format_distance(distance: Meters, unit: Unit) -> String {
    let value = convert_distance(distance.raw(), Unit::Meters, unit);
    format!("{value:.2} {}", unit.suffix())
}

/// Render an area as `"<value> <suffix>"` with two decimals, e.g. `"12.34 ft²"`.
pub fn format_area(area: SquareMeters, unit: Unit) -> String {
    let value = convert_area(area.raw(), Unit::Meters, unit);
    format!("{value:.2} {}", unit.area_suffix())
}
