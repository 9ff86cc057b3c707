//! Error types with diagnostics using miette
//!
//! Measurement and snapping never fail; these cover the places where caller
//! input is parsed or validated before it reaches the engine.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Unit Errors
// ============================================================================

/// Errors from parsing a display unit name
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("unknown unit: {name:?}")]
    #[diagnostic(
        code(geomeasure::unit::unknown),
        help("expected one of: meters (m), feet (ft), inches (in)")
    )]
    Unknown { name: String },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors from building a snap configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid snap distance threshold: {source}")]
    #[diagnostic(
        code(geomeasure::config::invalid_threshold),
        help("the snap distance threshold must be a finite number of meters greater than zero")
    )]
    InvalidThreshold {
        #[source]
        source: NumericError,
    },
}

// ============================================================================
// Grid Overlay Errors
// ============================================================================

/// Errors from laying out the reference grid over a viewport
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("invalid grid spacing: {spacing} m")]
    #[diagnostic(
        code(geomeasure::grid::invalid_spacing),
        help("grid spacing must be a finite number of meters greater than zero")
    )]
    InvalidSpacing { spacing: f64 },

    #[error("grid too dense: {lines} lines needed, at most {max} allowed")]
    #[diagnostic(
        code(geomeasure::grid::too_dense),
        help("zoom in or increase the grid spacing")
    )]
    TooDense { lines: usize, max: usize },
}
