//! Measurement and snapping engine for polygons drawn on a map.
//!
//! Given the ordered vertices of a polygon in latitude/longitude, geomeasure
//! computes side lengths, perimeter and area on a sphere, converts and formats
//! them in meters, feet or inches, and corrects vertex positions during a drag
//! by snapping to nearby vertices, compass bearings, or a lattice.
//!
//! Everything is a pure function of its inputs. The caller owns the vertex
//! sequence and writes corrected positions back itself.
//!
//! ```
//! use geomeasure::{LatLng, SnapConfig, Unit, Vertex, VertexId, aggregate, snap};
//!
//! let mut lot = vec![
//!     Vertex::new(1, 0.0, 0.0),
//!     Vertex::new(2, 0.0, 0.0009),
//!     Vertex::new(3, 0.0009, 0.0009),
//!     Vertex::new(4, 0.0009, 0.0),
//! ];
//!
//! // Dragging vertex 4 close to due north of vertex 3 snaps the edge to 0°
//! let config = SnapConfig::default().with_vertex_snapping(false);
//! let out = snap::resolve(LatLng::new(0.0012, 0.00089), &lot, Some(VertexId(4)), &config, 19.0);
//! assert!(out.snapped());
//! lot[3].position = out.position;
//!
//! let m = aggregate(&lot).expect("four vertices");
//! println!("{}", m.report(Unit::Feet));
//! ```

pub mod errors;
pub mod geo;
pub mod log;
pub mod measure;
pub mod overlay;
pub mod snap;
pub mod types;
pub mod units;

pub use errors::{ConfigError, GridError, UnitError};
pub use geo::{
    EARTH_RADIUS, GeoBounds, bearing_degrees, bounds, distance, edge_midpoints, perimeter,
    polygon_area, side_lengths,
};
pub use measure::{MeasurementReport, MeasurementResult, aggregate};
pub use overlay::GridLines;
pub use snap::{SnapCandidate, SnapConfig, SnapKind, SnapOutcome, Snapper};
pub use types::{Degrees, LatLng, Meters, NumericError, Positioned, SquareMeters, Vertex, VertexId};
pub use units::{Unit, convert_area, convert_distance, format_area, format_distance};
