//! Snap configuration

use crate::errors::ConfigError;
use crate::types::Meters;

/// Default distance threshold, in meters
pub const DEFAULT_THRESHOLD: Meters = Meters(5.0);

/// Switches and threshold for one snap evaluation.
///
/// Owned by the UI and passed by value on every pointer move; it may change
/// between moves. Fields are public so a UI can toggle them directly; use
/// [`SnapConfig::try_new`] when the threshold comes from user input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapConfig {
    /// Master switch: when off, positions pass through untouched
    pub enabled: bool,
    /// A correction only applies if its score is strictly below this
    pub distance_threshold: Meters,
    pub vertex_snapping: bool,
    pub angle_snapping: bool,
    pub grid_snapping: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        SnapConfig {
            enabled: true,
            distance_threshold: DEFAULT_THRESHOLD,
            vertex_snapping: true,
            angle_snapping: true,
            grid_snapping: false,
        }
    }
}

impl SnapConfig {
    /// Default switches with a validated threshold (finite, greater than zero)
    pub fn try_new(threshold_meters: f64) -> Result<Self, ConfigError> {
        let distance_threshold = Meters::try_positive(threshold_meters)
            .map_err(|source| ConfigError::InvalidThreshold { source })?;
        Ok(SnapConfig {
            distance_threshold,
            ..SnapConfig::default()
        })
    }

    /// A configuration that never snaps
    pub fn disabled() -> Self {
        SnapConfig {
            enabled: false,
            ..SnapConfig::default()
        }
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        SnapConfig { enabled, ..self }
    }

    pub fn with_vertex_snapping(self, on: bool) -> Self {
        SnapConfig { vertex_snapping: on, ..self }
    }

    pub fn with_angle_snapping(self, on: bool) -> Self {
        SnapConfig { angle_snapping: on, ..self }
    }

    pub fn with_grid_snapping(self, on: bool) -> Self {
        SnapConfig { grid_snapping: on, ..self }
    }

    /// True when snapping is on and at least one strategy is selected
    pub fn any_active(&self) -> bool {
        self.enabled && (self.vertex_snapping || self.angle_snapping || self.grid_snapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericError;

    #[test]
    fn default_config() {
        let c = SnapConfig::default();
        assert!(c.enabled);
        assert_eq!(c.distance_threshold, Meters(5.0));
        assert!(c.vertex_snapping && c.angle_snapping);
        assert!(!c.grid_snapping);
    }

    #[test]
    fn try_new_validates_threshold() {
        assert_eq!(SnapConfig::try_new(12.0).map(|c| c.distance_threshold), Ok(Meters(12.0)));
        assert_eq!(
            SnapConfig::try_new(0.0),
            Err(ConfigError::InvalidThreshold { source: NumericError::Zero })
        );
        assert_eq!(
            SnapConfig::try_new(-3.0),
            Err(ConfigError::InvalidThreshold { source: NumericError::Negative })
        );
        assert_eq!(
            SnapConfig::try_new(f64::INFINITY),
            Err(ConfigError::InvalidThreshold { source: NumericError::Infinite })
        );
    }

    #[test]
    fn builders_only_touch_their_field() {
        let c = SnapConfig::default()
            .with_grid_snapping(true)
            .with_angle_snapping(false);
        assert!(c.grid_snapping);
        assert!(!c.angle_snapping);
        assert!(c.vertex_snapping);
        assert_eq!(c.distance_threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn any_active() {
        assert!(SnapConfig::default().any_active());
        assert!(!SnapConfig::disabled().any_active());
        let none = SnapConfig::default()
            .with_vertex_snapping(false)
            .with_angle_snapping(false);
        assert!(!none.any_active());
        assert!(none.with_grid_snapping(true).any_active());
    }
}
