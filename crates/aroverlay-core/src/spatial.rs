//! Records passed through the radar boundary: features and device pose.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// A geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude above sea level in meters.
    pub altitude: f64,
}

impl GeoLocation {
    /// Creates a new location.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

/// A point of interest shown by the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Stable identifier.
    pub identifier: String,
    /// Display name.
    pub name: String,
    /// Where the feature is.
    pub location: GeoLocation,
}

impl Feature {
    /// Creates a new feature.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        location: GeoLocation,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            location,
        }
    }
}

/// Snapshot of the device pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialState {
    /// Device location.
    pub location: GeoLocation,
    /// Rotation from the device frame to local East-North-Up.
    pub orientation: DQuat,
    /// Seconds since the Unix epoch at which the snapshot was taken.
    pub timestamp: f64,
}

impl Default for SpatialState {
    fn default() -> Self {
        Self {
            location: GeoLocation::default(),
            orientation: DQuat::IDENTITY,
            timestamp: 0.0,
        }
    }
}

impl SpatialState {
    /// Creates a new spatial state.
    pub fn new(location: GeoLocation, orientation: DQuat, timestamp: f64) -> Self {
        Self {
            location,
            orientation: orientation.normalize(),
            timestamp,
        }
    }

    /// Direction the camera looks in East-North-Up coordinates.
    ///
    /// The camera looks down the device's `-Z` axis.
    pub fn view_direction(&self) -> DVec3 {
        self.orientation * DVec3::NEG_Z
    }

    /// Up direction of the device screen in East-North-Up coordinates.
    pub fn up_direction(&self) -> DVec3 {
        self.orientation * DVec3::Y
    }

    /// Whether the device lies flat, i.e. the camera points more vertically
    /// than horizontally.
    pub fn is_device_horizontal(&self) -> bool {
        self.view_direction().z.abs() > std::f64::consts::FRAC_1_SQRT_2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_orientation_looks_down() {
        let state = SpatialState::default();
        assert!((state.view_direction() - DVec3::NEG_Z).length() < 1e-12);
        assert!((state.up_direction() - DVec3::Y).length() < 1e-12);
        assert!(state.is_device_horizontal());
    }

    #[test]
    fn test_horizontal_threshold_is_45_degrees() {
        let tilted = |degrees: f64| SpatialState {
            orientation: DQuat::from_rotation_x(degrees.to_radians()),
            ..SpatialState::default()
        };
        assert!(tilted(30.0).is_device_horizontal());
        assert!(!tilted(60.0).is_device_horizontal());
        assert!(tilted(170.0).is_device_horizontal());
    }

    #[test]
    fn test_upright_device_looks_north() {
        // Tilting the device up by 90 degrees about East points the camera north.
        let orientation = DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2);
        let state = SpatialState::new(GeoLocation::new(52.0, 4.3, 0.0), orientation, 0.0);
        assert!((state.view_direction() - DVec3::Y).length() < 1e-12);
        assert!((state.up_direction() - DVec3::Z).length() < 1e-12);
        assert!(!state.is_device_horizontal());
    }
}
