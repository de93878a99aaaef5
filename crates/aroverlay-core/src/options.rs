//! Configuration options for aroverlay.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::CameraSpec;
use crate::error::Result;
use crate::provider::{DeviceCamera, VirtualCamera};

/// Global configuration options for aroverlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Options {
    /// Where the current camera comes from.
    pub camera: CameraSource,

    /// Radar overlay defaults.
    pub radar: RadarOptions,
}

impl Options {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the camera source.
    #[must_use]
    pub fn with_camera(mut self, camera: CameraSource) -> Self {
        self.camera = camera;
        self
    }

    /// Sets the radar defaults.
    #[must_use]
    pub fn with_radar(mut self, radar: RadarOptions) -> Self {
        self.radar = radar;
        self
    }

    /// Parses options from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let options = Self::from_json_str(&contents)?;
        log::debug!("loaded options from {}", path.as_ref().display());
        Ok(options)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Selection policy for the current camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraSource {
    /// No camera: look through the device at arm's length.
    Virtual(VirtualCamera),
    /// Look up the back-facing camera of a device model.
    Device {
        /// Device model identifier, e.g. `"iPhone2,1"`.
        model: String,
        /// Catalog replacing the built-in one.
        #[serde(default)]
        catalog: Option<Vec<DeviceCamera>>,
    },
    /// An explicitly configured camera.
    Fixed {
        /// Lens and sensor.
        spec: CameraSpec,
        /// Whether the values describe a real camera.
        physical: bool,
    },
}

impl Default for CameraSource {
    fn default() -> Self {
        Self::Virtual(VirtualCamera::default())
    }
}

/// Defaults applied to newly created radar views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarOptions {
    /// Radar extent in meters.
    pub radius: f64,
    /// Whether blips use altitude relative to the device.
    pub use_relative_altitude: bool,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            radius: 1000.0,
            use_relative_altitude: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OverlayError;
    use glam::DVec2;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.camera, CameraSource::Virtual(VirtualCamera::default()));
        assert_eq!(options.radar.radius, 1000.0);
        assert!(!options.radar.use_relative_altitude);
    }

    #[test]
    fn test_json_round_trip() {
        let options = Options::new()
            .with_camera(CameraSource::Fixed {
                spec: CameraSpec::new(0.004, DVec2::new(0.0048, 0.0036)),
                physical: true,
            })
            .with_radar(RadarOptions {
                radius: 250.0,
                use_relative_altitude: true,
            });
        let json = options.to_json_string().unwrap();
        assert_eq!(Options::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "camera": { "kind": "device", "model": "iPhone2,1" } }"#;
        let options = Options::from_json_str(json).unwrap();
        assert_eq!(
            options.camera,
            CameraSource::Device {
                model: "iPhone2,1".to_string(),
                catalog: None,
            }
        );
        assert_eq!(options.radar, RadarOptions::default());
    }

    #[test]
    fn test_partial_virtual_camera_uses_defaults() {
        let options = Options::from_json_str(r#"{ "camera": { "kind": "virtual" } }"#).unwrap();
        assert_eq!(options.camera, CameraSource::Virtual(VirtualCamera::default()));

        let json = r#"{ "camera": { "kind": "virtual", "arm_length": 0.6 } }"#;
        let options = Options::from_json_str(json).unwrap();
        assert_eq!(
            options.camera,
            CameraSource::Virtual(VirtualCamera::default().with_arm_length(0.6))
        );
    }

    #[test]
    fn test_invalid_json() {
        let result = Options::from_json_str(r#"{ "camera": { "kind": "telescope" } }"#);
        assert!(matches!(result, Err(OverlayError::JsonError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Options::load("/nonexistent/aroverlay.json");
        assert!(matches!(result, Err(OverlayError::IoError(_))));
    }
}
