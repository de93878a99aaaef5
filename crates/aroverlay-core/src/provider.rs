//! Camera discovery.
//!
//! A [`CameraProvider`] decides which [`CameraModel`] represents the camera of
//! the current device. Discovery never fails: when no physical camera can be
//! determined, the provider falls back to a [`VirtualCamera`] that corresponds
//! to looking through the device at arm's length.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraModel, CameraSpec};
use crate::options::CameraSource;

/// Capability to produce the camera of the current device.
pub trait CameraProvider: Send + Sync {
    /// Returns the most appropriate camera.
    fn camera(&self) -> CameraModel;

    /// Returns a short name for logging.
    fn name(&self) -> &'static str;
}

/// Parameters of the virtual camera used on devices without a camera.
///
/// Looking through a screen held at arm's length behaves like a lens whose
/// focal length is the arm length and whose sensor is the screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualCamera {
    /// Distance between the eye and the screen in meters.
    pub arm_length: f64,
    /// Physical screen size in meters.
    pub screen_size: DVec2,
}

impl Default for VirtualCamera {
    fn default() -> Self {
        Self {
            arm_length: 0.5,
            screen_size: DVec2::new(0.0495, 0.0742),
        }
    }
}

impl VirtualCamera {
    /// Sets the arm length.
    #[must_use]
    pub fn with_arm_length(mut self, arm_length: f64) -> Self {
        self.arm_length = arm_length;
        self
    }

    /// Sets the screen size.
    #[must_use]
    pub fn with_screen_size(mut self, screen_size: DVec2) -> Self {
        self.screen_size = screen_size;
        self
    }

    /// Builds the non-physical camera model.
    ///
    /// Invalid parameters are replaced by the defaults.
    pub fn to_camera(&self) -> CameraModel {
        match CameraModel::new(self.arm_length, self.screen_size, false) {
            Ok(camera) => camera,
            Err(err) => {
                log::warn!("invalid virtual camera ({err}), using defaults");
                fallback_virtual_camera()
            }
        }
    }
}

fn fallback_virtual_camera() -> CameraModel {
    let defaults = VirtualCamera::default();
    CameraModel::new(defaults.arm_length, defaults.screen_size, false)
        .expect("default virtual camera is valid")
}

/// Provider that always returns a virtual camera.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualCameraProvider {
    virtual_camera: VirtualCamera,
}

impl VirtualCameraProvider {
    /// Creates a provider for the given virtual camera.
    pub fn new(virtual_camera: VirtualCamera) -> Self {
        Self { virtual_camera }
    }
}

impl CameraProvider for VirtualCameraProvider {
    fn camera(&self) -> CameraModel {
        self.virtual_camera.to_camera()
    }

    fn name(&self) -> &'static str {
        "virtual"
    }
}

/// Provider that returns an explicitly configured camera.
#[derive(Debug, Clone, Copy)]
pub struct FixedCameraProvider {
    spec: CameraSpec,
    physical: bool,
    fallback: VirtualCamera,
}

impl FixedCameraProvider {
    /// Creates a provider for a fixed camera spec.
    pub fn new(spec: CameraSpec, physical: bool) -> Self {
        Self {
            spec,
            physical,
            fallback: VirtualCamera::default(),
        }
    }
}

impl CameraProvider for FixedCameraProvider {
    fn camera(&self) -> CameraModel {
        match self.spec.to_camera(self.physical) {
            Ok(camera) => camera,
            Err(err) => {
                log::warn!("invalid fixed camera ({err}), using virtual camera");
                self.fallback.to_camera()
            }
        }
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// One entry of the device camera catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCamera {
    /// Prefix of the device model identifier, e.g. `"iPhone2,"`.
    pub model_prefix: String,
    /// Back-facing camera optics.
    pub spec: CameraSpec,
}

impl DeviceCamera {
    /// Creates a catalog entry.
    pub fn new(model_prefix: impl Into<String>, spec: CameraSpec) -> Self {
        Self {
            model_prefix: model_prefix.into(),
            spec,
        }
    }

    /// Whether this entry applies to the given model identifier.
    pub fn matches(&self, model: &str) -> bool {
        model.starts_with(&self.model_prefix)
    }
}

/// Built-in catalog of back-facing cameras, most specific prefixes first.
pub fn default_device_catalog() -> Vec<DeviceCamera> {
    vec![
        DeviceCamera::new(
            "iPhone7,",
            CameraSpec::new(0.0042, DVec2::new(0.0048, 0.0036)),
        ),
        DeviceCamera::new(
            "iPhone3,",
            CameraSpec::new(0.00385, DVec2::new(0.004_54, 0.003_42)),
        ),
        DeviceCamera::new(
            "iPhone2,",
            CameraSpec::new(0.00385, DVec2::new(0.003_58, 0.002_69)),
        ),
        DeviceCamera::new(
            "iPhone1,",
            CameraSpec::new(0.00385, DVec2::new(0.003_58, 0.002_69)),
        ),
    ]
}

/// Provider that maps a device model identifier to its physical camera.
#[derive(Debug, Clone)]
pub struct DeviceCameraProvider {
    model: String,
    catalog: Vec<DeviceCamera>,
    fallback: VirtualCamera,
}

impl DeviceCameraProvider {
    /// Creates a provider using the built-in catalog.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            catalog: default_device_catalog(),
            fallback: VirtualCamera::default(),
        }
    }

    /// Replaces the device catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Vec<DeviceCamera>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replaces the virtual camera used when the device has no known camera.
    #[must_use]
    pub fn with_fallback(mut self, fallback: VirtualCamera) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns the device model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CameraProvider for DeviceCameraProvider {
    fn camera(&self) -> CameraModel {
        for entry in self.catalog.iter().filter(|e| e.matches(&self.model)) {
            match entry.spec.to_camera(true) {
                Ok(camera) => return camera,
                Err(err) => {
                    log::warn!(
                        "skipping camera catalog entry '{}': {err}",
                        entry.model_prefix
                    );
                }
            }
        }

        log::info!(
            "no camera known for device '{}', using virtual camera",
            self.model
        );
        self.fallback.to_camera()
    }

    fn name(&self) -> &'static str {
        "device"
    }
}

/// Builds the provider described by a camera source.
pub fn provider_for(source: &CameraSource) -> Box<dyn CameraProvider> {
    match source {
        CameraSource::Virtual(virtual_camera) => {
            Box::new(VirtualCameraProvider::new(*virtual_camera))
        }
        CameraSource::Device { model, catalog } => {
            let mut provider = DeviceCameraProvider::new(model.clone());
            if let Some(catalog) = catalog {
                provider = provider.with_catalog(catalog.clone());
            }
            Box::new(provider)
        }
        CameraSource::Fixed { spec, physical } => {
            Box::new(FixedCameraProvider::new(*spec, *physical))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_camera_is_not_physical() {
        let camera = VirtualCameraProvider::default().camera();
        assert!(!camera.is_physical());
        assert_eq!(camera.focal_length(), 0.5);
        assert_eq!(camera.image_plane_size(), DVec2::new(0.0495, 0.0742));
    }

    #[test]
    fn test_invalid_virtual_camera_uses_defaults() {
        let broken = VirtualCamera::default().with_arm_length(0.0);
        let camera = VirtualCameraProvider::new(broken).camera();
        assert_eq!(camera, VirtualCamera::default().to_camera());
    }

    #[test]
    fn test_device_lookup_by_prefix() {
        let camera = DeviceCameraProvider::new("iPhone2,1").camera();
        assert!(camera.is_physical());
        assert_eq!(camera.focal_length(), 0.00385);
        assert_eq!(camera.image_plane_size(), DVec2::new(0.003_58, 0.002_69));
    }

    #[test]
    fn test_unknown_device_falls_back_to_virtual() {
        let camera = DeviceCameraProvider::new("iPod2,1").camera();
        assert!(!camera.is_physical());
    }

    #[test]
    fn test_device_skips_invalid_entries() {
        let catalog = vec![
            DeviceCamera::new("Phone", CameraSpec::new(-1.0, DVec2::ONE)),
            DeviceCamera::new("Phone", CameraSpec::new(0.004, DVec2::new(0.0048, 0.0036))),
        ];
        let camera = DeviceCameraProvider::new("Phone1")
            .with_catalog(catalog)
            .camera();
        assert!(camera.is_physical());
        assert_eq!(camera.focal_length(), 0.004);
    }

    #[test]
    fn test_fixed_provider() {
        let spec = CameraSpec::new(0.004, DVec2::new(0.0048, 0.0036));
        let camera = FixedCameraProvider::new(spec, true).camera();
        assert_eq!(camera.spec(), spec);

        let broken = FixedCameraProvider::new(CameraSpec::new(0.004, DVec2::ZERO), true);
        assert!(!broken.camera().is_physical());
    }

    #[test]
    fn test_provider_for_source() {
        let source = CameraSource::Device {
            model: "iPhone3,1".to_string(),
            catalog: None,
        };
        let provider = provider_for(&source);
        assert_eq!(provider.name(), "device");
        assert!(provider.camera().is_physical());

        let provider = provider_for(&CameraSource::default());
        assert_eq!(provider.name(), "virtual");
        assert!(!provider.camera().is_physical());
    }
}
