//! Global state management for aroverlay.
//!
//! Two process-wide values live here: the options set once at start-up and the
//! current camera, resolved on first access and cached for the lifetime of the
//! process.

use std::sync::OnceLock;

use crate::camera::CameraModel;
use crate::error::{OverlayError, Result};
use crate::options::Options;
use crate::provider::{provider_for, CameraProvider};

/// Options set by [`init_options`].
static OPTIONS: OnceLock<Options> = OnceLock::new();

/// The memoized current camera.
static CURRENT_CAMERA: OnceLock<CameraModel> = OnceLock::new();

/// Sets the global options.
///
/// This should be called once at the start of the program, before the current
/// camera is first requested.
pub fn init_options(options: Options) -> Result<()> {
    OPTIONS
        .set(options)
        .map_err(|_| OverlayError::AlreadyInitialized)?;

    if is_current_camera_resolved() {
        log::warn!("options set after the current camera was resolved; camera source ignored");
    }
    Ok(())
}

/// Returns whether the global options have been set.
pub fn is_initialized() -> bool {
    OPTIONS.get().is_some()
}

/// Returns a copy of the global options, or the defaults if none were set.
pub fn options() -> Options {
    OPTIONS.get().cloned().unwrap_or_default()
}

/// Returns the camera of the current device.
///
/// The camera source comes from the global options. The first call resolves
/// the camera; every later call returns the same instance.
pub fn current_camera() -> &'static CameraModel {
    CURRENT_CAMERA.get_or_init(|| resolve(provider_for(&options().camera).as_ref()))
}

/// Returns the current camera, resolving it with `provider` if this is the
/// first request in the process.
///
/// Once resolved, `provider` is ignored.
pub fn current_camera_with(provider: &dyn CameraProvider) -> &'static CameraModel {
    CURRENT_CAMERA.get_or_init(|| resolve(provider))
}

/// Returns whether the current camera has been resolved.
pub fn is_current_camera_resolved() -> bool {
    CURRENT_CAMERA.get().is_some()
}

fn resolve(provider: &dyn CameraProvider) -> CameraModel {
    let camera = provider.camera();
    log::info!(
        "current camera resolved by {} provider: physical={}, focal length={} m, angle of view={:.3} rad",
        provider.name(),
        camera.is_physical(),
        camera.focal_length(),
        camera.angle_of_view()
    );
    camera
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DeviceCameraProvider, VirtualCameraProvider};

    // The only test in this binary that sets the options.
    #[test]
    fn test_options_are_set_once() {
        let options = Options::new().with_radar(crate::options::RadarOptions {
            radius: 120.0,
            use_relative_altitude: true,
        });
        init_options(options.clone()).unwrap();
        assert!(is_initialized());
        assert_eq!(super::options(), options);

        assert!(matches!(
            init_options(Options::default()),
            Err(OverlayError::AlreadyInitialized)
        ));
        assert_eq!(super::options(), options);
    }

    // The only test in this binary that resolves the current camera.
    #[test]
    fn test_current_camera_is_memoized() {
        let first = current_camera_with(&DeviceCameraProvider::new("iPhone2,1"));
        assert!(is_current_camera_resolved());
        assert!(first.is_physical());

        let second = current_camera_with(&VirtualCameraProvider::default());
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, current_camera()));
    }
}
