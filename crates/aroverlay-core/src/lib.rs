//! Core of aroverlay.
//!
//! This crate provides the types and algorithms behind the overlay:
//! - [`CameraModel`] for camera optics and the view-plane perspective transform
//! - [`CameraProvider`] implementations that decide which camera the device has
//! - The memoized current camera and the global options
//! - [`RadarView`], the boundary of the radar overlay

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod error;
pub mod options;
pub mod provider;
pub mod radar;
pub mod spatial;
pub mod state;
pub mod uniforms;

pub use camera::{CameraModel, CameraSpec};
pub use error::{OverlayError, Result};
pub use options::{CameraSource, Options, RadarOptions};
pub use provider::{
    default_device_catalog, provider_for, CameraProvider, DeviceCamera, DeviceCameraProvider,
    FixedCameraProvider, VirtualCamera, VirtualCameraProvider,
};
pub use radar::{RadarBounds, RadarLayers, RadarView};
pub use spatial::{Feature, GeoLocation, SpatialState};
pub use state::{current_camera, current_camera_with, is_current_camera_resolved};
pub use uniforms::CameraUniforms;

// Re-export glam types for convenience
pub use glam::{DMat4, DQuat, DVec2, DVec3};
